use std::fs::File;
use std::path::Path;

use memmap::{Mmap, MmapOptions};

use crate::error::CliError;

/// A read-only view of a ROM file.
///
/// Zero-length files can't be mapped, so they're represented without a mapping and decode as an
/// empty buffer.
pub enum Image {
    Mapped(Mmap),
    Empty,
}

impl Image {
    pub fn open(path: &Path) -> Result<Image, CliError> {
        let io_error = |source| CliError::Io {
            path: path.to_owned(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        if file.metadata().map_err(io_error)?.len() == 0 {
            return Ok(Image::Empty);
        }
        let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(io_error)?;
        Ok(Image::Mapped(mmap))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Image::Mapped(mmap) => &mmap[..],
            Image::Empty => &[],
        }
    }
}
