use std::borrow::Cow;
use std::ffi::OsString;
use std::path::Path;
use std::process;

use crate::error::CliError;
use crate::image::Image;

mod error;
mod image;

fn main() {
    if let Err(e) = run(std::env::args_os().nth(1)) {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
}

fn run(path: Option<OsString>) -> Result<(), CliError> {
    let path = path.ok_or(CliError::Usage)?;
    let path = Path::new(&path);

    let image = Image::open(path)?;
    let report = gb_cart::decode(image.as_bytes())?;

    print!("{}", report.display(&display_name(path)));
    Ok(())
}

/// The final path component, as the report header shows it.
fn display_name(path: &Path) -> Cow<str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}
