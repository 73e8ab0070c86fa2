mod cartridge_type;
mod checksum;
mod display_report;
mod error;
mod flags;
mod header_reader;
mod ram_size;
mod report;
mod rom_size;
mod text;


pub use crate::cartridge_type::CartridgeType;
pub use crate::checksum::{global_checksum, header_checksum};
pub use crate::display_report::DisplayReport;
pub use crate::error::DecodeError;
pub use crate::flags::{CgbFlag, Destination, SgbFlag};
pub use crate::header_reader::HeaderReader;
pub use crate::ram_size::RamSize;
pub use crate::report::{decode, DecodedReport};
pub use crate::rom_size::RomSize;

/// The offset one past the last byte of the cartridge header. Images shorter than this can't be
/// decoded.
pub const HEADER_END: usize = 0x150;
