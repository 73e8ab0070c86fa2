use std::fmt::{self, Display, Formatter};

/// The external RAM size code at 0x149.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RamSize(pub u8);

impl RamSize {
    pub fn code(self) -> u8 {
        self.0
    }

    pub fn size_text(self) -> Option<&'static str> {
        Some(match self.0 {
            0x00 => "None",
            0x01 => "2 KiB",
            0x02 => "8 KiB",
            0x03 => "32 KiB (4×8KiB)",
            0x04 => "128 KiB (16×8KiB)",
            0x05 => "64 KiB (8×8KiB)",
            _ => return None,
        })
    }
}

impl Display for RamSize {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.size_text() {
            Some(text) => f.write_str(text),
            None => write!(f, "Unknown code 0x{:02X}", self.0),
        }
    }
}
