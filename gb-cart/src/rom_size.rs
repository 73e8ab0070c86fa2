use std::fmt::{self, Display, Formatter};

/// A decoded ROM size code from 0x148.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RomSize {
    code: u8,
    known: Option<(&'static str, u16)>,
}

impl RomSize {
    pub fn from_code(code: u8) -> RomSize {
        let known = match code {
            0x00 => Some(("32 KiB", 2)),
            0x01 => Some(("64 KiB", 4)),
            0x02 => Some(("128 KiB", 8)),
            0x03 => Some(("256 KiB", 16)),
            0x04 => Some(("512 KiB", 32)),
            0x05 => Some(("1 MiB", 64)),
            0x06 => Some(("2 MiB", 128)),
            0x07 => Some(("4 MiB", 256)),
            0x08 => Some(("8 MiB", 512)),
            0x52 => Some(("1.1 MiB", 72)),
            0x53 => Some(("1.2 MiB", 80)),
            0x54 => Some(("1.5 MiB", 96)),
            _ => None,
        };
        RomSize { code, known }
    }

    pub fn code(self) -> u8 {
        self.code
    }

    pub fn size_text(self) -> Option<&'static str> {
        self.known.map(|(text, _)| text)
    }

    /// The number of 16 KiB banks, if the code is known.
    pub fn banks(self) -> Option<u16> {
        self.known.map(|(_, banks)| banks)
    }
}

impl Display for RomSize {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.known {
            Some((text, banks)) => write!(f, "{} ({} banks)", text, banks),
            None => write!(f, "Unknown code 0x{:02X}", self.code),
        }
    }
}
