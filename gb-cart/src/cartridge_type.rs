use std::fmt::{self, Display, Formatter};

/// The cartridge type byte at 0x147, which names the memory bank controller and any extra
/// hardware on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CartridgeType(pub u8);

impl CartridgeType {
    pub fn code(self) -> u8 {
        self.0
    }

    /// Returns `None` for codes with no documented meaning.
    pub fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            0x00 => "ROM ONLY",
            0x01 => "MBC1",
            0x02 => "MBC1+RAM",
            0x03 => "MBC1+RAM+BATTERY",
            0x05 => "MBC2",
            0x06 => "MBC2+BATTERY",
            0x08 => "ROM+RAM",
            0x09 => "ROM+RAM+BATTERY",
            0x0b => "MMM01",
            0x0c => "MMM01+RAM",
            0x0d => "MMM01+RAM+BATTERY",
            0x0f => "MBC3+TIMER+BATTERY",
            0x10 => "MBC3+TIMER+RAM+BATTERY",
            0x11 => "MBC3",
            0x12 => "MBC3+RAM",
            0x13 => "MBC3+RAM+BATTERY",
            0x19 => "MBC5",
            0x1a => "MBC5+RAM",
            0x1b => "MBC5+RAM+BATTERY",
            0x1c => "MBC5+RUMBLE",
            0x1d => "MBC5+RUMBLE+RAM",
            0x1e => "MBC5+RUMBLE+RAM+BATTERY",
            0x20 => "MBC6",
            0x22 => "MBC7+SENSOR+RUMBLE+RAM+BATTERY",
            0xfc => "POCKET CAMERA",
            0xfd => "BANDAI TAMA5",
            0xfe => "HuC3",
            0xff => "HuC1+RAM+BATTERY",
            _ => return None,
        })
    }
}

impl Display for CartridgeType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name().unwrap_or("Unknown"))
    }
}
