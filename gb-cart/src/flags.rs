use std::fmt::{self, Display, Formatter};

/// The CGB flag at 0x143.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CgbFlag(pub u8);

impl CgbFlag {
    pub fn description(self) -> &'static str {
        if self.0 == 0xc0 {
            "CGB-only"
        } else if self.0 & 0x80 == 0x80 {
            "CGB support"
        } else {
            "DMG compatible"
        }
    }
}

/// The SGB flag at 0x146. Only 0x03 enables SGB functions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SgbFlag(pub u8);

impl SgbFlag {
    pub fn description(self) -> &'static str {
        if self.0 == 0x03 {
            "SGB functions"
        } else {
            "No SGB"
        }
    }
}

/// The destination code at 0x14a.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Destination(pub u8);

impl Destination {
    pub fn is_japanese(self) -> bool {
        self.0 == 0x00
    }

    pub fn description(self) -> &'static str {
        if self.is_japanese() {
            "Japanese"
        } else {
            "Non-Japanese"
        }
    }
}

// All three render as the raw byte followed by its meaning, e.g. `0xC0 (CGB-only)`.
macro_rules! impl_display_flag {
    ($ty:ty) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                write!(f, "0x{:02X} ({})", self.0, self.description())
            }
        }
    };
}

impl_display_flag!(CgbFlag);
impl_display_flag!(SgbFlag);
impl_display_flag!(Destination);

#[cfg(test)]
mod tests {
    use super::{CgbFlag, Destination, SgbFlag};

    #[test]
    fn cgb() {
        assert_eq!(CgbFlag(0xc0).description(), "CGB-only");
        assert_eq!(CgbFlag(0x80).description(), "CGB support");
        assert_eq!(CgbFlag(0x00).description(), "DMG compatible");

        // Any other value with bit 7 set still counts as CGB support.
        assert_eq!(CgbFlag(0xff).description(), "CGB support");
        assert_eq!(CgbFlag(0x7f).description(), "DMG compatible");
    }

    #[test]
    fn sgb() {
        assert_eq!(SgbFlag(0x03).description(), "SGB functions");
        assert_eq!(SgbFlag(0x00).description(), "No SGB");
        assert_eq!(SgbFlag(0x01).description(), "No SGB");
    }

    #[test]
    fn destination() {
        assert_eq!(Destination(0x00).description(), "Japanese");
        assert_eq!(Destination(0x01).description(), "Non-Japanese");
        assert_eq!(Destination(0x33).description(), "Non-Japanese");
    }

    #[test]
    fn display() {
        assert_eq!(CgbFlag(0xc0).to_string(), "0xC0 (CGB-only)");
        assert_eq!(SgbFlag(0x03).to_string(), "0x03 (SGB functions)");
        assert_eq!(Destination(0x01).to_string(), "0x01 (Non-Japanese)");
    }
}
