use std::fmt::{self, Debug, Display, Formatter};

use crate::DecodedReport;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

pub struct DisplayReport<'a> {
    pub(crate) report: &'a DecodedReport,
    pub(crate) file_name: &'a str,
}

fn verdict(matches: bool) -> &'static str {
    if matches {
        "OK"
    } else {
        "MISMATCH"
    }
}

impl<'a> Debug for DisplayReport<'a> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<'a> Display for DisplayReport<'a> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let r = self.report;
        writeln!(
            f,
            "File           : {} ({:.2} MiB)",
            self.file_name,
            r.image_len() as f64 / BYTES_PER_MIB,
        )?;
        writeln!(f, "Title          : {}", r.title())?;
        writeln!(f, "CGB Flag       : {}", r.cgb_flag())?;
        writeln!(f, "SGB Flag       : {}", r.sgb_flag())?;
        writeln!(
            f,
            "Cartridge Type : 0x{:02X} ({})",
            r.cartridge_type().code(),
            r.cartridge_type(),
        )?;
        writeln!(f, "ROM Size       : {}", r.rom_size())?;
        writeln!(f, "RAM Size       : {}", r.ram_size())?;
        writeln!(f, "Destination    : {}", r.destination())?;
        writeln!(
            f,
            "New Licensee   : '{}'  Old: 0x{:02X}",
            r.new_licensee(),
            r.old_licensee_code(),
        )?;
        writeln!(f, "ROM Version    : {}", r.rom_version())?;
        writeln!(
            f,
            "Header Chksum  : 0x{:02X} (calc 0x{:02X})  -> {}",
            r.stored_header_checksum(),
            r.computed_header_checksum(),
            verdict(r.header_checksum_matches()),
        )?;
        writeln!(
            f,
            "Global Chksum  : 0x{:04X} (calc 0x{:04X}) -> {}",
            r.stored_global_checksum(),
            r.computed_global_checksum(),
            verdict(r.global_checksum_matches()),
        )
    }
}
