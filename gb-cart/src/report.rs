use crate::{
    global_checksum, header_checksum, CartridgeType, CgbFlag, DecodeError, Destination,
    DisplayReport, HeaderReader, RamSize, RomSize, SgbFlag,
};

/// Everything the header says about a cartridge image, plus the checksums recomputed from the
/// image itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedReport {
    len: usize,
    title: String,
    cgb_flag: CgbFlag,
    new_licensee: String,
    sgb_flag: SgbFlag,
    cartridge_type: CartridgeType,
    rom_size: RomSize,
    ram_size: RamSize,
    destination: Destination,
    old_licensee_code: u8,
    rom_version: u8,
    stored_header_checksum: u8,
    computed_header_checksum: u8,
    stored_global_checksum: u16,
    computed_global_checksum: u16,
}

/// Decodes the header of a cartridge image.
///
/// The only failure is an image too short to hold a header. Unknown codes and checksum mismatches
/// are reported, not rejected.
///
/// # Example
///
/// ```
/// let report = gb_cart::decode(&[0; gb_cart::HEADER_END]).unwrap();
/// assert_eq!(report.computed_header_checksum(), 0xe7);
/// assert!(!report.header_checksum_matches());
/// assert!(report.global_checksum_matches());
///
/// assert!(gb_cart::decode(&[0; 0x14f]).is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<DecodedReport, DecodeError> {
    let header = HeaderReader::new(data)?;
    Ok(DecodedReport {
        len: data.len(),
        title: header.title(),
        cgb_flag: CgbFlag(header.cgb_flag()),
        new_licensee: header.new_licensee(),
        sgb_flag: SgbFlag(header.sgb_flag()),
        cartridge_type: CartridgeType(header.cartridge_type()),
        rom_size: RomSize::from_code(header.rom_size_code()),
        ram_size: RamSize(header.ram_size_code()),
        destination: Destination(header.destination_code()),
        old_licensee_code: header.old_licensee_code(),
        rom_version: header.rom_version(),
        stored_header_checksum: header.header_checksum(),
        computed_header_checksum: header_checksum(data),
        stored_global_checksum: header.global_checksum(),
        computed_global_checksum: global_checksum(data),
    })
}

impl DecodedReport {
    /// The length in bytes of the decoded image.
    pub fn image_len(&self) -> usize {
        self.len
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cgb_flag(&self) -> CgbFlag {
        self.cgb_flag
    }

    pub fn new_licensee(&self) -> &str {
        &self.new_licensee
    }

    pub fn sgb_flag(&self) -> SgbFlag {
        self.sgb_flag
    }

    pub fn cartridge_type(&self) -> CartridgeType {
        self.cartridge_type
    }

    pub fn rom_size(&self) -> RomSize {
        self.rom_size
    }

    pub fn ram_size(&self) -> RamSize {
        self.ram_size
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }

    pub fn old_licensee_code(&self) -> u8 {
        self.old_licensee_code
    }

    pub fn rom_version(&self) -> u8 {
        self.rom_version
    }

    pub fn stored_header_checksum(&self) -> u8 {
        self.stored_header_checksum
    }

    pub fn computed_header_checksum(&self) -> u8 {
        self.computed_header_checksum
    }

    pub fn header_checksum_matches(&self) -> bool {
        self.stored_header_checksum == self.computed_header_checksum
    }

    pub fn stored_global_checksum(&self) -> u16 {
        self.stored_global_checksum
    }

    pub fn computed_global_checksum(&self) -> u16 {
        self.computed_global_checksum
    }

    pub fn global_checksum_matches(&self) -> bool {
        self.stored_global_checksum == self.computed_global_checksum
    }

    /// Returns a line-per-field rendering of this report, headed by `file_name`.
    pub fn display<'a>(&'a self, file_name: &'a str) -> DisplayReport<'a> {
        DisplayReport {
            report: self,
            file_name,
        }
    }
}
