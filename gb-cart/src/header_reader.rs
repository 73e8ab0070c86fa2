use byteorder::{BigEndian, ByteOrder};

use crate::text::ascii_lossy;
use crate::{DecodeError, HEADER_END};

const TITLE_OFFSET: usize = 0x134;
const CGB_FLAG_OFFSET: usize = 0x143;
const NEW_LICENSEE_OFFSET: usize = 0x144;
const SGB_FLAG_OFFSET: usize = 0x146;
const CARTRIDGE_TYPE_OFFSET: usize = 0x147;
const ROM_SIZE_OFFSET: usize = 0x148;
const RAM_SIZE_OFFSET: usize = 0x149;
const DESTINATION_OFFSET: usize = 0x14a;
const OLD_LICENSEE_OFFSET: usize = 0x14b;
const ROM_VERSION_OFFSET: usize = 0x14c;
const HEADER_CHECKSUM_OFFSET: usize = 0x14d;
const GLOBAL_CHECKSUM_OFFSET: usize = 0x14e;

/// A view of the fixed-offset fields in a cartridge header.
///
/// The title is read as 15 bytes. The byte at 0x143 doubles as the last title character on
/// pre-CGB cartridges, but it is always reported as the CGB flag here.
#[derive(Clone, Copy, Debug)]
pub struct HeaderReader<'data> {
    data: &'data [u8],
}

impl<'data> HeaderReader<'data> {
    /// Fails with [`DecodeError::TooSmall`] if `data.len()` is less than [`HEADER_END`].
    pub fn new(data: &'data [u8]) -> Result<HeaderReader<'data>, DecodeError> {
        if data.len() < HEADER_END {
            return Err(DecodeError::TooSmall { len: data.len() });
        }
        Ok(HeaderReader {
            data: &data[..HEADER_END],
        })
    }

    /// The title with trailing NULs removed and any unprintable bytes dropped.
    pub fn title(&self) -> String {
        let raw = &self.data[TITLE_OFFSET..CGB_FLAG_OFFSET];
        let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        ascii_lossy(&raw[..end])
    }

    pub fn cgb_flag(&self) -> u8 {
        self.data[CGB_FLAG_OFFSET]
    }

    pub fn new_licensee(&self) -> String {
        ascii_lossy(&self.data[NEW_LICENSEE_OFFSET..SGB_FLAG_OFFSET])
    }

    pub fn sgb_flag(&self) -> u8 {
        self.data[SGB_FLAG_OFFSET]
    }

    pub fn cartridge_type(&self) -> u8 {
        self.data[CARTRIDGE_TYPE_OFFSET]
    }

    pub fn rom_size_code(&self) -> u8 {
        self.data[ROM_SIZE_OFFSET]
    }

    pub fn ram_size_code(&self) -> u8 {
        self.data[RAM_SIZE_OFFSET]
    }

    pub fn destination_code(&self) -> u8 {
        self.data[DESTINATION_OFFSET]
    }

    pub fn old_licensee_code(&self) -> u8 {
        self.data[OLD_LICENSEE_OFFSET]
    }

    pub fn rom_version(&self) -> u8 {
        self.data[ROM_VERSION_OFFSET]
    }

    pub fn header_checksum(&self) -> u8 {
        self.data[HEADER_CHECKSUM_OFFSET]
    }

    pub fn global_checksum(&self) -> u16 {
        BigEndian::read_u16(&self.data[GLOBAL_CHECKSUM_OFFSET..HEADER_END])
    }
}

#[cfg(test)]
pub mod tests {
    use super::HeaderReader;
    use crate::{DecodeError, HEADER_END};

    fn put(data: &mut [u8], offset: usize, bytes: &[u8]) {
        data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    #[test]
    fn test() {
        let mut data = vec![0; HEADER_END];
        put(&mut data, 0x134, b"POKEMON RED");
        put(
            &mut data,
            0x143,
            &[0x80, 0x30, 0x31, 0x03, 0x13, 0x05, 0x03, 0x01, 0x33, 0x01],
        );
        put(&mut data, 0x14d, &[0x20, 0x91, 0xe6]);

        let header = HeaderReader::new(&data).unwrap();
        assert_eq!(header.title(), "POKEMON RED");
        assert_eq!(header.cgb_flag(), 0x80);
        assert_eq!(header.new_licensee(), "01");
        assert_eq!(header.sgb_flag(), 0x03);
        assert_eq!(header.cartridge_type(), 0x13);
        assert_eq!(header.rom_size_code(), 0x05);
        assert_eq!(header.ram_size_code(), 0x03);
        assert_eq!(header.destination_code(), 0x01);
        assert_eq!(header.old_licensee_code(), 0x33);
        assert_eq!(header.rom_version(), 0x01);
        assert_eq!(header.header_checksum(), 0x20);
        assert_eq!(header.global_checksum(), 0x91e6);
    }

    #[test]
    fn too_small() {
        assert_eq!(
            HeaderReader::new(&[]).unwrap_err(),
            DecodeError::TooSmall { len: 0 }
        );
        assert_eq!(
            HeaderReader::new(&[0; HEADER_END - 1]).unwrap_err(),
            DecodeError::TooSmall {
                len: HEADER_END - 1
            }
        );
        assert!(HeaderReader::new(&[0; HEADER_END]).is_ok());
    }

    #[test]
    fn title_drops_nuls() {
        let mut data = vec![0; HEADER_END];
        put(&mut data, 0x134, b"A\0B\0\0");
        assert_eq!(HeaderReader::new(&data).unwrap().title(), "AB");

        let data = vec![0; HEADER_END];
        assert_eq!(HeaderReader::new(&data).unwrap().title(), "");
    }

    #[test]
    fn title_drops_non_ascii() {
        let mut data = vec![0; HEADER_END];
        put(&mut data, 0x134, &[b'Z', 0xff, b'E', 0x80, b'L', b'D', b'A']);
        assert_eq!(HeaderReader::new(&data).unwrap().title(), "ZELDA");
    }

    #[test]
    fn text_fields_drop_control_bytes() {
        let mut data = vec![0; HEADER_END];
        put(&mut data, 0x134, b"\x1b[2JA\x07");
        put(&mut data, 0x144, b"\x1b\0");
        let header = HeaderReader::new(&data).unwrap();
        assert_eq!(header.title(), "[2JA");
        assert_eq!(header.new_licensee(), "");

        put(&mut data, 0x144, b"\x1b1");
        assert_eq!(HeaderReader::new(&data).unwrap().new_licensee(), "1");
    }

    #[test]
    fn trailing_data_is_ignored() {
        let mut data = vec![0; HEADER_END];
        put(&mut data, 0x14e, &[0x12, 0x34]);
        data.extend_from_slice(&[0xff; 0x8000]);
        assert_eq!(HeaderReader::new(&data).unwrap().global_checksum(), 0x1234);
    }
}
