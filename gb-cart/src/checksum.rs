use std::ops::Range;

/// The bytes covered by the header checksum.
const HEADER_CHECKSUM_RANGE: Range<usize> = 0x134..0x14d;

/// Where the global checksum itself is stored. These bytes are excluded from the sum.
const GLOBAL_CHECKSUM_RANGE: Range<usize> = 0x14e..0x150;

/// Computes the header checksum the boot ROM verifies.
///
/// # Panics
///
/// Panics if `data.len()` is less than `0x14d`.
///
/// # Example
///
/// ```
/// let data = [0u8; gb_cart::HEADER_END];
/// assert_eq!(gb_cart::header_checksum(&data), 0xe7);
/// ```
pub fn header_checksum(data: &[u8]) -> u8 {
    data[HEADER_CHECKSUM_RANGE]
        .iter()
        .fold(0u8, |x, &b| x.wrapping_sub(b).wrapping_sub(1))
}

/// Computes the 16-bit sum of every byte in the image except the stored global checksum.
///
/// # Panics
///
/// Panics if `data.len()` is less than `0x150`.
pub fn global_checksum(data: &[u8]) -> u16 {
    data[..GLOBAL_CHECKSUM_RANGE.start]
        .iter()
        .chain(&data[GLOBAL_CHECKSUM_RANGE.end..])
        .fold(0u16, |sum, &b| sum.wrapping_add(b as u16))
}
