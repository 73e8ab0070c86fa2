/// Decodes `bytes` as printable ASCII, dropping control characters and anything outside the
/// 7-bit range.
pub(crate) fn ascii_lossy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .copied()
        .filter(|&b| b.is_ascii_graphic() || b == b' ')
        .map(char::from)
        .collect()
}
