pub(crate) fn hex_char_for(number: u32) -> char {
    debug_assert!(number < 0x10);
    match std::char::from_digit(number, 16) {
        Some(c) => c,
        None => unreachable!("{} is not a single hex digit", number),
    }
}

/// The value of a single hex digit, or `None` if `c` is not one
pub(crate) fn as_hex(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(10 + c - b'A'),
        b'a'..=b'f' => Some(10 + c - b'a'),
        _ => None,
    }
}

/// Whitespace as accepted between the arguments of `rgb()`, `rgba()` and `hex()`
pub(crate) fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C')
}
