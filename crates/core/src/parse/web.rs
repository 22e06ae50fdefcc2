use crate::{
    color::{Color, ColorRegistry},
    utils::as_hex,
};

/// `#rrggbbaa`, `#rrggbb` or `#rgb`
///
/// In the 3 digit shorthand each digit is doubled, so `#f80` is `#ff8800`.
/// Alpha defaults to opaque. A single bad digit rejects the whole input.
pub fn from_web(text: &str, registry: &ColorRegistry) -> Option<Color> {
    let digits = text.strip_prefix('#')?.as_bytes();

    let rgba = match digits.len() {
        8 => [
            hex_byte(digits[0], digits[1])?,
            hex_byte(digits[2], digits[3])?,
            hex_byte(digits[4], digits[5])?,
            hex_byte(digits[6], digits[7])?,
        ],
        6 => [
            hex_byte(digits[0], digits[1])?,
            hex_byte(digits[2], digits[3])?,
            hex_byte(digits[4], digits[5])?,
            0xFF,
        ],
        3 => [
            as_hex(digits[0])? * 17,
            as_hex(digits[1])? * 17,
            as_hex(digits[2])? * 17,
            0xFF,
        ],
        _ => return None,
    };

    Some(Color::from_channels(rgba, registry))
}

fn hex_byte(high: u8, low: u8) -> Option<u8> {
    Some(as_hex(high)? << 4 | as_hex(low)?)
}
