use crate::{
    color::{Color, ColorRegistry},
    utils::is_whitespace,
};

#[derive(Debug, Clone, Copy)]
enum Radix {
    Decimal,
    Hex,
}

impl Radix {
    fn is_digit(self, c: u8) -> bool {
        match self {
            Radix::Decimal => c.is_ascii_digit(),
            Radix::Hex => c.is_ascii_hexdigit(),
        }
    }

    /// `255` and `ff`
    fn max_digits(self) -> usize {
        match self {
            Radix::Decimal => 3,
            Radix::Hex => 2,
        }
    }

    fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

/// How a function takes its fourth, alpha, argument
#[derive(Debug, Clone, Copy)]
enum Alpha {
    /// `rgb(r, g, b)`
    Never,
    /// `rgba(r, g, b, a)`, where `a` may be left empty
    Always,
    /// `hex(r, g, b)` or `hex(r, g, b, a)`
    Optional,
}

#[derive(Debug)]
struct ChannelFunction {
    name: &'static str,
    radix: Radix,
    alpha: Alpha,
}

const RGB: ChannelFunction = ChannelFunction {
    name: "rgb",
    radix: Radix::Decimal,
    alpha: Alpha::Never,
};

const RGBA: ChannelFunction = ChannelFunction {
    name: "rgba",
    radix: Radix::Decimal,
    alpha: Alpha::Always,
};

const HEX: ChannelFunction = ChannelFunction {
    name: "hex",
    radix: Radix::Hex,
    alpha: Alpha::Optional,
};

#[derive(Debug)]
struct Scanner<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, cursor: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.cursor).copied()
    }

    fn whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if is_whitespace(c)) {
            self.cursor += 1;
        }
    }

    fn scan_char(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.cursor += 1;
            return true;
        }

        false
    }

    fn scan_ignore_case(&mut self, s: &str) -> bool {
        let end = self.cursor + s.len();
        match self.text.as_bytes().get(self.cursor..end) {
            Some(bytes) if bytes.eq_ignore_ascii_case(s.as_bytes()) => {
                self.cursor = end;
                true
            }
            _ => false,
        }
    }

    /// Up to `radix.max_digits()` digits; any further digits are left for the
    /// caller to trip over
    fn digits(&mut self, radix: Radix) -> &'a str {
        let start = self.cursor;
        while self.cursor - start < radix.max_digits()
            && matches!(self.peek(), Some(c) if radix.is_digit(c))
        {
            self.cursor += 1;
        }
        &self.text[start..self.cursor]
    }

    fn is_done(&self) -> bool {
        self.cursor == self.text.len()
    }
}

impl ChannelFunction {
    fn parse(&self, text: &str) -> Option<[u8; 4]> {
        let mut scanner = Scanner::new(text);

        if !scanner.scan_ignore_case(self.name) || !scanner.scan_char(b'(') {
            return None;
        }

        let mut rgba = [0xFF; 4];

        for (idx, channel) in rgba.iter_mut().take(3).enumerate() {
            if idx > 0 && !scanner.scan_char(b',') {
                return None;
            }
            scanner.whitespace();
            *channel = self.channel(&mut scanner)?;
            scanner.whitespace();
        }

        match self.alpha {
            Alpha::Never => {}
            Alpha::Always => {
                if !scanner.scan_char(b',') {
                    return None;
                }
                scanner.whitespace();
                let digits = scanner.digits(self.radix);
                if !digits.is_empty() {
                    rgba[3] = u8::from_str_radix(digits, self.radix.base()).ok()?;
                }
                scanner.whitespace();
            }
            Alpha::Optional => {
                if scanner.scan_char(b',') {
                    scanner.whitespace();
                    rgba[3] = self.channel(&mut scanner)?;
                    scanner.whitespace();
                }
            }
        }

        if !scanner.scan_char(b')') || !scanner.is_done() {
            return None;
        }

        Some(rgba)
    }

    /// One channel, which must fit in a byte
    fn channel(&self, scanner: &mut Scanner) -> Option<u8> {
        let digits = scanner.digits(self.radix);
        if digits.is_empty() {
            return None;
        }
        u8::from_str_radix(digits, self.radix.base()).ok()
    }
}

/// `rgb(r, g, b)` with decimal channels from 0 to 255. Alpha is opaque.
pub fn from_rgb(text: &str, registry: &ColorRegistry) -> Option<Color> {
    RGB.parse(text).map(|rgba| Color::from_channels(rgba, registry))
}

/// `rgba(r, g, b, a)` with decimal channels from 0 to 255.
/// An empty alpha, as in `rgba(r, g, b, )`, is opaque.
pub fn from_rgba(text: &str, registry: &ColorRegistry) -> Option<Color> {
    RGBA.parse(text).map(|rgba| Color::from_channels(rgba, registry))
}

/// `hex(r, g, b)` or `hex(r, g, b, a)` with one or two hex digits per channel.
///
/// Unlike the `#rgb` shorthand, a single digit is taken at face value:
/// `hex(f, e, a)` is `#0f0e0a`.
pub fn from_hex(text: &str, registry: &ColorRegistry) -> Option<Color> {
    HEX.parse(text).map(|rgba| Color::from_channels(rgba, registry))
}
