use crate::{color::Color, utils::hex_char_for, OutputMode};

/// Writes colors out in each of the supported notations
///
/// Every notation produced here parses back to the same channels, with the
/// exception of `rgb()`, which cannot carry alpha.
#[derive(Debug)]
struct Serializer {
    buffer: String,
}

impl Serializer {
    fn new() -> Self {
        Self {
            buffer: String::with_capacity(24),
        }
    }

    fn finish(self) -> String {
        self.buffer
    }

    fn write_decimal(&mut self, channel: u8) {
        self.buffer.push_str(&channel.to_string());
    }

    /// Two digits, zero padded
    fn write_hex_component(&mut self, channel: u8) {
        self.buffer.push(hex_char_for(u32::from(channel >> 4)));
        self.buffer.push(hex_char_for(u32::from(channel & 0xF)));
    }

    /// As few digits as possible
    fn write_hex_unpadded(&mut self, channel: u8) {
        if channel > 0xF {
            self.buffer.push(hex_char_for(u32::from(channel >> 4)));
        }
        self.buffer.push(hex_char_for(u32::from(channel & 0xF)));
    }

    fn write_function(&mut self, name: &str, channels: &[u8], write_channel: fn(&mut Self, u8)) {
        self.buffer.push_str(name);
        self.buffer.push('(');
        for (idx, &channel) in channels.iter().enumerate() {
            if idx > 0 {
                self.buffer.push(',');
            }
            write_channel(self, channel);
        }
        self.buffer.push(')');
    }

    fn is_symmetrical_hex(channel: u8) -> bool {
        channel & 0xF == channel >> 4
    }

    fn can_use_short_hex(color: &Color) -> bool {
        color.alpha() == 0xFF
            && Self::is_symmetrical_hex(color.red())
            && Self::is_symmetrical_hex(color.green())
            && Self::is_symmetrical_hex(color.blue())
    }

    fn visit_web(&mut self, color: &Color, allow_short: bool) {
        let [red, green, blue, alpha] = color.channels();

        self.buffer.push('#');

        if allow_short && Self::can_use_short_hex(color) {
            self.buffer.push(hex_char_for(u32::from(red & 0xF)));
            self.buffer.push(hex_char_for(u32::from(green & 0xF)));
            self.buffer.push(hex_char_for(u32::from(blue & 0xF)));
            return;
        }

        self.write_hex_component(red);
        self.write_hex_component(green);
        self.write_hex_component(blue);

        if alpha != 0xFF {
            self.write_hex_component(alpha);
        }
    }

    fn visit_debug(&mut self, color: &Color) {
        for (label, channel) in ["{R:", " G:", " B:", " A:"].iter().zip(color.channels()) {
            self.buffer.push_str(label);
            self.write_decimal(channel);
        }
        self.buffer.push('}');
    }
}

impl Color {
    /// The canonical text form: the name if there is one, otherwise the shortest web form
    pub fn as_text(&self) -> String {
        match self.name() {
            Some(name) => name.to_owned(),
            None => self.as_web_short(),
        }
    }

    /// `rgb(r,g,b)`, dropping alpha
    pub fn as_rgb(&self) -> String {
        let mut serializer = Serializer::new();
        serializer.write_function("rgb", &self.channels()[..3], Serializer::write_decimal);
        serializer.finish()
    }

    /// `rgba(r,g,b,a)`
    pub fn as_rgba(&self) -> String {
        let mut serializer = Serializer::new();
        serializer.write_function("rgba", &self.channels(), Serializer::write_decimal);
        serializer.finish()
    }

    /// `hex(r,g,b)` in unpadded lowercase hex, or `hex(r,g,b,a)` when not opaque
    pub fn as_hex(&self) -> String {
        let channels = self.channels();
        let channels = if self.alpha() == 0xFF {
            &channels[..3]
        } else {
            &channels[..]
        };

        let mut serializer = Serializer::new();
        serializer.write_function("hex", channels, Serializer::write_hex_unpadded);
        serializer.finish()
    }

    /// `#rrggbb`, or `#rrggbbaa` when not opaque; never the 3 digit shorthand
    pub fn as_web(&self) -> String {
        let mut serializer = Serializer::new();
        serializer.visit_web(self, false);
        serializer.finish()
    }

    /// Like [`Color::as_web`], but `#rgb` when every opaque channel repeats its nibble
    pub fn as_web_short(&self) -> String {
        let mut serializer = Serializer::new();
        serializer.visit_web(self, true);
        serializer.finish()
    }

    /// `{R:r G:g B:b A:a}`
    pub fn as_debug(&self) -> String {
        let mut serializer = Serializer::new();
        serializer.visit_debug(self);
        serializer.finish()
    }

    /// Render in the given notation. [`OutputMode::Name`] gives an empty string
    /// for a color without a name.
    pub fn format(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Text => self.as_text(),
            OutputMode::Debug => self.as_debug(),
            OutputMode::Rgb => self.as_rgb(),
            OutputMode::Rgba => self.as_rgba(),
            OutputMode::Hex => self.as_hex(),
            OutputMode::Name => self.name().unwrap_or_default().to_owned(),
            OutputMode::Web => self.as_web(),
            OutputMode::WebShort => self.as_web_short(),
        }
    }

    /// Render by single character format code (see [`OutputMode::from_code`]).
    ///
    /// With `alternate`, `v` dumps the channels. Unknown codes render as nothing.
    pub fn format_code(&self, code: char, alternate: bool) -> String {
        match OutputMode::from_code(code) {
            Some(..) if code == 'v' && alternate => self.as_debug(),
            Some(mode) => self.format(mode),
            None => String::new(),
        }
    }
}
