use phf::phf_map;

use crate::{standard_registry, ColorRegistry, Logger, StdLogger};

/// Configuration for batch conversion
///
/// The simplest usage is `chroma::Options::default()`; however, a builder pattern
/// is also exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) registry: &'a ColorRegistry,
    pub(crate) logger: &'a dyn Logger,
    pub(crate) mode: OutputMode,
    pub(crate) quiet: bool,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            registry: standard_registry(),
            logger: &StdLogger,
            mode: OutputMode::Text,
            quiet: false,
        }
    }
}

impl<'a> Options<'a> {
    /// The table of named colors used both to resolve names in the input and to
    /// name colors in the output.
    ///
    /// By default, the [`standard_registry`] is used.
    #[must_use]
    #[inline]
    pub fn registry(mut self, registry: &'a ColorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// This option allows you to define how log events should be handled
    ///
    /// By default, [`StdLogger`] is used, which writes all events to standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// The notation every color is written out in. By default, [`OutputMode::Text`].
    #[must_use]
    #[inline]
    pub const fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Setting this option to `true` will stop all logs from reaching the [`crate::Logger`].
    ///
    /// By default, this value is `false` and warnings are emitted.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub(crate) fn warn(&self, message: &str) {
        if !self.quiet {
            self.logger.warning(message);
        }
    }
}

/// The notations a color can be written out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// The name if there is one, otherwise the shortest web form
    #[default]
    Text,
    /// `{R:255 G:0 B:0 A:255}`
    Debug,
    /// `rgb(255,0,0)`; alpha is dropped
    Rgb,
    /// `rgba(255,0,0,255)`
    Rgba,
    /// `hex(ff,0,0)`
    Hex,
    /// The name, or nothing
    Name,
    /// `#ff0000`
    Web,
    /// `#f00`
    WebShort,
}

static FORMAT_CODES: phf::Map<char, OutputMode> = phf_map! {
    's' => OutputMode::Text,
    'v' => OutputMode::Text,
    'd' => OutputMode::Rgb,
    'a' => OutputMode::Rgba,
    'x' => OutputMode::Hex,
    'n' => OutputMode::Name,
    'e' => OutputMode::Web,
};

static MODE_NAMES: phf::Map<&'static str, OutputMode> = phf_map! {
    "text" => OutputMode::Text,
    "debug" => OutputMode::Debug,
    "rgb" => OutputMode::Rgb,
    "rgba" => OutputMode::Rgba,
    "hex" => OutputMode::Hex,
    "name" => OutputMode::Name,
    "web" => OutputMode::Web,
    "short" => OutputMode::WebShort,
};

impl OutputMode {
    pub const ALL: [OutputMode; 8] = [
        OutputMode::Text,
        OutputMode::Debug,
        OutputMode::Rgb,
        OutputMode::Rgba,
        OutputMode::Hex,
        OutputMode::Name,
        OutputMode::Web,
        OutputMode::WebShort,
    ];

    /// The mode for a single character format code
    ///
    /// | code | mode |
    /// |------|------|
    /// | `s`, `v` | [`OutputMode::Text`] |
    /// | `d` | [`OutputMode::Rgb`] |
    /// | `a` | [`OutputMode::Rgba`] |
    /// | `x` | [`OutputMode::Hex`] |
    /// | `n` | [`OutputMode::Name`] |
    /// | `e` | [`OutputMode::Web`] |
    pub fn from_code(code: char) -> Option<Self> {
        FORMAT_CODES.get(&code).copied()
    }

    /// Look up a mode by the name returned from [`OutputMode::name`], ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        MODE_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            OutputMode::Text => "text",
            OutputMode::Debug => "debug",
            OutputMode::Rgb => "rgb",
            OutputMode::Rgba => "rgba",
            OutputMode::Hex => "hex",
            OutputMode::Name => "name",
            OutputMode::Web => "web",
            OutputMode::WebShort => "short",
        }
    }
}
