//! A color is four 8-bit channels plus an optional name.
//!
//! The name is never chosen by the caller: it is looked up in a
//! [`ColorRegistry`] from the channels, so a color parsed from
//! `rgb(255, 0, 0)` or `#f00` carries the name `red` just like one parsed
//! from `red` itself.
//!
//! Colors are immutable once built.

use std::{
    borrow::Cow,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{error::ColorError, ColorResult};

pub use name::{standard_registry, ColorName, ColorRegistry};

mod name;

#[derive(Debug, Clone)]
pub struct Color {
    rgba: [u8; 4],
    name: Option<ColorName>,
}

impl PartialEq for Color {
    /// Colors are equal when all four channels are; the name is derived from the
    /// channels and takes no part
    fn eq(&self, other: &Self) -> bool {
        self.rgba == other.rgba
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgba.hash(state);
    }
}

impl Color {
    /// Create a color from raw channels, naming it if `registry` has a
    /// name for exactly these channels
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8, registry: &ColorRegistry) -> Self {
        Self::from_channels([red, green, blue, alpha], registry)
    }

    pub(crate) fn from_channels(rgba: [u8; 4], registry: &ColorRegistry) -> Self {
        Color {
            rgba,
            name: registry
                .get_by_rgba(rgba)
                .filter(|name| !name.is_empty())
                .cloned(),
        }
    }

    /// Create a color whose name is already known
    ///
    /// The caller is responsible for `name` actually being registered for
    /// these channels; prefer [`Color::new`] when in doubt.
    pub fn with_name<N: Into<ColorName>>(
        red: u8,
        green: u8,
        blue: u8,
        alpha: u8,
        name: N,
    ) -> Self {
        let name = name.into();
        Color {
            rgba: [red, green, blue, alpha],
            name: if name.is_empty() { None } else { Some(name) },
        }
    }

    #[doc(hidden)]
    pub const fn from_parts(
        red: u8,
        green: u8,
        blue: u8,
        alpha: u8,
        name: Option<&'static str>,
    ) -> Self {
        Color {
            rgba: [red, green, blue, alpha],
            name: match name {
                Some(name) => Some(Cow::Borrowed(name)),
                None => None,
            },
        }
    }

    /// Convert any color-like value, naming it against `registry`
    pub fn from_color<C: ToChannels + ?Sized>(color: &C, registry: &ColorRegistry) -> Self {
        Self::from_channels(color.to_channels(), registry)
    }

    pub const fn red(&self) -> u8 {
        self.rgba[0]
    }

    pub const fn green(&self) -> u8 {
        self.rgba[1]
    }

    pub const fn blue(&self) -> u8 {
        self.rgba[2]
    }

    pub const fn alpha(&self) -> u8 {
        self.rgba[3]
    }

    /// `[red, green, blue, alpha]`
    pub const fn channels(&self) -> [u8; 4] {
        self.rgba
    }

    /// The name the color was parsed or registered under, if it has one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// Whether the color is "light", i.e. `sqrt(0.299 r² + 0.587 g² + 0.114 b²) > 130`
    /// over the raw 0-255 channel values. Alpha is ignored.
    pub fn light(&self) -> bool {
        let [red, green, blue, _] = self.rgba.map(f64::from);
        (0.299 * red.powi(2) + 0.587 * green.powi(2) + 0.114 * blue.powi(2)).sqrt() > 130.0
    }

    pub fn dark(&self) -> bool {
        !self.light()
    }

    /// Exact comparison of all four channels against any color-like value
    pub fn is<C: ToChannels + ?Sized>(&self, other: &C) -> bool {
        self.rgba == other.to_channels()
    }
}

/// Exact comparison of all four channels of two color-like values
pub fn is<A, B>(a: &A, b: &B) -> bool
where
    A: ToChannels + ?Sized,
    B: ToChannels + ?Sized,
{
    a.to_channels() == b.to_channels()
}

/// Anything that can be viewed as non-premultiplied 8-bit RGBA
pub trait ToChannels {
    /// `[red, green, blue, alpha]`
    fn to_channels(&self) -> [u8; 4];
}

impl ToChannels for Color {
    fn to_channels(&self) -> [u8; 4] {
        self.rgba
    }
}

impl ToChannels for [u8; 4] {
    fn to_channels(&self) -> [u8; 4] {
        *self
    }
}

/// Opaque
impl ToChannels for [u8; 3] {
    fn to_channels(&self) -> [u8; 4] {
        let [red, green, blue] = *self;
        [red, green, blue, 0xFF]
    }
}

impl ToChannels for (u8, u8, u8, u8) {
    fn to_channels(&self) -> [u8; 4] {
        let (red, green, blue, alpha) = *self;
        [red, green, blue, alpha]
    }
}

/// Opaque
impl ToChannels for (u8, u8, u8) {
    fn to_channels(&self) -> [u8; 4] {
        let (red, green, blue) = *self;
        [red, green, blue, 0xFF]
    }
}

impl<T: ToChannels + ?Sized> ToChannels for &T {
    fn to_channels(&self) -> [u8; 4] {
        (**self).to_channels()
    }
}

#[cfg(feature = "csscolorparser")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "csscolorparser")))]
impl ToChannels for csscolorparser::Color {
    fn to_channels(&self) -> [u8; 4] {
        self.to_rgba8()
    }
}

impl Display for Color {
    /// The canonical text form; `{:#}` dumps the channels instead
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.as_debug())
        } else if let Some(name) = &self.name {
            f.write_str(name)
        } else {
            f.write_str(&self.as_web_short())
        }
    }
}

impl fmt::LowerHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex())
    }
}

/// Parses against the [`standard_registry`]
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        standard_registry().parse(s)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde")))]
impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.as_text())
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
