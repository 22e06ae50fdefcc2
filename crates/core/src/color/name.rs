//! A big dictionary of named colors and their
//! corresponding RGBA values

use std::{borrow::Cow, collections::HashMap};

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use super::{Color, ToChannels};
use crate::utils::normalize_identifier;

/// The name a color is registered under
///
/// Names from the standard table are borrowed; names registered at runtime are owned.
pub type ColorName = Cow<'static, str>;

/// Bidirectional table of named colors
///
/// The forward direction maps every registered name to its channels. The reverse
/// direction maps each distinct channel quadruple to a single *canonical* name.
/// When several names share the same channels, the one registered last wins the
/// reverse slot.
///
/// Lookups and registration are not synchronized: finish registering before
/// sharing the table between threads, or guard it with a lock.
#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    name_to_rgba: IndexMap<ColorName, [u8; 4]>,
    rgba_to_name: HashMap<u32, ColorName>,
}

/// The reverse table key, `r << 24 | g << 16 | b << 8 | a`
fn pack(rgba: [u8; 4]) -> u32 {
    u32::from_be_bytes(rgba)
}

/// Borrowed names that are already normalized stay borrowed
fn normalized(name: ColorName) -> ColorName {
    let normal = normalize_identifier(&name);
    if normal == name {
        name
    } else {
        Cow::Owned(normal)
    }
}

impl ColorRegistry {
    /// An empty table that knows no names
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            name_to_rgba: IndexMap::with_capacity(capacity),
            rgba_to_name: HashMap::with_capacity(capacity),
        }
    }

    /// A table seeded with the SVG 1.1 named colors, `rebeccapurple`, and `transparent`
    ///
    /// Seeding happens in alphabetical order, so where two names share the same
    /// channels the alphabetically last one is canonical (`cyan` over `aqua`,
    /// `grey` over `gray`).
    pub fn standard() -> Self {
        let mut registry = Self::with_capacity(STANDARD_COLORS.len());
        for &(name, rgba) in STANDARD_COLORS {
            registry.register(name, rgba);
        }
        registry
    }

    /// Registers `name` for the channels of `color`, overwriting any previous
    /// definition of `name` and taking over the canonical name for those channels.
    ///
    /// `name` is normalized first (`"Brand Blue"` is stored as `brandblue`), so
    /// every registered name is reachable through [`crate::parse`]. A name that
    /// normalizes to nothing is ignored.
    ///
    /// Returns the canonical name that was displaced, if there was one.
    pub fn register<N, C>(&mut self, name: N, color: C) -> Option<ColorName>
    where
        N: Into<ColorName>,
        C: ToChannels,
    {
        let name = normalized(name.into());
        if name.is_empty() {
            return None;
        }

        let rgba = color.to_channels();

        if let Some(previous) = self.name_to_rgba.insert(name.clone(), rgba) {
            if previous != rgba {
                self.release(&name, previous);
            }
        }

        self.rgba_to_name
            .insert(pack(rgba), name.clone())
            .filter(|displaced| *displaced != name)
    }

    /// `name` no longer maps to `rgba`; hand its reverse slot, if it owns it, to the
    /// last alias in table order that still does
    fn release(&mut self, name: &str, rgba: [u8; 4]) {
        let key = pack(rgba);

        if !matches!(self.rgba_to_name.get(&key), Some(owner) if owner == name) {
            return;
        }

        let heir = self
            .name_to_rgba
            .iter()
            .rev()
            .find(|(_, channels)| **channels == rgba)
            .map(|(alias, _)| alias.clone());

        match heir {
            Some(alias) => {
                self.rgba_to_name.insert(key, alias);
            }
            None => {
                self.rgba_to_name.remove(&key);
            }
        }
    }

    /// Exact, case-sensitive lookup of an already normalized name
    pub fn get_by_name(&self, name: &str) -> Option<[u8; 4]> {
        self.name_to_rgba.get(name).copied()
    }

    /// The canonical name for exactly these channels, if any
    pub fn get_by_rgba(&self, rgba: [u8; 4]) -> Option<&ColorName> {
        self.rgba_to_name.get(&pack(rgba))
    }

    /// The color registered under `name`, tagged with that name
    pub fn named(&self, name: &str) -> Option<Color> {
        let (name, &[red, green, blue, alpha]) = self.name_to_rgba.get_key_value(name)?;
        Some(Color::with_name(red, green, blue, alpha, name.clone()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_rgba.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.name_to_rgba.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_rgba.is_empty()
    }

    /// Every registered color in registration order, each tagged with its own
    /// name (which for an alias is not necessarily the canonical one)
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.name_to_rgba
            .iter()
            .map(|(name, &[red, green, blue, alpha])| {
                Color::with_name(red, green, blue, alpha, name.clone())
            })
    }

    /// Parse `text` against this table. See [`crate::parse`].
    pub fn parse(&self, text: &str) -> crate::ColorResult<Color> {
        crate::parse::parse(text, self)
    }
}

static STANDARD_REGISTRY: Lazy<ColorRegistry> = Lazy::new(ColorRegistry::standard);

/// The process-wide, immutable standard table
///
/// Backs [`std::str::FromStr`] for [`Color`] and the default [`crate::Options`].
/// Code that needs extra names should build its own [`ColorRegistry`].
pub fn standard_registry() -> &'static ColorRegistry {
    &STANDARD_REGISTRY
}

/// Declares the seed table and a `Color` constant for each of its entries
macro_rules! standard_colors {
    ($($konst:ident => $name:literal, $rgba:expr;)*) => {
        /// Seed data, in alphabetical order
        pub(crate) static STANDARD_COLORS: &[(&str, [u8; 4])] = &[$(($name, $rgba),)*];

        impl Color {
            $(
                #[doc = concat!("`", $name, "`, tagged with its name")]
                pub const $konst: Color = {
                    let [red, green, blue, alpha] = $rgba;
                    Color::from_parts(red, green, blue, alpha, Some($name))
                };
            )*
        }
    };
}

standard_colors! {
    ALICEBLUE => "aliceblue", [0xF0, 0xF8, 0xFF, 0xFF];
    ANTIQUEWHITE => "antiquewhite", [0xFA, 0xEB, 0xD7, 0xFF];
    AQUA => "aqua", [0x00, 0xFF, 0xFF, 0xFF];
    AQUAMARINE => "aquamarine", [0x7F, 0xFF, 0xD4, 0xFF];
    AZURE => "azure", [0xF0, 0xFF, 0xFF, 0xFF];
    BEIGE => "beige", [0xF5, 0xF5, 0xDC, 0xFF];
    BISQUE => "bisque", [0xFF, 0xE4, 0xC4, 0xFF];
    BLACK => "black", [0x00, 0x00, 0x00, 0xFF];
    BLANCHEDALMOND => "blanchedalmond", [0xFF, 0xEB, 0xCD, 0xFF];
    BLUE => "blue", [0x00, 0x00, 0xFF, 0xFF];
    BLUEVIOLET => "blueviolet", [0x8A, 0x2B, 0xE2, 0xFF];
    BROWN => "brown", [0xA5, 0x2A, 0x2A, 0xFF];
    BURLYWOOD => "burlywood", [0xDE, 0xB8, 0x87, 0xFF];
    CADETBLUE => "cadetblue", [0x5F, 0x9E, 0xA0, 0xFF];
    CHARTREUSE => "chartreuse", [0x7F, 0xFF, 0x00, 0xFF];
    CHOCOLATE => "chocolate", [0xD2, 0x69, 0x1E, 0xFF];
    CORAL => "coral", [0xFF, 0x7F, 0x50, 0xFF];
    CORNFLOWERBLUE => "cornflowerblue", [0x64, 0x95, 0xED, 0xFF];
    CORNSILK => "cornsilk", [0xFF, 0xF8, 0xDC, 0xFF];
    CRIMSON => "crimson", [0xDC, 0x14, 0x3C, 0xFF];
    CYAN => "cyan", [0x00, 0xFF, 0xFF, 0xFF];
    DARKBLUE => "darkblue", [0x00, 0x00, 0x8B, 0xFF];
    DARKCYAN => "darkcyan", [0x00, 0x8B, 0x8B, 0xFF];
    DARKGOLDENROD => "darkgoldenrod", [0xB8, 0x86, 0x0B, 0xFF];
    DARKGRAY => "darkgray", [0xA9, 0xA9, 0xA9, 0xFF];
    DARKGREEN => "darkgreen", [0x00, 0x64, 0x00, 0xFF];
    DARKGREY => "darkgrey", [0xA9, 0xA9, 0xA9, 0xFF];
    DARKKHAKI => "darkkhaki", [0xBD, 0xB7, 0x6B, 0xFF];
    DARKMAGENTA => "darkmagenta", [0x8B, 0x00, 0x8B, 0xFF];
    DARKOLIVEGREEN => "darkolivegreen", [0x55, 0x6B, 0x2F, 0xFF];
    DARKORANGE => "darkorange", [0xFF, 0x8C, 0x00, 0xFF];
    DARKORCHID => "darkorchid", [0x99, 0x32, 0xCC, 0xFF];
    DARKRED => "darkred", [0x8B, 0x00, 0x00, 0xFF];
    DARKSALMON => "darksalmon", [0xE9, 0x96, 0x7A, 0xFF];
    DARKSEAGREEN => "darkseagreen", [0x8F, 0xBC, 0x8F, 0xFF];
    DARKSLATEBLUE => "darkslateblue", [0x48, 0x3D, 0x8B, 0xFF];
    DARKSLATEGRAY => "darkslategray", [0x2F, 0x4F, 0x4F, 0xFF];
    DARKSLATEGREY => "darkslategrey", [0x2F, 0x4F, 0x4F, 0xFF];
    DARKTURQUOISE => "darkturquoise", [0x00, 0xCE, 0xD1, 0xFF];
    DARKVIOLET => "darkviolet", [0x94, 0x00, 0xD3, 0xFF];
    DEEPPINK => "deeppink", [0xFF, 0x14, 0x93, 0xFF];
    DEEPSKYBLUE => "deepskyblue", [0x00, 0xBF, 0xFF, 0xFF];
    DIMGRAY => "dimgray", [0x69, 0x69, 0x69, 0xFF];
    DIMGREY => "dimgrey", [0x69, 0x69, 0x69, 0xFF];
    DODGERBLUE => "dodgerblue", [0x1E, 0x90, 0xFF, 0xFF];
    FIREBRICK => "firebrick", [0xB2, 0x22, 0x22, 0xFF];
    FLORALWHITE => "floralwhite", [0xFF, 0xFA, 0xF0, 0xFF];
    FORESTGREEN => "forestgreen", [0x22, 0x8B, 0x22, 0xFF];
    FUCHSIA => "fuchsia", [0xFF, 0x00, 0xFF, 0xFF];
    GAINSBORO => "gainsboro", [0xDC, 0xDC, 0xDC, 0xFF];
    GHOSTWHITE => "ghostwhite", [0xF8, 0xF8, 0xFF, 0xFF];
    GOLD => "gold", [0xFF, 0xD7, 0x00, 0xFF];
    GOLDENROD => "goldenrod", [0xDA, 0xA5, 0x20, 0xFF];
    GRAY => "gray", [0x80, 0x80, 0x80, 0xFF];
    GREEN => "green", [0x00, 0x80, 0x00, 0xFF];
    GREENYELLOW => "greenyellow", [0xAD, 0xFF, 0x2F, 0xFF];
    GREY => "grey", [0x80, 0x80, 0x80, 0xFF];
    HONEYDEW => "honeydew", [0xF0, 0xFF, 0xF0, 0xFF];
    HOTPINK => "hotpink", [0xFF, 0x69, 0xB4, 0xFF];
    INDIANRED => "indianred", [0xCD, 0x5C, 0x5C, 0xFF];
    INDIGO => "indigo", [0x4B, 0x00, 0x82, 0xFF];
    IVORY => "ivory", [0xFF, 0xFF, 0xF0, 0xFF];
    KHAKI => "khaki", [0xF0, 0xE6, 0x8C, 0xFF];
    LAVENDER => "lavender", [0xE6, 0xE6, 0xFA, 0xFF];
    LAVENDERBLUSH => "lavenderblush", [0xFF, 0xF0, 0xF5, 0xFF];
    LAWNGREEN => "lawngreen", [0x7C, 0xFC, 0x00, 0xFF];
    LEMONCHIFFON => "lemonchiffon", [0xFF, 0xFA, 0xCD, 0xFF];
    LIGHTBLUE => "lightblue", [0xAD, 0xD8, 0xE6, 0xFF];
    LIGHTCORAL => "lightcoral", [0xF0, 0x80, 0x80, 0xFF];
    LIGHTCYAN => "lightcyan", [0xE0, 0xFF, 0xFF, 0xFF];
    LIGHTGOLDENRODYELLOW => "lightgoldenrodyellow", [0xFA, 0xFA, 0xD2, 0xFF];
    LIGHTGRAY => "lightgray", [0xD3, 0xD3, 0xD3, 0xFF];
    LIGHTGREEN => "lightgreen", [0x90, 0xEE, 0x90, 0xFF];
    LIGHTGREY => "lightgrey", [0xD3, 0xD3, 0xD3, 0xFF];
    LIGHTPINK => "lightpink", [0xFF, 0xB6, 0xC1, 0xFF];
    LIGHTSALMON => "lightsalmon", [0xFF, 0xA0, 0x7A, 0xFF];
    LIGHTSEAGREEN => "lightseagreen", [0x20, 0xB2, 0xAA, 0xFF];
    LIGHTSKYBLUE => "lightskyblue", [0x87, 0xCE, 0xFA, 0xFF];
    LIGHTSLATEGRAY => "lightslategray", [0x77, 0x88, 0x99, 0xFF];
    LIGHTSLATEGREY => "lightslategrey", [0x77, 0x88, 0x99, 0xFF];
    LIGHTSTEELBLUE => "lightsteelblue", [0xB0, 0xC4, 0xDE, 0xFF];
    LIGHTYELLOW => "lightyellow", [0xFF, 0xFF, 0xE0, 0xFF];
    LIME => "lime", [0x00, 0xFF, 0x00, 0xFF];
    LIMEGREEN => "limegreen", [0x32, 0xCD, 0x32, 0xFF];
    LINEN => "linen", [0xFA, 0xF0, 0xE6, 0xFF];
    MAGENTA => "magenta", [0xFF, 0x00, 0xFF, 0xFF];
    MAROON => "maroon", [0x80, 0x00, 0x00, 0xFF];
    MEDIUMAQUAMARINE => "mediumaquamarine", [0x66, 0xCD, 0xAA, 0xFF];
    MEDIUMBLUE => "mediumblue", [0x00, 0x00, 0xCD, 0xFF];
    MEDIUMORCHID => "mediumorchid", [0xBA, 0x55, 0xD3, 0xFF];
    MEDIUMPURPLE => "mediumpurple", [0x93, 0x70, 0xDB, 0xFF];
    MEDIUMSEAGREEN => "mediumseagreen", [0x3C, 0xB3, 0x71, 0xFF];
    MEDIUMSLATEBLUE => "mediumslateblue", [0x7B, 0x68, 0xEE, 0xFF];
    MEDIUMSPRINGGREEN => "mediumspringgreen", [0x00, 0xFA, 0x9A, 0xFF];
    MEDIUMTURQUOISE => "mediumturquoise", [0x48, 0xD1, 0xCC, 0xFF];
    MEDIUMVIOLETRED => "mediumvioletred", [0xC7, 0x15, 0x85, 0xFF];
    MIDNIGHTBLUE => "midnightblue", [0x19, 0x19, 0x70, 0xFF];
    MINTCREAM => "mintcream", [0xF5, 0xFF, 0xFA, 0xFF];
    MISTYROSE => "mistyrose", [0xFF, 0xE4, 0xE1, 0xFF];
    MOCCASIN => "moccasin", [0xFF, 0xE4, 0xB5, 0xFF];
    NAVAJOWHITE => "navajowhite", [0xFF, 0xDE, 0xAD, 0xFF];
    NAVY => "navy", [0x00, 0x00, 0x80, 0xFF];
    OLDLACE => "oldlace", [0xFD, 0xF5, 0xE6, 0xFF];
    OLIVE => "olive", [0x80, 0x80, 0x00, 0xFF];
    OLIVEDRAB => "olivedrab", [0x6B, 0x8E, 0x23, 0xFF];
    ORANGE => "orange", [0xFF, 0xA5, 0x00, 0xFF];
    ORANGERED => "orangered", [0xFF, 0x45, 0x00, 0xFF];
    ORCHID => "orchid", [0xDA, 0x70, 0xD6, 0xFF];
    PALEGOLDENROD => "palegoldenrod", [0xEE, 0xE8, 0xAA, 0xFF];
    PALEGREEN => "palegreen", [0x98, 0xFB, 0x98, 0xFF];
    PALETURQUOISE => "paleturquoise", [0xAF, 0xEE, 0xEE, 0xFF];
    PALEVIOLETRED => "palevioletred", [0xDB, 0x70, 0x93, 0xFF];
    PAPAYAWHIP => "papayawhip", [0xFF, 0xEF, 0xD5, 0xFF];
    PEACHPUFF => "peachpuff", [0xFF, 0xDA, 0xB9, 0xFF];
    PERU => "peru", [0xCD, 0x85, 0x3F, 0xFF];
    PINK => "pink", [0xFF, 0xC0, 0xCB, 0xFF];
    PLUM => "plum", [0xDD, 0xA0, 0xDD, 0xFF];
    POWDERBLUE => "powderblue", [0xB0, 0xE0, 0xE6, 0xFF];
    PURPLE => "purple", [0x80, 0x00, 0x80, 0xFF];
    REBECCAPURPLE => "rebeccapurple", [0x66, 0x33, 0x99, 0xFF];
    RED => "red", [0xFF, 0x00, 0x00, 0xFF];
    ROSYBROWN => "rosybrown", [0xBC, 0x8F, 0x8F, 0xFF];
    ROYALBLUE => "royalblue", [0x41, 0x69, 0xE1, 0xFF];
    SADDLEBROWN => "saddlebrown", [0x8B, 0x45, 0x13, 0xFF];
    SALMON => "salmon", [0xFA, 0x80, 0x72, 0xFF];
    SANDYBROWN => "sandybrown", [0xF4, 0xA4, 0x60, 0xFF];
    SEAGREEN => "seagreen", [0x2E, 0x8B, 0x57, 0xFF];
    SEASHELL => "seashell", [0xFF, 0xF5, 0xEE, 0xFF];
    SIENNA => "sienna", [0xA0, 0x52, 0x2D, 0xFF];
    SILVER => "silver", [0xC0, 0xC0, 0xC0, 0xFF];
    SKYBLUE => "skyblue", [0x87, 0xCE, 0xEB, 0xFF];
    SLATEBLUE => "slateblue", [0x6A, 0x5A, 0xCD, 0xFF];
    SLATEGRAY => "slategray", [0x70, 0x80, 0x90, 0xFF];
    SLATEGREY => "slategrey", [0x70, 0x80, 0x90, 0xFF];
    SNOW => "snow", [0xFF, 0xFA, 0xFA, 0xFF];
    SPRINGGREEN => "springgreen", [0x00, 0xFF, 0x7F, 0xFF];
    STEELBLUE => "steelblue", [0x46, 0x82, 0xB4, 0xFF];
    TAN => "tan", [0xD2, 0xB4, 0x8C, 0xFF];
    TEAL => "teal", [0x00, 0x80, 0x80, 0xFF];
    THISTLE => "thistle", [0xD8, 0xBF, 0xD8, 0xFF];
    TOMATO => "tomato", [0xFF, 0x63, 0x47, 0xFF];
    TRANSPARENT => "transparent", [0x00, 0x00, 0x00, 0x00];
    TURQUOISE => "turquoise", [0x40, 0xE0, 0xD0, 0xFF];
    VIOLET => "violet", [0xEE, 0x82, 0xEE, 0xFF];
    WHEAT => "wheat", [0xF5, 0xDE, 0xB3, 0xFF];
    WHITE => "white", [0xFF, 0xFF, 0xFF, 0xFF];
    WHITESMOKE => "whitesmoke", [0xF5, 0xF5, 0xF5, 0xFF];
    YELLOW => "yellow", [0xFF, 0xFF, 0x00, 0xFF];
    YELLOWGREEN => "yellowgreen", [0x9A, 0xCD, 0x32, 0xFF];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_round_trips_names() {
        let registry = ColorRegistry::standard();
        assert_eq!(registry.len(), STANDARD_COLORS.len());
        for &(name, rgba) in STANDARD_COLORS {
            assert_eq!(registry.get_by_name(name), Some(rgba), "{}", name);
        }
    }

    #[test]
    fn seed_data_is_sorted() {
        assert!(STANDARD_COLORS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn every_reverse_entry_points_at_a_matching_forward_entry() {
        let registry = ColorRegistry::standard();
        for (key, name) in &registry.rgba_to_name {
            assert_eq!(registry.get_by_name(name).map(pack), Some(*key), "{}", name);
        }
    }

    #[test]
    fn alphabetically_last_alias_is_canonical() {
        let registry = ColorRegistry::standard();
        let canonical = |rgba| registry.get_by_rgba(rgba).map(|name| name.as_ref());
        assert_eq!(canonical([0x00, 0xFF, 0xFF, 0xFF]), Some("cyan"));
        assert_eq!(canonical([0xFF, 0x00, 0xFF, 0xFF]), Some("magenta"));
        assert_eq!(canonical([0x80, 0x80, 0x80, 0xFF]), Some("grey"));
        assert_eq!(canonical([0x2F, 0x4F, 0x4F, 0xFF]), Some("darkslategrey"));
        assert_eq!(canonical([0xFF, 0x00, 0x00, 0xFF]), Some("red"));
        assert_eq!(canonical([0x00, 0x00, 0x00, 0x00]), Some("transparent"));
    }

    #[test]
    fn lookup_is_exact() {
        let registry = ColorRegistry::standard();
        assert_eq!(registry.get_by_rgba([0xFF, 0x00, 0x00, 0xFE]), None);
        assert_eq!(registry.get_by_rgba([0xFE, 0x00, 0x00, 0xFF]), None);
        assert_eq!(registry.get_by_name("Red"), None);
        assert_eq!(registry.get_by_name("misty rose"), None);
    }

    #[test]
    fn pack_orders_channels_high_to_low() {
        assert_eq!(pack([0x12, 0x34, 0x56, 0x78]), 0x1234_5678);
    }

    #[test]
    fn later_registration_displaces_canonical_name() {
        let mut registry = ColorRegistry::standard();
        let displaced = registry.register("fire", [0xFF, 0x00, 0x00, 0xFF]);
        assert_eq!(displaced.as_deref(), Some("red"));
        assert_eq!(
            registry.get_by_rgba([0xFF, 0x00, 0x00, 0xFF]).map(|n| n.as_ref()),
            Some("fire")
        );
        assert_eq!(registry.get_by_name("red"), Some([0xFF, 0x00, 0x00, 0xFF]));
    }

    #[test]
    fn registering_same_name_twice_displaces_nothing() {
        let mut registry = ColorRegistry::new();
        assert_eq!(registry.register("ink", [1, 2, 3, 4]), None);
        assert_eq!(registry.register("ink", [1, 2, 3, 4]), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn redefining_a_name_releases_its_old_channels() {
        let mut registry = ColorRegistry::new();
        registry.register("ink", [1, 2, 3, 4]);
        registry.register("ink", [5, 6, 7, 8]);
        assert_eq!(registry.get_by_rgba([1, 2, 3, 4]), None);
        assert_eq!(
            registry.get_by_rgba([5, 6, 7, 8]).map(|n| n.as_ref()),
            Some("ink")
        );
    }

    #[test]
    fn redefining_a_name_hands_its_slot_to_an_alias() {
        let mut registry = ColorRegistry::standard();
        registry.register("cyan", [1, 2, 3, 255]);
        assert_eq!(
            registry.get_by_rgba([0x00, 0xFF, 0xFF, 0xFF]).map(|n| n.as_ref()),
            Some("aqua")
        );
    }

    #[test]
    fn named_tags_color_with_its_own_name() {
        let registry = ColorRegistry::standard();
        let aqua = registry.named("aqua").unwrap();
        assert_eq!(aqua.name(), Some("aqua"));
        assert_eq!(aqua.channels(), [0x00, 0xFF, 0xFF, 0xFF]);
        assert!(registry.named("unknown").is_none());
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut registry = ColorRegistry::new();
        registry.register("zeta", [0, 0, 0, 255]);
        registry.register(String::from("alpha"), [1, 1, 1, 255]);
        let names: Vec<String> = registry
            .iter()
            .map(|color| color.name().unwrap_or_default().to_owned())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn empty_names_are_ignored() {
        let mut registry = ColorRegistry::new();
        assert_eq!(registry.register("", [1, 2, 3, 255]), None);
        assert_eq!(registry.register("--42", [1, 2, 3, 255]), None);
        assert!(registry.is_empty());
        assert_eq!(registry.get_by_rgba([1, 2, 3, 255]), None);
    }

    #[test]
    fn names_are_normalized_on_registration() {
        let mut registry = ColorRegistry::new();
        registry.register("Brand Blue", [1, 2, 3, 255]);
        assert_eq!(registry.get_by_name("brandblue"), Some([1, 2, 3, 255]));
        assert!(!registry.contains("Brand Blue"));
        assert_eq!(
            registry.get_by_rgba([1, 2, 3, 255]).map(|n| n.as_ref()),
            Some("brandblue")
        );
    }

    #[test]
    fn normalized_standard_names_stay_borrowed() {
        let registry = ColorRegistry::standard();
        assert!(registry
            .name_to_rgba
            .keys()
            .all(|name| matches!(name, Cow::Borrowed(_))));
    }
}
