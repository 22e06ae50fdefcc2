//! Recognizers for each textual color notation, and the dispatcher that
//! tries them in turn.
//!
//! Each recognizer is total: it either matches the whole input or reports no
//! match, never a partial result.

use crate::{
    color::{Color, ColorRegistry},
    error::ColorError,
    utils::normalize_identifier,
    ColorResult,
};

pub use function::{from_hex, from_rgb, from_rgba};
pub use web::from_web;

mod function;
mod web;

type Recognizer = fn(&str, &ColorRegistry) -> Option<Color>;

/// In order of priority
const RECOGNIZERS: [Recognizer; 5] = [from_web, from_name, from_rgb, from_rgba, from_hex];

/// Parse a color in any of the supported notations:
///
/// - `#rrggbbaa`, `#rrggbb`, `#rgb`
/// - a name, with any casing and separators (`Misty Rose`, `misty_rose`)
/// - `rgb(r, g, b)` and `rgba(r, g, b, a)` with decimal channels
/// - `hex(r, g, b)` and `hex(r, g, b, a)` with one or two hex digits per channel
///
/// Surrounding whitespace and case are ignored. Colors given numerically are
/// named if `registry` has a name for exactly their channels.
///
/// ```
/// # use chroma_core as chroma;
/// let registry = chroma::ColorRegistry::standard();
/// let color = chroma::parse("rgb(255, 0, 0)", &registry).unwrap();
/// assert_eq!(color.name(), Some("red"));
/// ```
pub fn parse(text: &str, registry: &ColorRegistry) -> ColorResult<Color> {
    let text = text.trim().to_lowercase();

    RECOGNIZERS
        .iter()
        .find_map(|recognize| recognize(&text, registry))
        .ok_or_else(ColorError::invalid_color)
}

/// A registered name, after folding case and separators
pub fn from_name(text: &str, registry: &ColorRegistry) -> Option<Color> {
    registry.named(&normalize_identifier(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_standard(text: &str) -> ColorResult<Color> {
        parse(text, &ColorRegistry::standard())
    }

    #[test]
    fn rejects() {
        for text in [
            "",
            " ",
            "Unknown",
            "rgb()",
            "rgb(0)",
            "rgb(0,0)",
            "rgb(0,0,a)",
            "rgb(256,256,256)",
            "rgb(100,100,100,50)",
            "rgb(,,)",
            "rgba()",
            "rgba(0)",
            "rgba(0,0)",
            "rgba(0,0,a)",
            "rgba(0,0,0,a)",
            "rgba(,,,)",
            "rgba(256,256,256,256)",
            "hex()",
            "hex(0)",
            "hex(0,0)",
            "hex(0,0,z)",
            "hex(0,0,0,z)",
            "#",
            "#a",
            "#ab",
            "#coo",
            "#bada",
            "#coolao",
            "__",
        ] {
            assert_eq!(
                parse_standard(text),
                Err(ColorError::invalid_color()),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn name_wins_over_functions() {
        let mut registry = ColorRegistry::standard();
        registry.register("rgb000", [1, 2, 3, 255]);
        let color = parse("rgb(0,0,0)", &registry).unwrap();
        assert_eq!(color.channels(), [1, 2, 3, 255]);
    }

    #[test]
    fn empty_name_never_tags_or_parses() {
        let mut registry = ColorRegistry::new();
        registry.register("", [1, 2, 3, 255]);
        assert_eq!(parse("", &registry), Err(ColorError::invalid_color()));
        let color = parse("#010203", &registry).unwrap();
        assert_eq!(color.name(), None);
        assert!(!color.is_named());
        assert_eq!(color.as_text(), "#010203");
    }

    #[test]
    fn registered_names_round_trip_through_text() {
        let mut registry = ColorRegistry::new();
        registry.register("Brand Blue", [1, 2, 3, 255]);
        let color = parse("#010203", &registry).unwrap();
        assert_eq!(color.as_text(), "brandblue");
        let again = parse(&color.as_text(), &registry).unwrap();
        assert_eq!(again, color);
        assert_eq!(again.name(), Some("brandblue"));
        assert_eq!(parse("Brand Blue", &registry).unwrap(), color);
    }

    #[test]
    fn names_fold_case_and_separators() {
        for text in ["  Misty_Rose  ", "misty rose", "MISTY-ROSE", "MistyRose"] {
            let color = parse_standard(text).unwrap();
            assert_eq!(color.name(), Some("mistyrose"), "{:?}", text);
            assert_eq!(color.channels(), [0xFF, 0xE4, 0xE1, 0xFF]);
        }
    }

    #[test]
    fn aliases_keep_the_name_they_were_given() {
        assert_eq!(parse_standard("aqua").unwrap().name(), Some("aqua"));
        assert_eq!(parse_standard("#0ff").unwrap().name(), Some("cyan"));
    }

    #[test]
    fn numeric_notations_are_named_from_the_registry() {
        assert_eq!(parse_standard("#fff").unwrap().name(), Some("white"));
        assert_eq!(parse_standard("rgb(106,90,205)").unwrap().name(), Some("slateblue"));
        assert_eq!(parse_standard("hex(0,ff,0)").unwrap().name(), Some("lime"));
        assert_eq!(parse_standard("rgba(26,33,80,22)").unwrap().name(), None);
        assert_eq!(parse(" #fff ", &ColorRegistry::new()).unwrap().name(), None);
    }

    #[test]
    fn empty_registry_still_parses_numbers() {
        let registry = ColorRegistry::new();
        assert!(parse("red", &registry).is_err());
        assert_eq!(
            parse("RGB(1, 2, 3)", &registry).unwrap().channels(),
            [1, 2, 3, 255]
        );
    }
}
