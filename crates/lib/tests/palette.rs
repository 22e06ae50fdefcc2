
use chroma::{convert, ColorRegistry, ErrorKind, NullLogger, Options, OutputMode};

use crate::macros::TestLogger;

const PALETTE: &str = "
// brand
Brand Blue = #1e90fe
brand-ink: rgb(16, 16, 24)
accent = Brand Blue
";

fn brand_registry() -> ColorRegistry {
    let mut registry = ColorRegistry::standard();
    registry.load_palette(PALETTE, &NullLogger).unwrap();
    registry
}

#[test]
fn palette_names_are_used_for_output() {
    let registry = brand_registry();
    let options = Options::default().registry(&registry);
    assert_eq!(
        convert("#1e90fe\nrgb(16,16,24)\nred", &options).unwrap(),
        "accent\nbrandink\nred"
    );
}

#[test]
fn palette_names_parse_with_any_spelling() {
    let registry = brand_registry();
    let options = Options::default().registry(&registry).mode(OutputMode::Web);
    assert_eq!(
        convert("BrandBlue\nbrand_blue\nBRAND INK", &options).unwrap(),
        "#1e90fe\n#1e90fe\n#101018"
    );
}

#[test]
fn palette_logs_registrations_and_displacements() {
    let mut registry = ColorRegistry::standard();
    let logger = TestLogger::default();
    let count = registry
        .load_palette("fire = #ff0000\nink = #101018", &logger)
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        logger.debug_messages(),
        vec![
            "registered `fire` as #ff0000".to_owned(),
            "registered `ink` as #101018".to_owned(),
        ]
    );
    assert_eq!(
        logger.warning_messages(),
        vec!["line 1: `fire` replaces `red` as the name of #ff0000".to_owned()]
    );

    // the displaced name still parses, but no longer names the channels
    let options = Options::default().registry(&registry);
    assert_eq!(convert("red", &options).unwrap(), "red");
    assert_eq!(convert("rgb(255,0,0)", &options).unwrap(), "fire");
}

#[test]
fn palette_errors() {
    let mut registry = ColorRegistry::new();

    let err = registry
        .load_palette("ok = #fff\nbroken = #ggg", &NullLogger)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidColor);
    assert_eq!(err.line(), Some(2));
    assert!(registry.contains("ok"));

    let err = registry.load_palette("just words", &NullLogger).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedPalette);
    assert_eq!(
        err.to_string(),
        "malformed palette: expected `name = color` (line 1)"
    );
}

#[test]
fn name_mode_warns_for_unnamed_colors() {
    let logger = TestLogger::default();
    let options = Options::default()
        .mode(OutputMode::Name)
        .logger(&logger);

    assert_eq!(convert("red\n#123456", &options).unwrap(), "red\n");
    assert_eq!(
        logger.warning_messages(),
        vec!["line 2: #123456 has no name".to_owned()]
    );
}
