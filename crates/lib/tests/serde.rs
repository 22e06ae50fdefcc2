#![cfg(feature = "serde")]

use chroma::{parse, standard_registry, Color};

#[test]
fn serializes_as_text() {
    let colors: Vec<Color> = ["red", "#fea", "rgba(26,33,80,22)"]
        .into_iter()
        .map(|text| parse(text, standard_registry()).unwrap())
        .collect();

    assert_eq!(
        serde_json::to_string(&colors).unwrap(),
        r##"["red","#fea","#1a215016"]"##
    );
}

#[test]
fn deserializes_any_notation() {
    let colors: Vec<Color> =
        serde_json::from_str(r#"["Misty Rose", "rgb(106, 90, 205)", "hex(f,e,a)"]"#).unwrap();

    assert_eq!(colors[0].name(), Some("mistyrose"));
    assert_eq!(colors[1].name(), Some("slateblue"));
    assert_eq!(colors[2].channels(), [15, 14, 10, 255]);
}

#[test]
fn round_trips_through_json() {
    let color = parse("#cdcdcd80", standard_registry()).unwrap();
    let json = serde_json::to_string(&color).unwrap();
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, color);
}

#[test]
fn rejects_invalid_colors() {
    let err = serde_json::from_str::<Color>(r#""rgb(256,0,0)""#).unwrap_err();
    assert!(err.to_string().starts_with("invalid color"));

    assert!(serde_json::from_str::<Color>("42").is_err());
}

#[test]
fn escaped_strings_deserialize() {
    let color: Color = serde_json::from_str(r#""\u0052ed""#).unwrap();
    assert_eq!(color.name(), Some("red"));
}
