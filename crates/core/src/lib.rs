/*!
This crate provides the engine behind `chroma`: parsing colors written as names,
`#rrggbb` web notation, `rgb()`, `rgba()` and `hex()`, and writing them back out
in any of those notations.

Every color carries its RGBA channels and, when a [`ColorRegistry`] knows one,
the name of exactly those channels. Names are resolved regardless of casing and
separators, so `Misty Rose`, `misty_rose` and `MistyRose` all name the same color.

## Use as library
```
# use chroma_core as chroma;
fn main() -> Result<(), chroma::Error> {
    let color: chroma::Color = "rgb(255, 228, 225)".parse()?;
    assert_eq!(color.to_string(), "mistyrose");
    assert_eq!(color.as_web(), "#ffe4e1");
    assert!(color.light());
    Ok(())
}
```

## Use as binary
```bash
cargo install chroma
chroma --format web "misty rose"
```
*/

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match_else,
    clippy::multiple_crate_versions,
    clippy::wrong_self_convention,
    clippy::unwrap_or_default,
    unknown_lints,
)]

#[cfg(feature = "wasm-exports")]
use wasm_bindgen::prelude::*;

pub use crate::color::{is, standard_registry, Color, ColorName, ColorRegistry, ToChannels};
pub use crate::error::{
    ColorError as Error, ColorResult as Result, PublicColorErrorKind as ErrorKind,
};
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::{Options, OutputMode};
pub use crate::parse::{from_hex, from_name, from_rgb, from_rgba, from_web, parse};
pub(crate) use crate::error::ColorResult;

mod color;
mod error;
mod logger;
mod options;
mod palette;
mod parse;
mod serializer;
mod utils;

/// Convert newline separated colors into the notation chosen by
/// [`Options::mode`]
///
/// Blank lines are skipped. The first line that fails to parse aborts the
/// conversion, and the error records its line number.
///
/// ```
/// # use chroma_core as chroma;
/// fn main() -> Result<(), chroma::Error> {
///     let options = chroma::Options::default().mode(chroma::OutputMode::Rgb);
///     let out = chroma::convert("red\n\n  #fea\n", &options)?;
///     assert_eq!(out, "rgb(255,0,0)\nrgb(255,238,170)");
///     Ok(())
/// }
/// ```
pub fn convert(input: &str, options: &Options) -> Result<String> {
    let mut lines = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let color = options
            .registry
            .parse(line)
            .map_err(|e| e.on_line(idx + 1))?;

        if options.mode == OutputMode::Name && !color.is_named() {
            options.warn(&format!("line {}: {} has no name", idx + 1, color.as_web()));
        }

        lines.push(color.format(options.mode));
    }

    Ok(lines.join("\n"))
}

#[cfg(feature = "wasm-exports")]
#[wasm_bindgen(js_name = convert)]
pub fn convert_js(input: String, mode: String) -> std::result::Result<String, String> {
    let mode = OutputMode::from_name(&mode).ok_or_else(|| format!("unknown mode `{}`", mode))?;
    let options = Options::default().mode(mode).logger(&NullLogger);
    convert(&input, &options).map_err(|e| e.to_string())
}
