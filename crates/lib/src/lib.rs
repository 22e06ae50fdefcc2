/*!
This crate provides functionality for parsing colors written by hand and writing
them back out in a normalized notation.

Colors may be given as any of the SVG 1.1 color names (plus `rebeccapurple` and
`transparent`), as `#rrggbbaa`, `#rrggbb` or `#rgb`, or as `rgb(r, g, b)`,
`rgba(r, g, b, a)` and `hex(r, g, b[, a])`. Case and surrounding whitespace are
ignored, and names may be spelled with any separators: `Misty Rose`, `misty-rose`
and `MistyRose` are all the same color.

## Use as library
```
fn main() -> Result<(), chroma::Error> {
    let color = chroma::parse("hex(f, e, a)", chroma::standard_registry())?;
    assert_eq!(color.as_web(), "#0f0e0a");
    assert!(color.dark());

    let options = chroma::Options::default().mode(chroma::OutputMode::Rgba);
    assert_eq!(chroma::convert("slate blue", &options)?, "rgba(106,90,205,255)");
    Ok(())
}
```

## Use as binary
```bash
cargo install chroma
chroma --format hex "Navajo White" "#fea"
```
*/

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    clippy::missing_docs_in_private_items,
    clippy::module_name_repetitions,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match_else,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::multiple_crate_versions,
    clippy::wrong_self_convention,
    clippy::uninlined_format_args,
    clippy::cast_precision_loss,
    unknown_lints,
)]

pub use chroma_core::*;

/// Build a [`Color`] from a literal that is validated at compile time
///
/// ```
/// # #[cfg(feature = "macro")]
/// # fn main() {
/// let red = chroma::color!("rgb(255, 0, 0)");
/// assert_eq!(red.name(), Some("red"));
///
/// let bisque = chroma::color!("Bisque");
/// assert_eq!(bisque.as_web(), "#ffe4c4");
/// # }
/// # #[cfg(not(feature = "macro"))]
/// # fn main() {}
/// ```
///
/// A literal that does not parse is a compile error:
///
/// ```compile_fail
/// let nope = chroma::color!("rgb(256, 0, 0)");
/// ```
///
/// This requires the `"macro"` feature, which is not enabled by default.
///
/// ###### Limitations
///
/// Only the standard named colors are known to the macro. Names added to a
/// [`ColorRegistry`] at runtime cannot be used here.
#[macro_export]
#[cfg(any(feature = "macro", doc))]
#[cfg_attr(doc_cfg, doc(cfg(feature = "macro")))]
macro_rules! color {
    ($text:literal) => {{
        let (red, green, blue, alpha, name) =
            $crate::__internal::chroma_macro::color_parts!($text);
        $crate::Color::from_parts(red, green, blue, alpha, name)
    }};
}

#[doc(hidden)]
#[cfg(feature = "macro")]
pub mod __internal {
    #[doc(hidden)]
    pub use chroma_macro;
}
