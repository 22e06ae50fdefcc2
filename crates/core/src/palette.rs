use crate::{
    color::ColorRegistry, error::ColorError, utils::normalize_identifier, ColorResult, Logger,
};

/// `name = color` or `name: color`
fn split_definition(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(|c: char| c == '=' || c == ':')?;
    Some((line[..idx].trim(), line[idx + 1..].trim()))
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

impl ColorRegistry {
    /// Register every `name = color` definition in `text`, one per line.
    ///
    /// `:` may be used in place of `=`. Blank lines and anything after `//` are
    /// ignored. Names are normalized the same way parsed names are, so
    /// `Brand Blue = #1e90ff` makes `brand-blue`, `BrandBlue` and `brand_blue`
    /// all parse. Values may use any notation, including names defined earlier
    /// in the same text.
    ///
    /// Returns the number of colors registered. Definitions before a bad line
    /// stay registered.
    pub fn load_palette(&mut self, text: &str, logger: &dyn Logger) -> ColorResult<usize> {
        let mut count = 0;

        for (idx, line) in text.lines().enumerate() {
            let line_number = idx + 1;
            let line = strip_comment(line).trim();

            if line.is_empty() {
                continue;
            }

            let (name, value) = split_definition(line).ok_or_else(|| {
                ColorError::malformed_palette("expected `name = color`").on_line(line_number)
            })?;

            let name = normalize_identifier(name);

            if name.is_empty() {
                return Err(
                    ColorError::malformed_palette("color name is empty").on_line(line_number)
                );
            }

            let color = self.parse(value).map_err(|e| e.on_line(line_number))?;
            let rgba = color.channels();

            if let Some(previous) = self.get_by_name(&name) {
                if previous != rgba {
                    logger.warning(&format!("line {}: `{}` redefined", line_number, name));
                }
            }

            if let Some(displaced) = self.register(name.clone(), rgba) {
                logger.warning(&format!(
                    "line {}: `{}` replaces `{}` as the name of {}",
                    line_number,
                    name,
                    displaced,
                    color.as_web()
                ));
            }

            logger.debug(&format!("registered `{}` as {}", name, color.as_web()));
            count += 1;
        }

        Ok(count)
    }
}
