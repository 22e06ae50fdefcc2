use std::{
    error::Error as StdError,
    fmt::{self, Display},
};

pub type ColorResult<T> = Result<T, ColorError>;

/// The single error type surfaced by this crate
///
/// Parsing never reports *why* a candidate notation was rejected; every
/// failure to recognize a color is the same [`PublicColorErrorKind::InvalidColor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorError {
    kind: ColorErrorKind,
    /// 1-based line of multi-line input the error was raised on
    line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ColorErrorKind {
    InvalidColor,
    MalformedPalette(&'static str),
}

/// The kind of failure, for callers that want to match on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PublicColorErrorKind {
    /// No notation recognized the input
    InvalidColor,
    /// A palette definition was not of the form `name = color`
    MalformedPalette,
}

impl ColorError {
    pub(crate) const fn invalid_color() -> Self {
        ColorError {
            kind: ColorErrorKind::InvalidColor,
            line: None,
        }
    }

    pub(crate) const fn malformed_palette(message: &'static str) -> Self {
        ColorError {
            kind: ColorErrorKind::MalformedPalette(message),
            line: None,
        }
    }

    #[must_use]
    pub(crate) fn on_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn kind(&self) -> PublicColorErrorKind {
        match self.kind {
            ColorErrorKind::InvalidColor => PublicColorErrorKind::InvalidColor,
            ColorErrorKind::MalformedPalette(..) => PublicColorErrorKind::MalformedPalette,
        }
    }

    /// The 1-based line of the input that failed, if the input had lines
    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

impl Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ColorErrorKind::InvalidColor => f.write_str("invalid color")?,
            ColorErrorKind::MalformedPalette(message) => {
                write!(f, "malformed palette: {}", message)?;
            }
        }

        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }

        Ok(())
    }
}

impl StdError for ColorError {}
