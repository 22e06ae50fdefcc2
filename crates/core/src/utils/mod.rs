pub(crate) use chars::*;
pub(crate) use ident::normalize_identifier;

mod chars;
mod ident;
