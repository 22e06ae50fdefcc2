use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, LitStr};

fn name_tokens(name: Option<&str>) -> TokenStream2 {
    match name {
        Some(name) => quote!(::core::option::Option::Some(#name)),
        None => quote!(::core::option::Option::None),
    }
}

/// Expands to `(red, green, blue, alpha, name)` for a color literal, checked
/// against the standard named colors when the calling crate is compiled.
///
/// Use `chroma::color!` rather than calling this directly.
#[proc_macro]
pub fn color_parts(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as LitStr);

    let color = match chroma_core::standard_registry().parse(&input.value()) {
        Ok(color) => color,
        Err(e) => {
            let err = syn::Error::new(
                input.span(),
                format!("{}: {:?}", e, input.value()),
            );
            return syn::Error::into_compile_error(err).into();
        }
    };

    let [red, green, blue, alpha] = color.channels();
    let name = name_tokens(color.name());

    quote!((#red, #green, #blue, #alpha, #name)).into()
}
