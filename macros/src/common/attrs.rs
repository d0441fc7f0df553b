//! Attribute and path helpers shared by the derive and function-like macros.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::Attribute;

/// Absolute path to the runtime crate.
///
/// The runtime crate declares `extern crate self as tola_dispatch`, so this
/// path also resolves inside its own unit tests.
pub fn crate_path() -> TokenStream2 {
    quote! { ::tola_dispatch }
}

/// Find at most one `#[name(..)]` attribute.
///
/// A second occurrence is an error pointing at the duplicate.
pub fn single_attr<'a>(attrs: &'a [Attribute], name: &str) -> syn::Result<Option<&'a Attribute>> {
    let mut found = attrs.iter().filter(|attr| attr.path().is_ident(name));
    let first = found.next();
    if let Some(dup) = found.next() {
        return Err(syn::Error::new_spanned(
            dup,
            format!("duplicate `#[{name}(..)]`: a type belongs to exactly one category"),
        ));
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_single_attr_absent() {
        let input: syn::DeriveInput = parse_quote! {
            #[derive(Debug)]
            struct Plain;
        };
        assert!(single_attr(&input.attrs, "category").unwrap().is_none());
    }

    #[test]
    fn test_single_attr_duplicate() {
        let input: syn::DeriveInput = parse_quote! {
            #[category(Fast)]
            #[category(Slow)]
            struct Twice;
        };
        let err = single_attr(&input.attrs, "category").unwrap_err();
        assert!(err.to_string().contains("exactly one category"));
    }
}
