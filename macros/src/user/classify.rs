use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Type};

use crate::common::{crate_path, single_attr};

/// `#[derive(Classify)]` registers the type in exactly one category.
///
/// Without `#[category(..)]` the type lands in `DefaultCategory`.
pub fn expand_derive_classify(input: DeriveInput) -> TokenStream2 {
    match derive_classify(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_classify(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let krate = crate_path();
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let category = match single_attr(&input.attrs, "category")? {
        Some(attr) => {
            let ty: Type = attr.parse_args()?;
            quote! { #ty }
        }
        None => quote! { #krate::classify::DefaultCategory },
    };

    Ok(quote! {
        impl #impl_generics #krate::classify::Classify for #ident #ty_generics #where_clause {
            type Category = #category;
        }
    })
}
