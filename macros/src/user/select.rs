//! `select!` - autoref-ranked candidate selection for concrete types.
//!
//! Each arm becomes one level of an autoref ladder:
//!
//! ```text
//! select!(&value; A => First, B => Second, _ => Last)
//!
//! impl<T: ?Sized + A> __SelectRank0 for &&Probe<T> { .. -> First }
//! impl<T: ?Sized + B> __SelectRank1 for &Probe<T>  { .. -> Second }
//! impl<T: ?Sized>     __SelectRank2 for Probe<T>   { .. -> Last }
//!
//! (&&&Probe::of(&value)).__select()
//! ```
//!
//! Method probing peels one reference per step, so the first level whose
//! bound holds wins and later levels are never considered.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Expr, Path, Token, TypeParamBound,
};

use crate::common::crate_path;

/// Condition guarding one level.
pub enum Guard {
    Bounds(Punctuated<TypeParamBound, Token![+]>),
    Fallback(Token![_]),
}

impl ToTokens for Guard {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        match self {
            Guard::Bounds(bounds) => bounds.to_tokens(tokens),
            Guard::Fallback(underscore) => underscore.to_tokens(tokens),
        }
    }
}

/// `Guard => Candidate`
pub struct Arm {
    pub guard: Guard,
    pub candidate: Path,
}

impl Parse for Arm {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let guard = if input.peek(Token![_]) {
            Guard::Fallback(input.parse()?)
        } else {
            Guard::Bounds(Punctuated::parse_separated_nonempty(input)?)
        };
        input.parse::<Token![=>]>()?;
        let candidate: Path = input.parse()?;
        Ok(Arm { guard, candidate })
    }
}

/// `probe_expr; Arm, Arm, ..., _ => Fallback`
pub struct SelectInput {
    pub probe: Expr,
    pub arms: Vec<Arm>,
}

impl Parse for SelectInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let probe: Expr = input.parse()?;
        input.parse::<Token![;]>()?;
        let arms = Punctuated::<Arm, Token![,]>::parse_terminated(input)?;
        Ok(SelectInput {
            probe,
            arms: arms.into_iter().collect(),
        })
    }
}

/// Reject ladders that cannot resolve for every type.
pub fn validate(input: &SelectInput) -> syn::Result<()> {
    let Some(last) = input.arms.last() else {
        return Err(syn::Error::new_spanned(
            &input.probe,
            "select! needs at least one arm: `_ => Candidate`",
        ));
    };

    if !matches!(last.guard, Guard::Fallback(_)) {
        return Err(syn::Error::new_spanned(
            &last.guard,
            "priority ladder must end with an unconditional `_ => Candidate` arm",
        ));
    }

    let body = &input.arms[..input.arms.len() - 1];
    if let Some(early) = body.iter().find(|arm| matches!(arm.guard, Guard::Fallback(_))) {
        return Err(syn::Error::new_spanned(
            &early.guard,
            "`_` must be the last arm; levels after the terminal fallback are unreachable",
        ));
    }

    Ok(())
}

pub fn expand_select(input: SelectInput) -> TokenStream2 {
    if let Err(err) = validate(&input) {
        return err.to_compile_error();
    }

    let krate = crate_path();
    let levels = input.arms.len();
    let probe = &input.probe;

    let ranks = input.arms.iter().enumerate().map(|(rank, arm)| {
        let trait_ident = format_ident!("__SelectRank{}", rank);
        let candidate = &arm.candidate;

        // Most preferred level sits behind the most references.
        let depth = levels - 1 - rank;
        let mut self_ty = quote! { #krate::detect::Probe<__T> };
        for _ in 0..depth {
            self_ty = quote! { &#self_ty };
        }

        let bounds = match &arm.guard {
            Guard::Bounds(bounds) => quote! { ?Sized + #bounds },
            Guard::Fallback(_) => quote! { ?Sized },
        };

        quote! {
            #[allow(dead_code, non_camel_case_types)]
            trait #trait_ident {
                fn __select(&self) -> #candidate;
            }

            impl<__T: #bounds> #trait_ident for #self_ty {
                #[inline(always)]
                fn __select(&self) -> #candidate {
                    #candidate
                }
            }
        }
    });

    let refs = (0..levels).map(|_| quote! { & });

    quote! {
        {
            #(#ranks)*
            (#(#refs)* #krate::detect::Probe::of(#probe)).__select()
        }
    }
}
