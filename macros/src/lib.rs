//! Procedural macros for tola-dispatch
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `select!` | expression | Pick the highest-ranked candidate whose bound holds |
//! | `#[derive(Classify)]` | struct/enum | Map a type to its capability category |
//!
//! ## Example
//!
//! ```ignore
//! let strategy = select!(&list;
//!     BulkRemove => Native,
//!     RangeErase => Partition,
//!     _ => Scan
//! );
//!
//! #[derive(Classify)]
//! #[category(Fast)]
//! struct Handle(u32);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Select a candidate for a concrete operand by autoref ranking.
///
/// Arms are tried top-down; the first whose trait bounds hold for the
/// operand's type wins. The last arm must be the unconditional `_` arm.
/// Candidates must be unit structs: each arm's path is used both as the
/// return type and as the returned value.
///
/// # Usage
/// ```ignore
/// let picked = select!(&value; Copy => ByCopy, Clone => ByClone, _ => ByMove);
/// ```
///
/// Only concrete types resolve precisely. Inside a generic function the
/// bounds are checked against the function's own where-clauses.
#[proc_macro]
pub fn select(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::SelectInput);
    user::expand_select(input).into()
}

/// Derive macro registering a type with the capability classifier.
///
/// # Usage
/// ```ignore
/// #[derive(Classify)]
/// #[category(Fast)]
/// struct PacketId(u32);
///
/// // No attribute: DefaultCategory
/// #[derive(Classify)]
/// struct Blob(Vec<u8>);
/// ```
#[proc_macro_derive(Classify, attributes(category))]
pub fn derive_classify(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_classify(input).into()
}
