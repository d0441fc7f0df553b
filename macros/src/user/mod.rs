//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `select!` | function macro | Autoref-ranked candidate selection |
//! | `#[derive(Classify)]` | on struct/enum | Register a type in a category |

mod classify;
mod select;

pub use classify::expand_derive_classify;
pub use select::{expand_select, SelectInput};
