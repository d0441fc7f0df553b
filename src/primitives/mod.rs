//! # Layer 0: Primitives
//!
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//!
//! Every applicability predicate evaluates to one of these two types, and
//! `Bool::If` is the single branching point of the whole crate.

pub mod bool;

pub use bool::{Absent, Bool, If, Present, SelectBool};
