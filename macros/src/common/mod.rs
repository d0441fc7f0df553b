// Common utilities shared by the user-facing macros
//
// This module contains:
// - attrs: attribute lookup and the runtime crate path

mod attrs;

pub use attrs::*;
