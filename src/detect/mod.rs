//! # Layer 2: Concrete-Site Detection
//!
//! Ranked selection for concrete types, decided by the trait impls the type
//! really has. No `Exposes` declaration is involved.
//!
//! ## Public API
//!
//! ```ignore
//! use tola_dispatch::{implements, select};
//!
//! // Does a concrete type implement a trait?
//! let cheap: bool = implements!(u64: Copy);
//!
//! // Highest ranked candidate whose bound holds
//! let picked = select!(&value; Copy => ByCopy, Clone => ByClone, _ => ByMove);
//! ```
//!
//! The generic counterpart lives in `trial`: ladders resolved through
//! declared capabilities, usable inside `fn foo<T>()`.

pub mod autoref;

pub use autoref::Probe;
