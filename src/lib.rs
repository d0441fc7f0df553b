#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: registers alloc containers and `String` in no_std
// - tracing: trace-level events at dispatch sites

//! # tola-dispatch
//!
//! Compile-time ranked dispatch on stable Rust.
//!
//! An operation with several implementations names them in a **priority
//! ladder**, most specific first. Each level is guarded by a predicate over
//! the operand type; the last level is an unconditional fallback. The first
//! level whose predicate holds is the one that runs, and the choice is made
//! during monomorphization.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present / Absent, If, And, Or, Not                             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Rank-Ordered Trial                                      |
//! |  - Predicate, Exposes, Has (capabilities)                         |
//! |  - Try / Otherwise ladders, Resolve, Candidate, dispatch          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Concrete-Site Detection                                 |
//! |  - Probe, implements!, select! (autoref ranking)                  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Instantiations                                          |
//! |  - removal: Native > Partition > Scan                             |
//! |  - classify: type -> category -> behavior                         |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ### Generic vs concrete call sites
//!
//! Inside `fn foo<T>()` the compiler cannot ask whether `T` implements a
//! trait, so ladders read **declared** capabilities (`expose!`, `Classify`).
//! At a call site with a concrete type the macros (`select!`,
//! `remove_matching!`, `perform!`) rank by the trait impls the type really
//! has, through autoref method priority.
//!
//! ## Quick Start
//!
//! ```
//! use tola_dispatch::prelude::*;
//!
//! let mut v = vec![1, 2, 3, 4];
//! remove_matching(&mut v, |n| *n == 2);
//! assert_eq!(v, [1, 3, 4]);
//!
//! assert_eq!(perform(&5i32).to_string(), "fast<i32>");
//! assert_eq!(perform(&5.0f64).to_string(), "slow<f64>");
//! ```

// Allow `::tola_dispatch` to work inside the crate itself
extern crate self as tola_dispatch;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for capability!
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Rank-Ordered Trial
// =============================================================================
pub mod trial;

// =============================================================================
// Layer 2: Concrete-Site Detection
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 3: Instantiations
// =============================================================================
pub mod classify;
pub mod removal;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Absent, Bool, Present};
pub use trial::{
    dispatch, Candidate, Exposes, Has, Operand, Otherwise, Predicate, Resolve, Selected, Try,
};

pub use classify::{category_of, perform, Category, Classify};
pub use removal::{remove_matching, try_remove_matching, RemoveMatching};

// Re-export proc-macros
pub use macros::{select, Classify};

/// Common items for dispatch call sites.
pub mod prelude {
    pub use crate::primitives::bool::{Absent, Bool, Present};
    pub use crate::trial::{
        dispatch, All, Always, Any, Candidate, Exposes, Has, Never, Not, Otherwise, Predicate,
        Resolve, Try,
    };

    pub use crate::classify::{category_of, perform, Category, Classify, DefaultCategory, Fast, Slow};
    pub use crate::removal::{
        remove_matching, remove_matching_with, strategy_name, strategy_rank, try_remove_matching,
        try_remove_matching_with, RemoveMatching,
    };

    pub use macros::{select, Classify};
    // Note: ladder!, expose!, capability!, classify!, perform!, remove_matching!
    // and implements! are #[macro_export] so they're at crate root
}
