//! # Layer 1: Rank-Ordered Trial
//!
//! The dispatch core. An operation with several implementations is written
//! as a ladder of `(predicate, candidate)` levels ordered from most to least
//! specific, closed by a terminal fallback with no predicate:
//!
//! ```text
//! ladder![Has<BulkRemoval>  => Native,      rank 0
//!         Has<RangeErasure> => Partition,   rank 1
//!         _                 => Scan]        rank 2 (always applies)
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! trial/
//! ├── predicate.rs - Predicate, Exposes, Always/Never/Has/All/Any/Not
//! ├── ladder.rs    - Try, Otherwise, Resolve, ladder!
//! └── candidate.rs - Candidate, Operand, dispatch
//! ```
//!
//! ## Guarantees
//!
//! - Exactly one candidate per operand type: `Bool::If` picks one branch per
//!   level, so two levels can never both be selected.
//! - Earlier levels win ties.
//! - A type satisfying none of the guarded levels takes the terminal
//!   fallback without error.
//! - A ladder whose last level is guarded does not implement `Resolve` and
//!   fails to compile.

pub mod candidate;
pub mod ladder;
pub mod predicate;

pub use candidate::{dispatch, invoke, Candidate, Operand, Output};
pub use ladder::{levels_of, rank_of, Otherwise, Resolve, Selected, Try};
pub use predicate::{All, Always, Any, Const, Exposes, Has, Never, Not, Predicate};
