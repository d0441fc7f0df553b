//! Priority ladders.
//!
//! A ladder is a type-level list of levels, most specific first:
//!
//! ```text
//! Try<P0, C0, Try<P1, C1, Otherwise<C2>>>
//!      |   |        |   |            |
//!      |   rank 0   |   rank 1       rank 2 (terminal, no predicate)
//!      guard        guard
//! ```
//!
//! Resolution walks the list with `Bool::If`, so exactly one candidate
//! survives for every operand type and an earlier level always wins over a
//! later one whose predicate also holds.

use core::marker::PhantomData;

use crate::primitives::Bool;

use super::predicate::Predicate;

/// One ranked level: candidate `C` guarded by predicate `P`, then `Rest`.
pub struct Try<P, C, Rest>(PhantomData<(P, C, Rest)>);

/// Terminal fallback. Carries no predicate, so it applies to every type.
pub struct Otherwise<C>(PhantomData<C>);

/// Resolve a ladder against operand type `T`.
///
/// Only `Try` and `Otherwise` implement this, so a ladder whose last level
/// is guarded (or that ends in anything else) has no valid instantiation.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a terminated priority ladder for `{T}`",
    label = "this ladder cannot resolve",
    note = "end every ladder with `Otherwise<Fallback>`: the terminal level takes no predicate"
)]
pub trait Resolve<T: ?Sized> {
    /// The candidate bound to the highest level whose predicate holds.
    type Selected;
    /// Index of the selected level, 0 being the most preferred.
    const RANK: usize;
    /// Number of levels, terminal included.
    const LEVELS: usize;
}

impl<T: ?Sized, C> Resolve<T> for Otherwise<C> {
    type Selected = C;
    const RANK: usize = 0;
    const LEVELS: usize = 1;
}

impl<T: ?Sized, P, C, Rest> Resolve<T> for Try<P, C, Rest>
where
    P: Predicate<T>,
    Rest: Resolve<T>,
{
    type Selected = <<P as Predicate<T>>::Out as Bool>::If<C, <Rest as Resolve<T>>::Selected>;
    const RANK: usize = if <<P as Predicate<T>>::Out as Bool>::VALUE {
        0
    } else {
        1 + <Rest as Resolve<T>>::RANK
    };
    const LEVELS: usize = 1 + <Rest as Resolve<T>>::LEVELS;
}

/// The candidate ladder `L` selects for `T`.
pub type Selected<L, T> = <L as Resolve<T>>::Selected;

/// Index of the level ladder `L` selects for `T`.
#[inline(always)]
pub const fn rank_of<L: Resolve<T>, T: ?Sized>() -> usize {
    L::RANK
}

/// Number of levels in ladder `L`.
#[inline(always)]
pub const fn levels_of<L: Resolve<T>, T: ?Sized>() -> usize {
    L::LEVELS
}

/// Build a ladder type from `Predicate => Candidate` arms.
///
/// The last arm must be `_ => Fallback`.
///
/// ```
/// use tola_dispatch::{ladder, trial::{Always, Never, Otherwise, Try, rank_of}};
///
/// struct First;
/// struct Second;
/// struct Last;
///
/// type L = ladder![Never => First, Always => Second, _ => Last];
/// assert_eq!(rank_of::<L, u8>(), 1);
///
/// fn same(_: core::marker::PhantomData<L>) {}
/// same(core::marker::PhantomData::<Try<Never, First, Try<Always, Second, Otherwise<Last>>>>);
/// ```
///
/// A ladder without the unconditional terminal arm is rejected:
///
/// ```compile_fail
/// use tola_dispatch::{ladder, trial::Always};
/// struct Only;
/// type L = ladder![Always => Only];
/// ```
#[macro_export]
macro_rules! ladder {
    (_ => $fallback:ty $(,)?) => {
        $crate::trial::Otherwise<$fallback>
    };
    (_ => $fallback:ty, $($rest:tt)+) => {
        compile_error!("`_` must be the last arm; levels after the terminal fallback are unreachable")
    };
    ($pred:ty => $cand:ty, $($rest:tt)+) => {
        $crate::trial::Try<$pred, $cand, $crate::ladder!($($rest)+)>
    };
    ($pred:ty => $cand:ty $(,)?) => {
        compile_error!("priority ladder must end with an unconditional `_ => Candidate` arm")
    };
}
