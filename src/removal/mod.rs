//! # Priority Selector: element removal
//!
//! "Remove every element matching a predicate" with three implementations,
//! selected per container type at compile time:
//!
//! ```text
//! rank 0  Native     container has its own bulk removal      BulkRemove
//! rank 1  Partition  slice access + tail erase (erase-remove) RangeErase
//! rank 2  Scan       erase one element at a time             CursorErase
//! ```
//!
//! All three leave exactly the non-matching elements in their original
//! order and ask the predicate once per element.
//!
//! ## Two entry points
//!
//! - `remove_matching(&mut c, pred)` works in generic code. The container
//!   declares its capabilities with `expose!`.
//! - `remove_matching!(c, pred)` works on concrete types only, and ranks by
//!   the traits the container actually implements.
//!
//! ```
//! use tola_dispatch::removal::{remove_matching, strategy_name};
//!
//! let mut v = vec![1, 2, 3, 4];
//! remove_matching(&mut v, |n| *n == 2);
//! assert_eq!(v, [1, 3, 4]);
//! assert_eq!(strategy_name::<Vec<i32>>(), "native");
//! ```

pub mod capability;
pub mod strategy;

#[cfg(feature = "alloc")]
mod std_impls;

use core::convert::Infallible;

pub use capability::{
    BulkRemoval, BulkRemove, CursorErase, HasBulkRemoval, HasRangeErasure, RangeErase,
    RangeErasure, Sequence,
};
pub use strategy::{Native, Partition, Removal, Scan, Strategy};

use crate::trial::{self, Otherwise, Resolve, Selected};

/// Removal strategies in priority order.
pub type RemovalLadder = crate::ladder![
    HasBulkRemoval => Native,
    HasRangeErasure => Partition,
    _ => Scan
];

/// The strategy `remove_matching` uses for `C`.
pub type StrategyFor<C> = Selected<RemovalLadder, C>;

/// Remove every element for which `matches` returns true.
pub fn remove_matching<C, F>(container: &mut C, mut matches: F)
where
    C: Sequence,
    F: FnMut(&C::Item) -> bool,
    RemovalLadder: Resolve<C>,
    StrategyFor<C>: Strategy<C>,
{
    unwrap_infallible(try_remove_matching(container, |item| Ok(matches(item))));
}

/// Remove every element for which `matches` returns `Ok(true)`.
///
/// The first `Err` is returned as is. Removals decided before it are
/// applied; the failing element and all later ones are kept.
pub fn try_remove_matching<C, F, E>(container: &mut C, matches: F) -> Result<(), E>
where
    C: Sequence,
    F: FnMut(&C::Item) -> Result<bool, E>,
    RemovalLadder: Resolve<C>,
    StrategyFor<C>: Strategy<C>,
{
    trial::dispatch::<RemovalLadder, _, _>(Removal::new(matches), container)
}

/// `remove_matching` with the strategy fixed to `S`.
pub fn remove_matching_with<S, C, F>(container: &mut C, mut matches: F)
where
    S: Strategy<C>,
    C: Sequence,
    F: FnMut(&C::Item) -> bool,
{
    unwrap_infallible(try_remove_matching_with::<S, C, _, _>(container, |item| {
        Ok(matches(item))
    }));
}

/// `try_remove_matching` with the strategy fixed to `S`.
pub fn try_remove_matching_with<S, C, F, E>(container: &mut C, matches: F) -> Result<(), E>
where
    S: Strategy<C>,
    C: Sequence,
    F: FnMut(&C::Item) -> Result<bool, E>,
{
    // A single-level ladder: S is the terminal fallback.
    trial::dispatch::<Otherwise<S>, _, _>(Removal::new(matches), container)
}

/// Run a strategy chosen by value (see `remove_matching!`).
#[doc(hidden)]
pub fn run<S, C, F>(strategy: S, container: &mut C, mut matches: F)
where
    S: Strategy<C>,
    C: Sequence,
    F: FnMut(&C::Item) -> bool,
{
    unwrap_infallible(try_run(strategy, container, |item| Ok(matches(item))));
}

/// Run a strategy chosen by value (see `try_remove_matching!`).
#[doc(hidden)]
pub fn try_run<S, C, F, E>(strategy: S, container: &mut C, matches: F) -> Result<(), E>
where
    S: Strategy<C>,
    C: Sequence,
    F: FnMut(&C::Item) -> Result<bool, E>,
{
    trial::invoke(strategy, Removal::new(matches), container)
}

/// Rank of the strategy selected for `C` (0 = `Native`).
pub const fn strategy_rank<C>() -> usize
where
    RemovalLadder: Resolve<C>,
{
    trial::rank_of::<RemovalLadder, C>()
}

/// Name of the strategy selected for `C`.
pub const fn strategy_name<C>() -> &'static str
where
    C: Sequence,
    RemovalLadder: Resolve<C>,
    StrategyFor<C>: Strategy<C>,
{
    <StrategyFor<C> as Strategy<C>>::NAME
}

#[inline(always)]
fn unwrap_infallible(outcome: Result<(), Infallible>) {
    match outcome {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

// =============================================================================
// Method Syntax
// =============================================================================

/// `remove_matching` as a method on every container the ladder resolves for.
///
/// ```
/// use std::collections::VecDeque;
/// use tola_dispatch::removal::RemoveMatching;
///
/// fn drop_zeros<C: RemoveMatching<Item = u8>>(c: &mut C) {
///     c.remove_matching(|b| *b == 0);
/// }
///
/// let mut q: VecDeque<u8> = [0, 7, 0, 9].into();
/// drop_zeros(&mut q);
/// assert_eq!(q, [7, 9]);
/// ```
pub trait RemoveMatching: Sequence {
    fn remove_matching<F>(&mut self, matches: F)
    where
        F: FnMut(&Self::Item) -> bool;

    fn try_remove_matching<F, E>(&mut self, matches: F) -> Result<(), E>
    where
        F: FnMut(&Self::Item) -> Result<bool, E>;
}

impl<C> RemoveMatching for C
where
    C: Sequence,
    RemovalLadder: Resolve<C>,
    StrategyFor<C>: Strategy<C>,
{
    #[inline]
    fn remove_matching<F>(&mut self, matches: F)
    where
        F: FnMut(&C::Item) -> bool,
    {
        remove_matching(self, matches);
    }

    #[inline]
    fn try_remove_matching<F, E>(&mut self, matches: F) -> Result<(), E>
    where
        F: FnMut(&C::Item) -> Result<bool, E>,
    {
        try_remove_matching(self, matches)
    }
}

// =============================================================================
// Concrete-Site Macros
// =============================================================================

/// Remove matching elements, ranking strategies by the traits the concrete
/// container type implements. No `expose!` declaration is needed.
///
/// ```
/// use tola_dispatch::remove_matching;
///
/// let mut v = vec![1, 2, 3, 4];
/// remove_matching!(v, |n| *n == 2);
/// assert_eq!(v, [1, 3, 4]);
/// ```
///
/// A container that supports none of the strategies is rejected:
///
/// ```compile_fail
/// use tola_dispatch::remove_matching;
/// use tola_dispatch::removal::Sequence;
///
/// struct Sealed;
/// impl Sequence for Sealed { type Item = u8; }
///
/// let mut s = Sealed;
/// remove_matching!(s, |_: &u8| true);
/// ```
#[macro_export]
macro_rules! remove_matching {
    ($container:expr, $matches:expr $(,)?) => {{
        let container = &mut $container;
        let strategy = $crate::__removal_strategy!(container);
        $crate::removal::run(strategy, container, $matches)
    }};
}

/// Fallible form of `remove_matching!`, returning the predicate's first error.
#[macro_export]
macro_rules! try_remove_matching {
    ($container:expr, $matches:expr $(,)?) => {{
        let container = &mut $container;
        let strategy = $crate::__removal_strategy!(container);
        $crate::removal::try_run(strategy, container, $matches)
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __removal_strategy {
    ($container:ident) => {
        $crate::select!(&*$container;
            $crate::removal::BulkRemove => $crate::removal::Native,
            $crate::removal::RangeErase => $crate::removal::Partition,
            _ => $crate::removal::Scan
        )
    };
}
