//! Candidate implementations and the dispatch site.

use super::ladder::{Resolve, Selected};

/// A value operations are applied to.
///
/// Predicates are evaluated on `Subject`, the type behind the reference,
/// while candidates receive the reference itself.
pub trait Operand {
    type Subject: ?Sized;
}

impl<T: ?Sized> Operand for &T {
    type Subject = T;
}

impl<T: ?Sized> Operand for &mut T {
    type Subject = T;
}

/// One implementation of operation `Op` on operand `O`.
///
/// Candidates are zero-sized markers: they are named by type in ladders and
/// never constructed for dispatch.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot perform `{Op}` on `{O}`",
    label = "selected candidate does not apply",
    note = "the selected level's candidate (often the terminal fallback) has bounds this operand does not meet"
)]
pub trait Candidate<Op, O> {
    type Output;
    fn invoke(op: Op, operand: O) -> Self::Output;
}

/// What dispatching `Op` on `O` through ladder `L` returns.
pub type Output<L, Op, O> = <Selected<L, <O as Operand>::Subject> as Candidate<Op, O>>::Output;

/// Resolve `L` against the operand's subject type and invoke the winner.
///
/// The choice is made during monomorphization; the body compiles to a
/// direct call of the selected candidate.
///
/// ```
/// use tola_dispatch::trial::{dispatch, Always, Candidate, Never};
/// use tola_dispatch::ladder;
///
/// struct Double;
/// struct Keep;
/// struct Scale;
///
/// impl Candidate<Scale, &u32> for Double {
///     type Output = u32;
///     fn invoke(_: Scale, n: &u32) -> u32 { n * 2 }
/// }
/// impl Candidate<Scale, &u32> for Keep {
///     type Output = u32;
///     fn invoke(_: Scale, n: &u32) -> u32 { *n }
/// }
///
/// type Prefer = ladder![Always => Double, _ => Keep];
/// type Skip = ladder![Never => Double, _ => Keep];
///
/// assert_eq!(dispatch::<Prefer, _, _>(Scale, &21u32), 42);
/// assert_eq!(dispatch::<Skip, _, _>(Scale, &21u32), 21);
/// ```
#[inline(always)]
pub fn dispatch<L, Op, O>(op: Op, operand: O) -> Output<L, Op, O>
where
    O: Operand,
    L: Resolve<O::Subject>,
    Selected<L, O::Subject>: Candidate<Op, O>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(
        candidate = core::any::type_name::<Selected<L, O::Subject>>(),
        rank = <L as Resolve<O::Subject>>::RANK,
        levels = <L as Resolve<O::Subject>>::LEVELS,
        "dispatch"
    );

    <Selected<L, O::Subject> as Candidate<Op, O>>::invoke(op, operand)
}

/// Invoke a candidate chosen by value, as returned by `select!`.
#[inline(always)]
pub fn invoke<C, Op, O>(_candidate: C, op: Op, operand: O) -> C::Output
where
    C: Candidate<Op, O>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(candidate = core::any::type_name::<C>(), "invoke");

    C::invoke(op, operand)
}
