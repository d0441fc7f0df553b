//! Applicability predicates.
//!
//! A predicate answers "may this level be used for operand type `T`" with a
//! type-level `Bool`. Nothing is inspected at runtime: the answer is either
//! a fixed type (`Always`, `Never`, `Const<B>`) or a declaration made by the
//! operand type itself (`Has<Cap>` via `Exposes<Cap>`).

use core::marker::PhantomData;

use crate::primitives::{Absent, Bool, Present, SelectBool};

/// Compile-time applicability test for operand type `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be evaluated for `{T}`",
    label = "no applicability answer for `{T}`",
    note = "capability predicates need a declaration: use `expose!` for the operand type"
)]
pub trait Predicate<T: ?Sized> {
    type Out: Bool;
    /// The answer as a constant.
    const HOLDS: bool = <Self::Out as Bool>::VALUE;
}

/// Holds for every type.
pub struct Always;

/// Holds for no type. Disables a level without removing it.
pub struct Never;

/// Fixed answer taken from a const generic.
pub struct Const<const B: bool>;

/// Operand exposes capability `Cap`.
pub struct Has<Cap>(PhantomData<Cap>);

/// Both predicates hold.
pub struct All<A, B>(PhantomData<(A, B)>);

/// Either predicate holds.
pub struct Any<A, B>(PhantomData<(A, B)>);

/// Predicate does not hold.
pub struct Not<P>(PhantomData<P>);

impl<T: ?Sized> Predicate<T> for Always {
    type Out = Present;
}

impl<T: ?Sized> Predicate<T> for Never {
    type Out = Absent;
}

impl<T: ?Sized, const B: bool> Predicate<T> for Const<B>
where
    (): SelectBool<B>,
{
    type Out = <() as SelectBool<B>>::Out;
}

impl<T: ?Sized + Exposes<Cap>, Cap> Predicate<T> for Has<Cap> {
    type Out = <T as Exposes<Cap>>::Out;
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for All<A, B> {
    type Out = <<A as Predicate<T>>::Out as Bool>::And<<B as Predicate<T>>::Out>;
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Any<A, B> {
    type Out = <<A as Predicate<T>>::Out as Bool>::Or<<B as Predicate<T>>::Out>;
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    type Out = <<P as Predicate<T>>::Out as Bool>::Not;
}

// =============================================================================
// Capability Declarations
// =============================================================================

/// Declares whether `Self` exposes capability `Cap`.
///
/// Both answers are explicit: a type that lacks a capability says so with
/// `Out = Absent`. A missing declaration is a compile error rather than a
/// silent "no", so a forgotten registration never demotes a type to a
/// slower level.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare whether it exposes `{Cap}`",
    label = "missing capability declaration for `{Cap}`",
    note = "declare it with `expose!`, writing `!Cap` when the capability is absent"
)]
pub trait Exposes<Cap> {
    type Out: Bool;
}

/// Define a capability marker and its `Has*` predicate alias.
///
/// ```
/// use core::marker::PhantomData;
/// use tola_dispatch::{capability, trial::Has};
///
/// capability! {
///     /// Supports O(1) push to the front.
///     pub FrontPush
/// }
///
/// fn same(_: PhantomData<HasFrontPush>) {}
/// same(PhantomData::<Has<FrontPush>>);
/// ```
#[macro_export]
macro_rules! capability {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        $crate::paste::paste! {
            #[doc = concat!("Predicate: the operand exposes [`", stringify!($name), "`].")]
            $vis type [<Has $name>] = $crate::trial::Has<$name>;
        }
    };
}

/// Declare which capabilities a type exposes.
///
/// Every capability consulted by a ladder needs an answer; prefix a
/// capability with `!` to declare it absent.
///
/// ```
/// use tola_dispatch::{capability, expose, trial::{Has, Predicate}};
///
/// capability!(pub Sorted);
/// capability!(pub Dense);
///
/// struct Ring<T>(Vec<T>);
///
/// expose! {
///     impl<T> for Ring<T> { Dense, !Sorted }
/// }
///
/// assert!(<Has<Dense> as Predicate<Ring<u8>>>::HOLDS);
/// assert!(!<Has<Sorted> as Predicate<Ring<u8>>>::HOLDS);
/// ```
#[macro_export]
macro_rules! expose {
    () => {};
    (impl<$($g:ident),*> for $ty:ty { $($caps:tt)* } $($rest:tt)*) => {
        $crate::__expose_caps!([$($g),*] $ty; $($caps)*);
        $crate::expose!($($rest)*);
    };
    (impl for $ty:ty { $($caps:tt)* } $($rest:tt)*) => {
        $crate::__expose_caps!([] $ty; $($caps)*);
        $crate::expose!($($rest)*);
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __expose_caps {
    ([$($g:ident),*] $ty:ty; ) => {};
    ([$($g:ident),*] $ty:ty; ! $cap:path $(, $($rest:tt)*)?) => {
        impl<$($g),*> $crate::trial::Exposes<$cap> for $ty {
            type Out = $crate::Absent;
        }
        $crate::__expose_caps!([$($g),*] $ty; $($($rest)*)?);
    };
    ([$($g:ident),*] $ty:ty; $cap:path $(, $($rest:tt)*)?) => {
        impl<$($g),*> $crate::trial::Exposes<$cap> for $ty {
            type Out = $crate::Present;
        }
        $crate::__expose_caps!([$($g),*] $ty; $($($rest)*)?);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::capability!(Shiny);
    crate::capability!(Heavy);

    struct Gem;
    crate::expose! {
        impl for Gem { Shiny, !Heavy }
    }

    #[test]
    fn test_fixed_predicates() {
        assert!(<Always as Predicate<str>>::HOLDS);
        assert!(!<Never as Predicate<str>>::HOLDS);
        assert!(<Const<true> as Predicate<u8>>::HOLDS);
        assert!(!<Const<false> as Predicate<u8>>::HOLDS);
    }

    #[test]
    fn test_declared_capabilities() {
        assert!(<HasShiny as Predicate<Gem>>::HOLDS);
        assert!(!<HasHeavy as Predicate<Gem>>::HOLDS);
    }

    #[test]
    fn test_combinators() {
        assert!(<Any<HasShiny, HasHeavy> as Predicate<Gem>>::HOLDS);
        assert!(!<All<HasShiny, HasHeavy> as Predicate<Gem>>::HOLDS);
        assert!(<All<HasShiny, Not<HasHeavy>> as Predicate<Gem>>::HOLDS);
        assert!(!<Not<Always> as Predicate<Gem>>::HOLDS);
    }
}
