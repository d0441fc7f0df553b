//! Autoref-based trait detection machinery.
//!
//! Two patterns, both resolved by the compiler's method/const lookup order:
//!
//! 1. **Inherent Const Fallback** (`implements!`): an inherent const on
//!    `Probe<T>` that exists only when `T: Trait` shadows a trait const that
//!    always exists.
//! 2. **Ranked Autoref** (`select!`): level `i` of an `n`-level ladder is
//!    implemented for `Probe<T>` behind `n - 1 - i` references. Calling the
//!    method on `&...&Probe<T>` (`n` references) peels one reference per
//!    probing step, so the most-referenced impl whose bounds hold wins.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! Inside `fn foo<T>()` the bounds are checked against `foo`'s where-clauses,
//! not against whatever `T` is later instantiated with. Generic code uses
//! ladders and `Exposes` declarations instead.

use core::marker::PhantomData;

/// Zero-sized stand-in for a value of type `T` during detection.
pub struct Probe<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> Probe<T> {
    /// Probe for the type of `value`. The value itself is not retained.
    #[inline(always)]
    pub const fn of(_value: &T) -> Self {
        Probe(PhantomData)
    }

    /// Probe for `T` without a value.
    #[inline(always)]
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

/// Check if a concrete type implements a trait at compile time.
///
/// **Note**: Only works for concrete types.
///
/// # Usage
///
/// ```
/// use tola_dispatch::implements;
///
/// assert!(implements!(String: Clone));
/// assert!(!implements!(String: Copy));
///
/// trait Splice {}
/// impl Splice for Vec<u8> {}
/// assert!(implements!(Vec<u8>: Splice));
/// assert!(!implements!(Vec<u16>: Splice));
/// ```
#[macro_export]
macro_rules! implements {
    ($T:ty : $($bound:tt)+) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<fn() -> *const T>);

        trait __Fallback {
            const VAL: bool = false;
        }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $($bound)+> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_implements_std_traits() {
        assert!(implements!(String: Clone));
        assert!(implements!(i32: Copy));
        assert!(!implements!(String: Copy));
        assert!(implements!(str: core::fmt::Debug));
    }

    #[test]
    fn test_implements_custom_trait() {
        #[allow(dead_code)]
        trait Drain {}
        impl Drain for u8 {}

        assert!(implements!(u8: Drain));
        assert!(!implements!(u16: Drain));
    }

    struct ByCopy;
    struct ByClone;
    struct ByMove;

    trait Named {
        fn name(&self) -> &'static str;
    }
    impl Named for ByCopy {
        fn name(&self) -> &'static str { "copy" }
    }
    impl Named for ByClone {
        fn name(&self) -> &'static str { "clone" }
    }
    impl Named for ByMove {
        fn name(&self) -> &'static str { "move" }
    }

    #[derive(Clone)]
    struct CloneOnly;

    struct Bare;

    #[test]
    fn test_select_ranks_by_reference_depth() {
        let n = 1u8;
        let c = CloneOnly;
        let b = Bare;

        assert_eq!(macros::select!(&n; Copy => ByCopy, Clone => ByClone, _ => ByMove).name(), "copy");
        assert_eq!(macros::select!(&c; Copy => ByCopy, Clone => ByClone, _ => ByMove).name(), "clone");
        assert_eq!(macros::select!(&b; Copy => ByCopy, Clone => ByClone, _ => ByMove).name(), "move");
    }

    #[test]
    fn test_select_combined_bounds() {
        let n = 1u8;
        let c = CloneOnly;

        assert_eq!(macros::select!(&n; Copy + Default => ByCopy, _ => ByMove).name(), "copy");
        assert_eq!(macros::select!(&c; Copy + Default => ByCopy, _ => ByMove).name(), "move");
    }
}
