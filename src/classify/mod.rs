//! # Capability Classifier
//!
//! Every classified type names exactly one category through `Classify`; the
//! operation is routed to that category's implementation.
//!
//! ```text
//! i32  --Classify-->  Fast  --Candidate<Work, &i32>-->  "fast<i32>"
//! f32  --Classify-->  Slow  --Candidate<Work, &f32>-->  "slow<f32>"
//! ```
//!
//! Registration is open: `classify!`, `#[derive(Classify)]` or a manual
//! impl. Categories are open too: any `Category` with a `Candidate<Work, _>`
//! impl can be the target.
//!
//! ## Defaults
//!
//! Rust has no stable way to give a blanket impl a default that specific
//! impls override, so the two entry points handle unregistered types
//! differently:
//!
//! - `perform(&v)` (generic): `T: Classify` is required. An unregistered
//!   type is a compile error.
//! - `perform!(v)` (concrete types): an unregistered type is routed to
//!   `DefaultCategory`.

mod category;
mod registry;

pub use category::{Category, DefaultCategory, Fast, Routed, Slow, Work};

use crate::detect::Probe;
use crate::trial::{self, Candidate, Otherwise};

/// Maps a type to its capability category.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not registered with the classifier",
    label = "no category for `{Self}`",
    note = "register it with `classify!` or `#[derive(Classify)]`; `perform!` on a concrete value falls back to `DefaultCategory`"
)]
pub trait Classify {
    type Category: Category;
}

/// Route `Work` on `value` to the behavior of its category.
///
/// ```
/// use tola_dispatch::classify::perform;
///
/// assert_eq!(perform(&7i32).to_string(), "fast<i32>");
/// assert_eq!(perform(&7.0f32).to_string(), "slow<f32>");
/// ```
///
/// Unregistered types are rejected on this path:
///
/// ```compile_fail
/// use tola_dispatch::classify::perform;
///
/// struct Unregistered;
/// perform(&Unregistered);
/// ```
#[inline]
pub fn perform<'a, T>(value: &'a T) -> <T::Category as Candidate<Work, &'a T>>::Output
where
    T: ?Sized + Classify,
    T::Category: Candidate<Work, &'a T>,
{
    // Classification is a single-level ladder: the registered category is
    // the terminal and only candidate.
    trial::dispatch::<Otherwise<T::Category>, _, _>(Work, value)
}

/// Name of the category `T` is registered in.
pub const fn category_of<T: ?Sized + Classify>() -> &'static str {
    <T::Category as Category>::NAME
}

/// Invoke `Work` with a category chosen by value (see `perform!`).
#[doc(hidden)]
#[inline]
pub fn perform_as<'a, K, T>(category: K, value: &'a T) -> K::Output
where
    T: ?Sized,
    K: Candidate<Work, &'a T>,
{
    trial::invoke(category, Work, value)
}

// =============================================================================
// Concrete-Site Routing
// =============================================================================

/// Rank 0: the registered category.
#[doc(hidden)]
pub trait ViaRegistry {
    type Category: Category;
    fn __category(&self) -> Self::Category;
}

impl<T: ?Sized + Classify> ViaRegistry for &Probe<T> {
    type Category = T::Category;

    #[inline(always)]
    fn __category(&self) -> T::Category {
        Default::default()
    }
}

/// Rank 1: `DefaultCategory` for everything else.
#[doc(hidden)]
pub trait ViaDefault {
    fn __category(&self) -> DefaultCategory;
}

impl<T: ?Sized> ViaDefault for Probe<T> {
    #[inline(always)]
    fn __category(&self) -> DefaultCategory {
        DefaultCategory::default()
    }
}

/// Classify a concrete value and run `Work` on it.
///
/// Registered types use their registry entry; any other type lands in
/// `DefaultCategory` instead of failing to compile.
///
/// ```
/// use tola_dispatch::perform;
///
/// struct Unregistered;
///
/// assert_eq!(perform!(1u8).category, "fast");
/// assert_eq!(perform!(Unregistered).category, "slow");
/// ```
#[macro_export]
macro_rules! perform {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::classify::{ViaDefault as _, ViaRegistry as _};
        let value = &$value;
        let category = (&&$crate::detect::Probe::of(value)).__category();
        $crate::classify::perform_as(category, value)
    }};
}
