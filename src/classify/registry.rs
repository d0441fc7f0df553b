//! Type -> category registrations.

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, string::String};

use super::{Classify, DefaultCategory, Fast};

/// Register types in categories.
///
/// Each type may be registered once; a second registration is a
/// conflicting-impl error.
///
/// ```
/// use tola_dispatch::classify;
/// use tola_dispatch::classify::{category_of, Fast, Slow};
///
/// struct Port(u16);
/// struct Payload(Vec<u8>);
///
/// classify! {
///     Fast => Port;
///     Slow => Payload;
/// }
///
/// assert_eq!(category_of::<Port>(), "fast");
/// assert_eq!(category_of::<Payload>(), "slow");
/// ```
///
/// ```compile_fail
/// use tola_dispatch::classify;
/// use tola_dispatch::classify::{Fast, Slow};
///
/// struct Twice;
/// classify! {
///     Fast => Twice;
///     Slow => Twice;
/// }
/// ```
#[macro_export]
macro_rules! classify {
    ($($category:ty => $($ty:ty),+ $(,)?);* $(;)?) => {
        $($(
            impl $crate::classify::Classify for $ty {
                type Category = $category;
            }
        )+)*
    };
}

crate::classify! {
    Fast => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize;
    DefaultCategory => f32, f64, bool, char, (), str;
}

#[cfg(feature = "alloc")]
crate::classify! {
    DefaultCategory => String;
}

// References and boxes classify as their target.

impl<T: ?Sized + Classify> Classify for &T {
    type Category = T::Category;
}

impl<T: ?Sized + Classify> Classify for &mut T {
    type Category = T::Category;
}

#[cfg(feature = "alloc")]
impl<T: ?Sized + Classify> Classify for Box<T> {
    type Category = T::Category;
}
