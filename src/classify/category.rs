//! Capability categories and their `Work` behaviors.

use core::fmt;

use crate::trial::Candidate;

/// A capability category label.
///
/// Categories are unit structs; `Default` lets concrete-site routing
/// produce the marker value.
pub trait Category: Default + 'static {
    const NAME: &'static str;
}

/// Types with a fast path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fast;

/// The general path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slow;

/// Category of every type without an explicit registration.
pub type DefaultCategory = Slow;

impl Category for Fast {
    const NAME: &'static str = "fast";
}

impl Category for Slow {
    const NAME: &'static str = "slow";
}

/// The demonstrated operation: report which category handled the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Work;

/// Outcome of `Work`, displayed as `category<type>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routed {
    pub category: &'static str,
    pub subject: &'static str,
}

impl Routed {
    pub fn of<K: Category, T: ?Sized>() -> Self {
        Routed {
            category: K::NAME,
            subject: core::any::type_name::<T>(),
        }
    }
}

impl fmt::Display for Routed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.category, self.subject)
    }
}

impl<T: ?Sized> Candidate<Work, &T> for Fast {
    type Output = Routed;

    #[inline]
    fn invoke(_: Work, _: &T) -> Routed {
        #[cfg(feature = "tracing")]
        tracing::trace!(subject = core::any::type_name::<T>(), "fast path");

        Routed::of::<Fast, T>()
    }
}

impl<T: ?Sized> Candidate<Work, &T> for Slow {
    type Output = Routed;

    #[inline]
    fn invoke(_: Work, _: &T) -> Routed {
        #[cfg(feature = "tracing")]
        tracing::trace!(subject = core::any::type_name::<T>(), "slow path");

        Routed::of::<Slow, T>()
    }
}
