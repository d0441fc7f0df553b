//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <<() as SelectBool<C>>::Out as Bool>::If<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn value<B: Bool>() -> bool {
        B::VALUE
    }

    #[test]
    fn test_truth_table() {
        assert!(value::<<Present as Bool>::And<Present>>());
        assert!(!value::<<Present as Bool>::And<Absent>>());
        assert!(value::<<Absent as Bool>::Or<Present>>());
        assert!(!value::<<Absent as Bool>::Or<Absent>>());
        assert!(value::<<Absent as Bool>::Not>());
        assert!(!value::<<Present as Bool>::Not>());
    }

    #[test]
    fn test_if_selects_type() {
        let picked: If<true, u8, &str> = 7u8;
        let other: If<false, u8, &str> = "else";
        assert_eq!(picked, 7);
        assert_eq!(other, "else");
    }
}
