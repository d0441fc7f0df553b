//! Rank-Ordered Trial Test
//!
//! Verifies ladder resolution on declared capabilities: ranks, tie-breaking
//! toward earlier levels, silent fall-through to the terminal level and
//! predicate combinators.

use tola_dispatch::prelude::*;
use tola_dispatch::trial::{invoke, levels_of, rank_of, Const, Selected};
use tola_dispatch::{capability, expose, ladder};

// =============================================================================
// Capabilities and Operands
// =============================================================================

capability!(pub Hashed);
capability!(pub Ordered);
capability!(pub Frozen);

struct Both;
struct OnlyOrdered;
struct Neither;
struct Generic<T>(#[allow(dead_code)] T);

expose! {
    impl for Both { Hashed, Ordered, !Frozen }
    impl for OnlyOrdered { !Hashed, Ordered, Frozen }
    impl for Neither { !Hashed, !Ordered, !Frozen }
    impl<T> for Generic<T> { Hashed, !Ordered, !Frozen }
}

// =============================================================================
// Candidates
// =============================================================================

struct Lookup;

struct ByHash;
struct ByOrder;
struct Linear;

macro_rules! named_candidate {
    ($($cand:ident => $name:literal),* $(,)?) => {
        $(
            impl<T: ?Sized> Candidate<Lookup, &T> for $cand {
                type Output = &'static str;
                fn invoke(_: Lookup, _: &T) -> &'static str {
                    $name
                }
            }
        )*
    };
}

named_candidate! {
    ByHash => "hash",
    ByOrder => "order",
    Linear => "linear",
}

type Search = ladder![
    Has<Hashed> => ByHash,
    Has<Ordered> => ByOrder,
    _ => Linear,
];

fn search<'a, T>(value: &'a T) -> &'static str
where
    Search: Resolve<T>,
    Selected<Search, T>: Candidate<Lookup, &'a T, Output = &'static str>,
{
    dispatch::<Search, _, _>(Lookup, value)
}

// =============================================================================
// Ranking
// =============================================================================

#[test]
fn test_first_satisfied_level_wins() {
    assert_eq!(search(&Both), "hash");
    assert_eq!(rank_of::<Search, Both>(), 0);
}

#[test]
fn test_falls_through_to_next_level() {
    assert_eq!(search(&OnlyOrdered), "order");
    assert_eq!(rank_of::<Search, OnlyOrdered>(), 1);
}

#[test]
fn test_terminal_level_is_unconditional() {
    assert_eq!(search(&Neither), "linear");
    assert_eq!(rank_of::<Search, Neither>(), 2);
}

#[test]
fn test_generic_declaration_applies_to_every_instantiation() {
    assert_eq!(search(&Generic(1u8)), "hash");
    assert_eq!(search(&Generic("x")), "hash");
}

#[test]
fn test_levels_counts_every_level() {
    assert_eq!(levels_of::<Search, Both>(), 3);
    assert_eq!(levels_of::<ladder![_ => Linear], Both>(), 1);
}

#[test]
fn test_fallback_only_ladder() {
    assert_eq!(dispatch::<Otherwise<ByOrder>, _, _>(Lookup, &Both), "order");
    assert_eq!(rank_of::<Otherwise<ByOrder>, Both>(), 0);
}

// =============================================================================
// Combinators
// =============================================================================

type Combined = ladder![
    All<Has<Hashed>, Not<Has<Frozen>>> => ByHash,
    Any<Has<Frozen>, Never> => ByOrder,
    _ => Linear,
];

#[test]
fn test_combinators() {
    assert_eq!(dispatch::<Combined, _, _>(Lookup, &Both), "hash");
    assert_eq!(dispatch::<Combined, _, _>(Lookup, &OnlyOrdered), "order");
    assert_eq!(dispatch::<Combined, _, _>(Lookup, &Neither), "linear");
}

#[test]
fn test_constant_predicates() {
    assert_eq!(rank_of::<ladder![Always => ByHash, _ => Linear], Neither>(), 0);
    assert_eq!(rank_of::<ladder![Never => ByHash, _ => Linear], Both>(), 1);
    assert_eq!(rank_of::<ladder![Const<true> => ByHash, _ => Linear], Neither>(), 0);
    assert_eq!(rank_of::<ladder![Const<false> => ByHash, _ => Linear], Both>(), 1);
}

#[test]
fn test_predicate_holds() {
    assert!(<Has<Hashed> as Predicate<Both>>::HOLDS);
    assert!(!<Has<Hashed> as Predicate<OnlyOrdered>>::HOLDS);
    assert!(<Not<Has<Hashed>> as Predicate<Neither>>::HOLDS);
}

// =============================================================================
// Value-Chosen Candidates
// =============================================================================

#[test]
fn test_invoke_by_value() {
    assert_eq!(invoke(ByOrder, Lookup, &Neither), "order");
}

#[test]
fn test_selected_alias_names_the_candidate() {
    fn same<A, B>() -> bool
    where
        A: 'static,
        B: 'static,
    {
        core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
    }

    assert!(same::<Selected<Search, Both>, ByHash>());
    assert!(same::<Selected<Search, OnlyOrdered>, ByOrder>());
    assert!(same::<Selected<Search, Neither>, Linear>());
}
