//! Capability Classifier Test
//!
//! Registered categories, the default category, user-defined categories and
//! the concrete-site fallback for unregistered types.

use tola_dispatch::classify::{category_of, Category, DefaultCategory, Fast, Routed, Slow, Work};
use tola_dispatch::{classify, perform, Candidate, Classify};

// =============================================================================
// Registered Categories
// =============================================================================

#[test]
fn test_int_routes_fast() {
    assert_eq!(perform(&42i32).to_string(), "fast<i32>");
    assert_eq!(perform(&42u64).category, "fast");
    assert_eq!(perform(&0usize).category, "fast");
}

#[test]
fn test_float_routes_to_default() {
    assert_eq!(perform(&1.5f32).to_string(), "slow<f32>");
    assert_eq!(perform(&1.5f64).category, DefaultCategory::NAME);
}

#[test]
fn test_unsized_and_owned_text() {
    assert_eq!(perform("text").category, "slow");
    assert_eq!(perform(&String::from("text")).category, "slow");
}

#[test]
fn test_references_and_boxes_follow_target() {
    assert_eq!(category_of::<&u16>(), "fast");
    assert_eq!(category_of::<&mut f64>(), "slow");
    assert_eq!(category_of::<Box<i8>>(), "fast");
}

#[test]
fn test_every_call_produces_exactly_one_category() {
    let outcomes = [perform(&1u8), perform(&2i16), perform(&'c'), perform(&true), perform(&())];
    let names: Vec<_> = outcomes.iter().map(|r| r.category).collect();
    assert_eq!(names, ["fast", "fast", "slow", "slow", "slow"]);
}

// =============================================================================
// User Registrations
// =============================================================================

struct Port(#[allow(dead_code)] u16);
struct Document;

classify! {
    Fast => Port;
    Slow => Document;
}

#[derive(Classify)]
#[category(Fast)]
struct Token;

#[derive(Classify)]
struct Record;

#[derive(Classify)]
#[category(Fast)]
struct Wrapper<T>(#[allow(dead_code)] T);

#[test]
fn test_macro_registration() {
    assert_eq!(perform(&Port(80)).category, "fast");
    assert_eq!(perform(&Document).category, "slow");
}

#[test]
fn test_derive_registration() {
    assert_eq!(category_of::<Token>(), "fast");
    assert_eq!(category_of::<Record>(), DefaultCategory::NAME);
    assert_eq!(category_of::<Wrapper<f32>>(), "fast");
}

// =============================================================================
// User Categories
// =============================================================================

#[derive(Default)]
struct Batched;

impl Category for Batched {
    const NAME: &'static str = "batched";
}

impl<T: ?Sized> Candidate<Work, &T> for Batched {
    type Output = String;

    fn invoke(_: Work, _: &T) -> String {
        format!("queued {}", core::any::type_name::<T>())
    }
}

struct Frame;

classify! {
    Batched => Frame;
}

#[test]
fn test_user_category_behavior() {
    assert_eq!(category_of::<Frame>(), "batched");
    assert!(perform(&Frame).starts_with("queued"));
}

// =============================================================================
// Concrete-Site Fallback
// =============================================================================

struct Unregistered;

#[test]
fn test_macro_uses_registry_when_present() {
    assert_eq!(perform!(7i32), perform(&7i32));
    assert_eq!(perform!(Token).category, "fast");
    assert_eq!(perform!(2.0f64).category, "slow");
}

#[test]
fn test_macro_falls_back_to_default_category() {
    assert_eq!(
        perform!(Unregistered),
        Routed::of::<DefaultCategory, Unregistered>()
    );
}

#[test]
fn test_macro_user_category() {
    assert!(perform!(Frame).starts_with("queued"));
}

#[test]
fn test_default_category_is_slow() {
    assert_eq!(DefaultCategory::NAME, Slow::NAME);
    assert_eq!(Fast::NAME, "fast");
}
