//! Tests for chains that cross capability boundaries.

use super::*;
use crate::error::capture;
use crate::expect::{expect, EqualityAssert};

#[test]
fn test_numbers_carry_sign_order_and_equality() {
    expect(5)
        .is_positive()
        .is_greater_than(1)
        .is_between(1, 10)
        .is_equal_to(5);
}

#[test]
fn test_collections_carry_size_membership_and_position() {
    expect(vec![1, 2, 3, 4, 5])
        .has_size(5)
        .is_not_empty()
        .contains(3)
        .does_not_contain(9)
        .starts_with(&[1, 2])
        .ends_with(&[4, 5])
        .does_not_have_duplicates();
}

#[test]
fn test_strings_carry_size_and_text_checks() {
    expect("hello world")
        .has_size(11)
        .contains("world")
        .matches(r"^hello")
        .is_not_blank();
}

#[test]
fn test_conversion_chains_keep_pivoting() {
    expect(vec!["alpha", "beta"])
        .as_size()
        .is_between(1, 5)
        .is_equal_to(2);

    expect(vec!["alpha", "beta"])
        .as_first_element()
        .as_length()
        .is_equal_to(5);
}

#[test]
fn test_holder_chains_pivot_into_the_value() {
    expect(Some(vec![1, 2, 3]))
        .is_present()
        .as_value()
        .has_size(3)
        .contains(2);
}

#[test]
fn test_map_chains_pivot_into_entries() {
    let map = std::collections::BTreeMap::from([("limit", 10), ("offset", 2)]);
    expect(&map)
        .contains_key("limit")
        .as_value_of("limit")
        .is_positive()
        .is_equal_to(10);
}

#[test]
fn test_an_override_silences_every_default_description() {
    let error = capture(|| {
        expect(vec![1, 2, 3])
            .described_as("inventory must include the flagged item")
            .contains(9);
    })
    .unwrap_err();
    assert_eq!(error.message(), "inventory must include the flagged item");
}

#[test]
fn test_derived_operations_report_the_failing_primitive() {
    let error = capture(|| {
        expect(12).is_between(1, 10);
    })
    .unwrap_err();
    assert!(error.message().contains("must be less than or equal to the bound"));
}

#[cfg(feature = "json")]
#[test]
fn test_json_chains_pivot_into_entries() {
    let payload = serde_json::json!({"items": [1, 2, 3], "total": 3});
    expect(payload)
        .is_object()
        .has_key("items")
        .as_entry("total")
        .is_equal_to(serde_json::json!(3));
}
