//! Demo of the fluent chaining API, conversions, and failure capture.

use affirm::{
    capture, expect, ContainerAssert, EqualityAssert, HolderAssert, MapAssert, OrderedAssert,
    SequenceAssert, SizeAssert, StringAssert,
};
use std::collections::BTreeMap;

fn main() {
    // Example 1: one node threaded through a chain of checks
    println!("=== Chaining Example ===");
    expect(vec![1, 2, 3, 4, 5])
        .has_size(5)
        .contains(3)
        .does_not_contain(9)
        .starts_with(&[1, 2]);
    println!("collection chain: PASS");

    // Example 2: pivoting onto derived values
    println!("\n=== Conversion Example ===");
    expect(vec!["alpha", "beta", "gamma"])
        .as_first_element()
        .as_length()
        .is_equal_to(5);

    let config = BTreeMap::from([("limit", 10), ("offset", 2)]);
    expect(&config).as_value_of("limit").is_between(1, 100);
    println!("conversion chains: PASS");

    // Example 3: holders never unwrap on absence
    println!("\n=== Holder Example ===");
    expect(Some("value")).is_present().as_value().contains("val");
    expect(None::<i32>).does_not_have_value(5);
    println!("holder chain: PASS");

    // Example 4: capturing a failure instead of unwinding
    println!("\n=== Capture Example ===");
    let failure = capture(|| {
        expect(7)
            .described_as("retry count must stay within limits")
            .is_between(1, 5);
    });
    match failure {
        Ok(()) => println!("unexpectedly passed"),
        Err(error) => println!("captured failure: {}", error.message()),
    }
}
