//! Positional checks and element conversions for ordered containers.

use std::fmt;

use crate::caps::container::{Enumerable, Sequential};
use crate::caps::ordered::OrderedAssert;
use crate::descriptor::{var, var_text};
use crate::expect::{Expectation, Subject};

/// Prefix/suffix checks and element pivots, restricted to containers with a
/// stable element order.
pub trait SequenceAssert<I>: Subject {
    /// Positional prefix comparison. An empty expected prefix always passes;
    /// a prefix longer than the actual fails on size, not on elements.
    fn starts_with(self, prefix: &[I]) -> Self;

    /// Positional suffix comparison, same edge policy as `starts_with`.
    fn ends_with(self, suffix: &[I]) -> Self;

    /// Pivot onto the first element. An empty actual is an ordinary
    /// assertion failure.
    fn as_first_element(&self) -> Expectation<I>;

    /// Pivot onto the last element.
    fn as_last_element(&self) -> Expectation<I>;

    /// Pivot onto the element at `index`. The index is itself asserted in
    /// range through the ordered capability before the pivot happens.
    fn as_element(&self, index: usize) -> Expectation<I>;
}

impl<S, I> SequenceAssert<I> for S
where
    S: Subject,
    S::Actual: Sequential<Item = I> + fmt::Debug,
    I: PartialEq + Clone + fmt::Debug,
{
    fn starts_with(self, prefix: &[I]) -> Self {
        if prefix.is_empty() {
            return self;
        }
        let elements = self.actual().elements();
        if prefix.len() > elements.len() {
            let vars = [
                var("actual", self.actual()),
                var("actual size", elements.len()),
                var_text("expected", format!("at least {} elements", prefix.len())),
            ];
            self.fail_with("must have enough elements for the expected prefix", vars)
        } else if elements.iter().zip(prefix).all(|(el, e)| *el == e) {
            self
        } else {
            let vars = [var("actual", self.actual()), var("expected prefix", prefix)];
            self.fail_with("must start with the expected elements", vars)
        }
    }

    fn ends_with(self, suffix: &[I]) -> Self {
        if suffix.is_empty() {
            return self;
        }
        let elements = self.actual().elements();
        if suffix.len() > elements.len() {
            let vars = [
                var("actual", self.actual()),
                var("actual size", elements.len()),
                var_text("expected", format!("at least {} elements", suffix.len())),
            ];
            self.fail_with("must have enough elements for the expected suffix", vars)
        } else {
            let tail = &elements[elements.len() - suffix.len()..];
            if tail.iter().zip(suffix).all(|(el, e)| *el == e) {
                self
            } else {
                let vars = [var("actual", self.actual()), var("expected suffix", suffix)];
                self.fail_with("must end with the expected elements", vars)
            }
        }
    }

    fn as_first_element(&self) -> Expectation<I> {
        let elements = self.actual().elements();
        match elements.first() {
            Some(first) => {
                let value = (*first).clone();
                Expectation::derived_from(self, value, "first element")
            }
            None => self
                .descriptor()
                .fail_with_default("must not be empty", [var("actual", self.actual())]),
        }
    }

    fn as_last_element(&self) -> Expectation<I> {
        let elements = self.actual().elements();
        match elements.last() {
            Some(last) => {
                let value = (*last).clone();
                Expectation::derived_from(self, value, "last element")
            }
            None => self
                .descriptor()
                .fail_with_default("must not be empty", [var("actual", self.actual())]),
        }
    }

    fn as_element(&self, index: usize) -> Expectation<I> {
        let elements = self.actual().elements();
        // The index node inherits this chain's ancestry, so an out-of-range
        // failure still names the source container.
        let checked = Expectation::derived_from(self, index, "element index")
            .is_less_than(elements.len());
        let value = elements[checked.into_actual()].clone();
        Expectation::derived_from(self, value, &format!("element {index}"))
    }
}
