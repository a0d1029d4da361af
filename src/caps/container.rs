//! Membership and quantifier checks, plus the `Enumerable` seam.
//!
//! Membership and duplicate detection compare elements structurally through
//! `PartialEq`, never by identity.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;

use crate::descriptor::{var, var_text};
use crate::expect::Subject;

/// Anything whose elements can be walked.
///
/// `elements` takes an ordered snapshot for containers with a stable order;
/// hash sets surface their elements in arbitrary order, which is why the
/// positional checks live behind the [`Sequential`] marker instead.
pub trait Enumerable {
    type Item;

    fn elements(&self) -> Vec<&Self::Item>;
}

impl<I> Enumerable for Vec<I> {
    type Item = I;

    fn elements(&self) -> Vec<&I> {
        self.iter().collect()
    }
}

impl<I> Enumerable for [I] {
    type Item = I;

    fn elements(&self) -> Vec<&I> {
        self.iter().collect()
    }
}

impl<I, const N: usize> Enumerable for [I; N] {
    type Item = I;

    fn elements(&self) -> Vec<&I> {
        self.iter().collect()
    }
}

impl<I> Enumerable for VecDeque<I> {
    type Item = I;

    fn elements(&self) -> Vec<&I> {
        self.iter().collect()
    }
}

impl<I> Enumerable for BTreeSet<I> {
    type Item = I;

    fn elements(&self) -> Vec<&I> {
        self.iter().collect()
    }
}

impl<I> Enumerable for HashSet<I> {
    type Item = I;

    fn elements(&self) -> Vec<&I> {
        self.iter().collect()
    }
}

impl<E: Enumerable + ?Sized> Enumerable for &E {
    type Item = E::Item;

    fn elements(&self) -> Vec<&E::Item> {
        (**self).elements()
    }
}

/// Marker for enumerables with a stable element order.
pub trait Sequential: Enumerable {}

impl<I> Sequential for Vec<I> {}
impl<I> Sequential for [I] {}
impl<I, const N: usize> Sequential for [I; N] {}
impl<I> Sequential for VecDeque<I> {}
impl<E: Sequential + ?Sized> Sequential for &E {}

/// Membership and quantifier predicates over an enumerable's elements.
pub trait ContainerAssert<I>: Subject {
    fn contains(self, expected: I) -> Self;
    fn does_not_contain(self, unexpected: I) -> Self;

    /// Passes when some expected element is present. With an empty expected
    /// set the match is vacuous only against an empty actual.
    fn contains_any(self, expected: &[I]) -> Self;

    /// Passes when every expected element is present; an empty expected set
    /// always passes.
    fn contains_all(self, expected: &[I]) -> Self;

    fn does_not_contain_all(self, expected: &[I]) -> Self;

    /// Mutual coverage: every expected element is present and every actual
    /// element is expected. Both sides empty passes.
    fn contains_only(self, expected: &[I]) -> Self;

    fn does_not_have_duplicates(self) -> Self;

    /// Fails on an empty actual: there is nothing to match.
    fn any_match(self, predicate: impl Fn(&I) -> bool) -> Self;

    /// Fails on an empty actual: vacuous truth is rejected.
    fn all_match(self, predicate: impl Fn(&I) -> bool) -> Self;

    /// Passes on an empty actual: nothing violates.
    fn none_match(self, predicate: impl Fn(&I) -> bool) -> Self;
}

impl<S, I> ContainerAssert<I> for S
where
    S: Subject,
    S::Actual: Enumerable<Item = I> + fmt::Debug,
    I: PartialEq + fmt::Debug,
{
    fn contains(self, expected: I) -> Self {
        let found = self.actual().elements().into_iter().any(|el| *el == expected);
        if found {
            self
        } else {
            let vars = [var("actual", self.actual()), var("expected", &expected)];
            self.fail_with("must contain the expected element", vars)
        }
    }

    fn does_not_contain(self, unexpected: I) -> Self {
        let found = self.actual().elements().into_iter().any(|el| *el == unexpected);
        if found {
            let vars = [var("actual", self.actual()), var("unexpected", &unexpected)];
            self.fail_with("must not contain the given element", vars)
        } else {
            self
        }
    }

    fn contains_any(self, expected: &[I]) -> Self {
        let elements = self.actual().elements();
        let matched = if expected.is_empty() {
            elements.is_empty()
        } else {
            expected.iter().any(|e| elements.iter().any(|el| *el == e))
        };
        if matched {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var_text("expected", format!("any of {expected:?}")),
            ];
            self.fail_with("must contain at least one of the expected elements", vars)
        }
    }

    fn contains_all(self, expected: &[I]) -> Self {
        let elements = self.actual().elements();
        let missing: Vec<&I> = expected
            .iter()
            .filter(|e| !elements.iter().any(|el| el == e))
            .collect();
        if missing.is_empty() {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var_text("expected", format!("all of {expected:?}")),
                var("missing", &missing),
            ];
            self.fail_with("must contain every expected element", vars)
        }
    }

    fn does_not_contain_all(self, expected: &[I]) -> Self {
        let elements = self.actual().elements();
        let holds_all = expected.iter().all(|e| elements.iter().any(|el| *el == e));
        if holds_all {
            let vars = [
                var("actual", self.actual()),
                var_text("unexpected", format!("all of {expected:?}")),
            ];
            self.fail_with("must not contain every one of the given elements", vars)
        } else {
            self
        }
    }

    fn contains_only(self, expected: &[I]) -> Self {
        let elements = self.actual().elements();
        let all_expected_present = expected.iter().all(|e| elements.iter().any(|el| *el == e));
        let all_actual_expected = elements.iter().all(|el| expected.iter().any(|e| *el == e));
        if all_expected_present && all_actual_expected {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var_text("expected", format!("only {expected:?}")),
            ];
            self.fail_with("must contain exactly the expected elements", vars)
        }
    }

    fn does_not_have_duplicates(self) -> Self {
        let elements = self.actual().elements();
        let mut duplicate = None;
        for (index, el) in elements.iter().enumerate() {
            if elements[index + 1..].iter().any(|other| other == el) {
                duplicate = Some(format!("{el:?}"));
                break;
            }
        }
        match duplicate {
            None => self,
            Some(value) => {
                let vars = [var("actual", self.actual()), var_text("duplicate", value)];
                self.fail_with("must not contain duplicate elements", vars)
            }
        }
    }

    fn any_match(self, predicate: impl Fn(&I) -> bool) -> Self {
        let elements = self.actual().elements();
        if elements.is_empty() {
            let vars = [var("actual", self.actual())];
            self.fail_with("must have an element matching the condition", vars)
        } else if elements.into_iter().any(|el| predicate(el)) {
            self
        } else {
            let vars = [var("actual", self.actual())];
            self.fail_with("must have an element matching the condition", vars)
        }
    }

    fn all_match(self, predicate: impl Fn(&I) -> bool) -> Self {
        let elements = self.actual().elements();
        if elements.is_empty() {
            let vars = [var("actual", self.actual())];
            self.fail_with("must have elements, all matching the condition", vars)
        } else if elements.into_iter().all(|el| predicate(el)) {
            self
        } else {
            let vars = [var("actual", self.actual())];
            self.fail_with("must have elements, all matching the condition", vars)
        }
    }

    fn none_match(self, predicate: impl Fn(&I) -> bool) -> Self {
        let offending = self
            .actual()
            .elements()
            .into_iter()
            .any(|el| predicate(el));
        if offending {
            let vars = [var("actual", self.actual())];
            self.fail_with("must have no element matching the condition", vars)
        } else {
            self
        }
    }
}

/// The null-element checks, restated over `Option` elements.
pub trait OptionContainerAssert<V>: Subject {
    fn contains_none(self) -> Self;
    fn does_not_contain_none(self) -> Self;

    /// Fails on an empty actual, consistent with `all_match`.
    fn contains_only_none(self) -> Self;
}

impl<S, V> OptionContainerAssert<V> for S
where
    S: Subject,
    S::Actual: Enumerable<Item = Option<V>> + fmt::Debug,
    V: fmt::Debug,
{
    fn contains_none(self) -> Self {
        let found = self.actual().elements().into_iter().any(|el| el.is_none());
        if found {
            self
        } else {
            let vars = [var("actual", self.actual())];
            self.fail_with("must contain an absent element", vars)
        }
    }

    fn does_not_contain_none(self) -> Self {
        let found = self.actual().elements().into_iter().any(|el| el.is_none());
        if found {
            let vars = [var("actual", self.actual())];
            self.fail_with("must not contain an absent element", vars)
        } else {
            self
        }
    }

    fn contains_only_none(self) -> Self {
        let elements = self.actual().elements();
        if !elements.is_empty() && elements.into_iter().all(|el| el.is_none()) {
            self
        } else {
            let vars = [var("actual", self.actual())];
            self.fail_with("must contain only absent elements", vars)
        }
    }
}
