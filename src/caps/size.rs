//! Size and emptiness checks, plus the `Sizable` seam they are keyed on.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

use crate::descriptor::{var, var_text};
use crate::expect::{Expectation, Subject};

/// Anything with a countable number of elements.
///
/// Strings count bytes, matching `str::len`.
pub trait Sizable {
    fn size(&self) -> usize;
}

impl Sizable for str {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Sizable for String {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<I> Sizable for [I] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<I, const N: usize> Sizable for [I; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<I> Sizable for Vec<I> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<I> Sizable for VecDeque<I> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Sizable for HashMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Sizable for BTreeMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<I> Sizable for HashSet<I> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<I> Sizable for BTreeSet<I> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<S: Sizable + ?Sized> Sizable for &S {
    fn size(&self) -> usize {
        (**self).size()
    }
}

/// Size predicates for any node wrapping a [`Sizable`] value.
pub trait SizeAssert: Subject {
    fn is_empty(self) -> Self;
    fn is_not_empty(self) -> Self;
    fn has_size(self, expected: usize) -> Self;
    fn does_not_have_size(self, unexpected: usize) -> Self;
    fn has_same_size_as<O: Sizable + ?Sized>(self, other: &O) -> Self;
    fn does_not_have_same_size_as<O: Sizable + ?Sized>(self, other: &O) -> Self;
    fn has_size_greater_than(self, bound: usize) -> Self;
    fn has_size_greater_than_or_equal_to(self, bound: usize) -> Self;
    fn has_size_less_than(self, bound: usize) -> Self;
    fn has_size_less_than_or_equal_to(self, bound: usize) -> Self;

    /// Inclusive size window, derived from the ordered size checks.
    fn has_size_between(self, lo: usize, hi: usize) -> Self {
        self.has_size_greater_than_or_equal_to(lo)
            .has_size_less_than_or_equal_to(hi)
    }

    /// Pivot the chain onto the size itself.
    fn as_size(&self) -> Expectation<usize>;
}

impl<S> SizeAssert for S
where
    S: Subject,
    S::Actual: Sizable + fmt::Debug,
{
    fn is_empty(self) -> Self {
        if self.actual().size() == 0 {
            self
        } else {
            let vars = [var("actual", self.actual())];
            self.fail_with("must be empty", vars)
        }
    }

    fn is_not_empty(self) -> Self {
        if self.actual().size() > 0 {
            self
        } else {
            let vars = [var("actual", self.actual())];
            self.fail_with("must not be empty", vars)
        }
    }

    fn has_size(self, expected: usize) -> Self {
        let size = self.actual().size();
        if size == expected {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var("actual size", size),
                var("expected size", expected),
            ];
            self.fail_with("must have the expected size", vars)
        }
    }

    fn does_not_have_size(self, unexpected: usize) -> Self {
        if self.actual().size() != unexpected {
            self
        } else {
            let vars = [var("actual", self.actual()), var("unexpected size", unexpected)];
            self.fail_with("must not have the given size", vars)
        }
    }

    fn has_same_size_as<O: Sizable + ?Sized>(self, other: &O) -> Self {
        let size = self.actual().size();
        let expected = other.size();
        if size == expected {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var("actual size", size),
                var("expected size", expected),
            ];
            self.fail_with("must have the same size as the other value", vars)
        }
    }

    fn does_not_have_same_size_as<O: Sizable + ?Sized>(self, other: &O) -> Self {
        let size = self.actual().size();
        if size != other.size() {
            self
        } else {
            let vars = [var("actual", self.actual()), var("matching size", size)];
            self.fail_with("must not have the same size as the other value", vars)
        }
    }

    fn has_size_greater_than(self, bound: usize) -> Self {
        let size = self.actual().size();
        if size > bound {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var("actual size", size),
                var_text("expected size", format!("greater than {bound}")),
            ];
            self.fail_with("must have a size greater than the bound", vars)
        }
    }

    fn has_size_greater_than_or_equal_to(self, bound: usize) -> Self {
        let size = self.actual().size();
        if size >= bound {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var("actual size", size),
                var_text("expected size", format!("at least {bound}")),
            ];
            self.fail_with("must have a size of at least the bound", vars)
        }
    }

    fn has_size_less_than(self, bound: usize) -> Self {
        let size = self.actual().size();
        if size < bound {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var("actual size", size),
                var_text("expected size", format!("less than {bound}")),
            ];
            self.fail_with("must have a size less than the bound", vars)
        }
    }

    fn has_size_less_than_or_equal_to(self, bound: usize) -> Self {
        let size = self.actual().size();
        if size <= bound {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var("actual size", size),
                var_text("expected size", format!("at most {bound}")),
            ];
            self.fail_with("must have a size of at most the bound", vars)
        }
    }

    fn as_size(&self) -> Expectation<usize> {
        Expectation::derived_from(self, self.actual().size(), "size")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::ordered::OrderedAssert;
    use crate::error::capture;
    use crate::expect::expect;

    #[test]
    fn test_size_checks_across_container_shapes() {
        expect(vec![1, 2, 3]).has_size(3).is_not_empty();
        expect("abc").has_size(3).does_not_have_size(2);
        expect(Vec::<i32>::new()).is_empty();
        expect([1, 2]).has_size_between(1, 3);
    }

    #[test]
    fn test_same_size_comparisons_across_types() {
        expect(vec![1, 2, 3]).has_same_size_as("abc");
        expect("ab").does_not_have_same_size_as(&[1, 2, 3][..]);
    }

    #[test]
    #[should_panic(expected = "must have the expected size")]
    fn test_wrong_size_fails_with_both_sizes() {
        expect(vec![1, 2]).has_size(3);
    }

    #[test]
    fn test_size_failure_reports_actual_size() {
        let error = capture(|| {
            expect(vec![1, 2]).has_size(3);
        })
        .unwrap_err();
        assert!(error.message().contains("actual size: '2'"));
        assert!(error.message().contains("expected size: '3'"));
    }

    #[test]
    fn test_as_size_pivots_to_the_ordered_capability() {
        expect(vec![1, 2, 3]).as_size().is_between(1, 5);
    }

    #[test]
    fn test_as_size_failure_traces_back_to_the_source() {
        let error = capture(|| {
            expect(vec![1, 2, 3]).as_size().is_greater_than(9);
        })
        .unwrap_err();
        assert!(error.message().contains("derived from: size of [1, 2, 3]"));
    }
}
