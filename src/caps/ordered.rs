//! Ordered comparisons: the range capability.
//!
//! Primitives compare the wrapped value against a bound through
//! `PartialOrd`; the range and temporal operations are derived purely from
//! those primitives as default methods.

use std::cmp::Ordering;
use std::fmt;

use crate::descriptor::{var, var_text};
use crate::expect::Subject;

/// Comparison predicates for anything `PartialOrd` against the bound type.
///
/// `is_between`/`is_strictly_between` short-circuit: when the lower-bound
/// check fails, the upper bound is never evaluated.
pub trait OrderedAssert<B>: Subject {
    fn is_greater_than(self, bound: B) -> Self;
    fn is_greater_than_or_equal_to(self, bound: B) -> Self;
    fn is_less_than(self, bound: B) -> Self;
    fn is_less_than_or_equal_to(self, bound: B) -> Self;

    /// Inclusive on both ends.
    fn is_between(self, lo: B, hi: B) -> Self {
        self.is_greater_than_or_equal_to(lo).is_less_than_or_equal_to(hi)
    }

    /// Exclusive on both ends.
    fn is_strictly_between(self, lo: B, hi: B) -> Self {
        self.is_greater_than(lo).is_less_than(hi)
    }

    /// Temporal spelling of `is_less_than`.
    fn is_before(self, bound: B) -> Self {
        self.is_less_than(bound)
    }

    /// Temporal spelling of `is_greater_than`.
    fn is_after(self, bound: B) -> Self {
        self.is_greater_than(bound)
    }

    fn is_before_or_equal_to(self, bound: B) -> Self {
        self.is_less_than_or_equal_to(bound)
    }

    fn is_after_or_equal_to(self, bound: B) -> Self {
        self.is_greater_than_or_equal_to(bound)
    }
}

impl<S, B> OrderedAssert<B> for S
where
    S: Subject,
    S::Actual: PartialOrd<B> + fmt::Debug,
    B: fmt::Debug,
{
    fn is_greater_than(self, bound: B) -> Self {
        if matches!(self.actual().partial_cmp(&bound), Some(Ordering::Greater)) {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var_text("expected", format!("greater than {bound:?}")),
            ];
            self.fail_with("must be greater than the bound", vars)
        }
    }

    fn is_greater_than_or_equal_to(self, bound: B) -> Self {
        if matches!(
            self.actual().partial_cmp(&bound),
            Some(Ordering::Greater | Ordering::Equal)
        ) {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var_text("expected", format!("at least {bound:?}")),
            ];
            self.fail_with("must be greater than or equal to the bound", vars)
        }
    }

    fn is_less_than(self, bound: B) -> Self {
        if matches!(self.actual().partial_cmp(&bound), Some(Ordering::Less)) {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var_text("expected", format!("less than {bound:?}")),
            ];
            self.fail_with("must be less than the bound", vars)
        }
    }

    fn is_less_than_or_equal_to(self, bound: B) -> Self {
        if matches!(
            self.actual().partial_cmp(&bound),
            Some(Ordering::Less | Ordering::Equal)
        ) {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var_text("expected", format!("at most {bound:?}")),
            ];
            self.fail_with("must be less than or equal to the bound", vars)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::capture;
    use crate::expect::expect;

    #[test]
    fn test_primitive_comparisons() {
        expect(5)
            .is_greater_than(4)
            .is_greater_than_or_equal_to(5)
            .is_less_than(6)
            .is_less_than_or_equal_to(5);
    }

    #[test]
    #[should_panic(expected = "must be greater than the bound")]
    fn test_greater_than_rejects_equal() {
        expect(5).is_greater_than(5);
    }

    #[test]
    fn test_between_accepts_the_endpoints() {
        expect(1).is_between(1, 5);
        expect(5).is_between(1, 5);
        expect(3).is_between(3, 3);
    }

    #[test]
    #[should_panic(expected = "must be less than the bound")]
    fn test_strictly_between_rejects_the_upper_endpoint() {
        expect(5).is_strictly_between(1, 5);
    }

    #[test]
    fn test_between_short_circuits_on_the_lower_bound() {
        // The lower-bound failure must be the one observed, never the upper.
        let error = capture(|| {
            expect(0).is_between(1, 5);
        })
        .unwrap_err();
        assert!(error.message().contains("greater than or equal"));
        assert!(!error.message().contains("at most"));
    }

    #[test]
    fn test_temporal_spellings() {
        expect("2024-01-01")
            .is_before("2024-06-01")
            .is_before_or_equal_to("2024-01-01");
        expect("2024-06-01").is_after("2024-01-01");
    }

    #[test]
    fn test_incomparable_values_fail() {
        let error = capture(|| {
            expect(f64::NAN).is_greater_than(0.0);
        })
        .unwrap_err();
        assert!(error.message().contains("must be greater than"));
    }
}
