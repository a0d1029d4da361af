//! String-domain checks: substrings, blanks, and pattern matching.
//!
//! Pattern predicates lean on the same two engines as parameter matching in
//! test harnesses: `regex` for expressions, `glob` for shell-style
//! patterns. An unparseable pattern is a usage error, surfaced through the
//! descriptor like any other failure.

use std::fmt;

use glob::Pattern;
use regex::Regex;

use crate::descriptor::var;
use crate::expect::{Expectation, Subject};

/// Text predicates for any node wrapping something string-like.
pub trait StringAssert: Subject {
    fn contains(self, part: &str) -> Self;
    fn does_not_contain(self, part: &str) -> Self;
    fn starts_with(self, prefix: &str) -> Self;
    fn ends_with(self, suffix: &str) -> Self;

    /// Empty or whitespace only.
    fn is_blank(self) -> Self;
    fn is_not_blank(self) -> Self;

    /// The text matches the regex `pattern` somewhere.
    fn matches(self, pattern: &str) -> Self;
    fn does_not_match(self, pattern: &str) -> Self;

    /// The whole text matches the glob `pattern` (`*.txt`, `**/config.*`).
    fn matches_glob(self, pattern: &str) -> Self;

    /// Pivot onto the text's length in bytes.
    fn as_length(&self) -> Expectation<usize>;
}

impl<S> StringAssert for S
where
    S: Subject,
    S::Actual: AsRef<str> + fmt::Debug,
{
    fn contains(self, part: &str) -> Self {
        if self.actual().as_ref().contains(part) {
            self
        } else {
            let vars = [var("actual", self.actual()), var("expected part", part)];
            self.fail_with("must contain the expected text", vars)
        }
    }

    fn does_not_contain(self, part: &str) -> Self {
        if self.actual().as_ref().contains(part) {
            let vars = [var("actual", self.actual()), var("unexpected part", part)];
            self.fail_with("must not contain the given text", vars)
        } else {
            self
        }
    }

    fn starts_with(self, prefix: &str) -> Self {
        if self.actual().as_ref().starts_with(prefix) {
            self
        } else {
            let vars = [var("actual", self.actual()), var("expected prefix", prefix)];
            self.fail_with("must start with the expected text", vars)
        }
    }

    fn ends_with(self, suffix: &str) -> Self {
        if self.actual().as_ref().ends_with(suffix) {
            self
        } else {
            let vars = [var("actual", self.actual()), var("expected suffix", suffix)];
            self.fail_with("must end with the expected text", vars)
        }
    }

    fn is_blank(self) -> Self {
        if self.actual().as_ref().trim().is_empty() {
            self
        } else {
            let vars = [var("actual", self.actual())];
            self.fail_with("must be blank", vars)
        }
    }

    fn is_not_blank(self) -> Self {
        if self.actual().as_ref().trim().is_empty() {
            let vars = [var("actual", self.actual())];
            self.fail_with("must not be blank", vars)
        } else {
            self
        }
    }

    fn matches(self, pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => {
                if re.is_match(self.actual().as_ref()) {
                    self
                } else {
                    let vars = [var("actual", self.actual()), var("expected pattern", pattern)];
                    self.fail_with("must match the expected pattern", vars)
                }
            }
            Err(parse_error) => self
                .descriptor()
                .fail_usage(format!("invalid regex '{pattern}': {parse_error}")),
        }
    }

    fn does_not_match(self, pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => {
                if re.is_match(self.actual().as_ref()) {
                    let vars = [var("actual", self.actual()), var("unexpected pattern", pattern)];
                    self.fail_with("must not match the given pattern", vars)
                } else {
                    self
                }
            }
            Err(parse_error) => self
                .descriptor()
                .fail_usage(format!("invalid regex '{pattern}': {parse_error}")),
        }
    }

    fn matches_glob(self, pattern: &str) -> Self {
        match Pattern::new(pattern) {
            Ok(glob) => {
                if glob.matches(self.actual().as_ref()) {
                    self
                } else {
                    let vars = [var("actual", self.actual()), var("expected pattern", pattern)];
                    self.fail_with("must match the expected glob", vars)
                }
            }
            Err(parse_error) => self
                .descriptor()
                .fail_usage(format!("invalid glob '{pattern}': {parse_error}")),
        }
    }

    fn as_length(&self) -> Expectation<usize> {
        Expectation::derived_from(self, self.actual().as_ref().len(), "length")
    }
}
