//! Structured-value checks over `serde_json::Value`.

use serde_json::Value;

use crate::descriptor::{var, var_text};
use crate::expect::{Expectation, Subject};

/// Anything that exposes a JSON value.
pub trait JsonSource {
    fn json(&self) -> &Value;
}

impl JsonSource for Value {
    fn json(&self) -> &Value {
        self
    }
}

impl<J: JsonSource + ?Sized> JsonSource for &J {
    fn json(&self) -> &Value {
        (**self).json()
    }
}

/// Shape and entry predicates for any node wrapping a JSON value.
pub trait JsonAssert: Subject {
    fn is_object(self) -> Self;
    fn is_array(self) -> Self;
    fn has_key(self, key: &str) -> Self;
    fn does_not_have_key(self, key: &str) -> Self;
    fn has_entry(self, key: &str, expected: Value) -> Self;

    /// Pivot onto the value stored under `key`. A missing key or a
    /// non-object value is an ordinary assertion failure.
    fn as_entry(&self, key: &str) -> Expectation<Value>;
}

impl<S> JsonAssert for S
where
    S: Subject,
    S::Actual: JsonSource,
{
    fn is_object(self) -> Self {
        if self.actual().json().is_object() {
            self
        } else {
            let vars = [var("actual", self.actual().json())];
            self.fail_with("must be a JSON object", vars)
        }
    }

    fn is_array(self) -> Self {
        if self.actual().json().is_array() {
            self
        } else {
            let vars = [var("actual", self.actual().json())];
            self.fail_with("must be a JSON array", vars)
        }
    }

    fn has_key(self, key: &str) -> Self {
        if self.actual().json().get(key).is_some() {
            self
        } else {
            let vars = [var("actual", self.actual().json()), var("expected key", key)];
            self.fail_with("must contain the expected key", vars)
        }
    }

    fn does_not_have_key(self, key: &str) -> Self {
        if self.actual().json().get(key).is_some() {
            let vars = [var("actual", self.actual().json()), var("unexpected key", key)];
            self.fail_with("must not contain the given key", vars)
        } else {
            self
        }
    }

    fn has_entry(self, key: &str, expected: Value) -> Self {
        let held = matches!(self.actual().json().get(key), Some(stored) if *stored == expected);
        if held {
            self
        } else {
            let vars = [
                var("actual", self.actual().json()),
                var("expected key", key),
                var("expected value", &expected),
            ];
            self.fail_with("must contain the expected entry", vars)
        }
    }

    fn as_entry(&self, key: &str) -> Expectation<Value> {
        match self.actual().json().get(key) {
            Some(value) => Expectation::derived_with(
                self.descriptor(),
                value.clone(),
                format!("entry {key:?} of {}", self.actual().json()),
            ),
            None => self.descriptor().fail_with_default(
                "must contain the expected key",
                [
                    var("actual", self.actual().json()),
                    var_text("expected key", key),
                ],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::capture;
    use crate::expect::{expect, EqualityAssert};
    use serde_json::json;

    #[test]
    fn test_shape_checks() {
        expect(json!({"name": "affirm"})).is_object();
        expect(json!([1, 2])).is_array();
    }

    #[test]
    #[should_panic(expected = "must be a JSON object")]
    fn test_array_is_not_an_object() {
        expect(json!([1, 2])).is_object();
    }

    #[test]
    fn test_key_checks() {
        expect(json!({"name": "affirm", "version": 3}))
            .has_key("name")
            .does_not_have_key("license");
    }

    #[test]
    fn test_entries() {
        expect(json!({"version": 3})).has_entry("version", json!(3));

        assert!(capture(|| {
            expect(json!({"version": 3})).has_entry("version", json!(4));
        })
        .is_err());
    }

    #[test]
    fn test_as_entry_pivots_onto_the_value() {
        expect(json!({"name": "affirm"}))
            .as_entry("name")
            .is_equal_to(json!("affirm"));
    }

    #[test]
    fn test_missing_entry_is_an_ordinary_failure() {
        let error = capture(|| {
            expect(json!({})).as_entry("name");
        })
        .unwrap_err();
        assert!(error.message().contains("must contain the expected key"));
    }
}
