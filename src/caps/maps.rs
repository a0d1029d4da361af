//! Key/value checks for maps, plus the `Keyed` seam.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

use crate::descriptor::var;
use crate::expect::{Expectation, Subject};

/// Anything that maps keys to values.
pub trait Keyed {
    type Key;
    type Val;

    fn lookup(&self, key: &Self::Key) -> Option<&Self::Val>;
    fn keys(&self) -> Vec<&Self::Key>;
}

impl<K: Eq + Hash, V> Keyed for HashMap<K, V> {
    type Key = K;
    type Val = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn keys(&self) -> Vec<&K> {
        HashMap::keys(self).collect()
    }
}

impl<K: Ord, V> Keyed for BTreeMap<K, V> {
    type Key = K;
    type Val = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn keys(&self) -> Vec<&K> {
        BTreeMap::keys(self).collect()
    }
}

impl<M: Keyed + ?Sized> Keyed for &M {
    type Key = M::Key;
    type Val = M::Val;

    fn lookup(&self, key: &M::Key) -> Option<&M::Val> {
        (**self).lookup(key)
    }

    fn keys(&self) -> Vec<&M::Key> {
        (**self).keys()
    }
}

/// Entry predicates for any node wrapping a [`Keyed`] value.
pub trait MapAssert<K, V>: Subject {
    fn contains_key(self, key: K) -> Self;
    fn does_not_contain_key(self, key: K) -> Self;

    fn contains_entry(self, key: K, value: V) -> Self
    where
        V: PartialEq;

    /// Pivot onto the value stored under `key`. A missing key is an
    /// ordinary assertion failure.
    fn as_value_of(&self, key: K) -> Expectation<V>
    where
        V: Clone;

    /// Pivot onto the key set.
    fn as_keys(&self) -> Expectation<Vec<K>>
    where
        K: Clone;
}

impl<S, K, V> MapAssert<K, V> for S
where
    S: Subject,
    S::Actual: Keyed<Key = K, Val = V> + fmt::Debug,
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn contains_key(self, key: K) -> Self {
        if self.actual().lookup(&key).is_some() {
            self
        } else {
            let vars = [var("actual", self.actual()), var("expected key", &key)];
            self.fail_with("must contain the expected key", vars)
        }
    }

    fn does_not_contain_key(self, key: K) -> Self {
        if self.actual().lookup(&key).is_some() {
            let vars = [var("actual", self.actual()), var("unexpected key", &key)];
            self.fail_with("must not contain the given key", vars)
        } else {
            self
        }
    }

    fn contains_entry(self, key: K, value: V) -> Self
    where
        V: PartialEq,
    {
        let held = matches!(self.actual().lookup(&key), Some(stored) if *stored == value);
        if held {
            self
        } else {
            let vars = [
                var("actual", self.actual()),
                var("expected key", &key),
                var("expected value", &value),
            ];
            self.fail_with("must contain the expected entry", vars)
        }
    }

    fn as_value_of(&self, key: K) -> Expectation<V>
    where
        V: Clone,
    {
        match self.actual().lookup(&key) {
            Some(value) => {
                let value = value.clone();
                Expectation::derived_from(self, value, &format!("value of {key:?}"))
            }
            None => self.descriptor().fail_with_default(
                "must contain the expected key",
                [var("actual", self.actual()), var("expected key", &key)],
            ),
        }
    }

    fn as_keys(&self) -> Expectation<Vec<K>>
    where
        K: Clone,
    {
        let keys = self.actual().keys().into_iter().cloned().collect();
        Expectation::derived_from(self, keys, "keys")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::container::ContainerAssert;
    use crate::error::capture;
    use crate::expect::{expect, EqualityAssert};
    use std::collections::BTreeMap;

    fn sample() -> BTreeMap<&'static str, i32> {
        BTreeMap::from([("one", 1), ("two", 2)])
    }

    #[test]
    fn test_key_membership() {
        expect(sample()).contains_key("one").does_not_contain_key("nine");
    }

    #[test]
    #[should_panic(expected = "must contain the expected key")]
    fn test_missing_key_fails() {
        expect(sample()).contains_key("nine");
    }

    #[test]
    fn test_entries() {
        expect(sample()).contains_entry("two", 2);

        assert!(capture(|| {
            expect(sample()).contains_entry("two", 9);
        })
        .is_err());
    }

    #[test]
    fn test_as_value_of_pivots_onto_the_stored_value() {
        expect(sample()).as_value_of("one").is_equal_to(1);
    }

    #[test]
    fn test_as_keys_pivots_onto_the_key_set() {
        expect(sample()).as_keys().contains("one").contains("two");
    }

    #[test]
    fn test_missing_key_pivot_is_an_ordinary_failure() {
        let error = capture(|| {
            expect(sample()).as_value_of("nine");
        })
        .unwrap_err();
        assert!(error.message().contains("expected key: '\"nine\"'"));
    }
}
