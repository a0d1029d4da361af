//! Runtime type checks for type-erased values.
//!
//! Rust erases no types by default, so these checks live where erasure
//! actually happens: `Box<dyn Any>` and `&dyn Any` actuals. The friendly
//! names for common types sit in an immutable process-wide table,
//! initialized once and only ever read afterwards.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::descriptor::var_text;
use crate::expect::{Expectation, Subject};

static TYPE_NAMES: LazyLock<HashMap<TypeId, &'static str>> = LazyLock::new(|| {
    let mut names = HashMap::new();
    names.insert(TypeId::of::<i8>(), "i8");
    names.insert(TypeId::of::<i16>(), "i16");
    names.insert(TypeId::of::<i32>(), "i32");
    names.insert(TypeId::of::<i64>(), "i64");
    names.insert(TypeId::of::<i128>(), "i128");
    names.insert(TypeId::of::<isize>(), "isize");
    names.insert(TypeId::of::<u8>(), "u8");
    names.insert(TypeId::of::<u16>(), "u16");
    names.insert(TypeId::of::<u32>(), "u32");
    names.insert(TypeId::of::<u64>(), "u64");
    names.insert(TypeId::of::<u128>(), "u128");
    names.insert(TypeId::of::<usize>(), "usize");
    names.insert(TypeId::of::<f32>(), "f32");
    names.insert(TypeId::of::<f64>(), "f64");
    names.insert(TypeId::of::<bool>(), "bool");
    names.insert(TypeId::of::<char>(), "char");
    names.insert(TypeId::of::<String>(), "String");
    names.insert(TypeId::of::<&'static str>(), "&str");
    names
});

/// The friendly name of an erased type, for diagnostics.
fn friendly_name(id: TypeId) -> &'static str {
    TYPE_NAMES.get(&id).copied().unwrap_or("opaque value")
}

impl Expectation<Box<dyn Any>> {
    /// Assert that the erased value is a `U`.
    pub fn is_instance_of<U: Any>(self) -> Self {
        if self.actual().as_ref().is::<U>() {
            self
        } else {
            let vars = [
                var_text("actual type", friendly_name(self.actual().as_ref().type_id())),
                var_text("expected type", std::any::type_name::<U>()),
            ];
            self.fail_with("must be an instance of the expected type", vars)
        }
    }

    /// Downcast pivot: a new chain over the value as a `U`.
    ///
    /// A failed downcast is an ordinary assertion failure.
    pub fn as_instance_of<U: Any + Clone>(&self) -> Expectation<U> {
        match self.actual().downcast_ref::<U>() {
            Some(value) => Expectation::derived_with(
                self.descriptor(),
                value.clone(),
                format!("downcast to {}", std::any::type_name::<U>()),
            ),
            None => self.descriptor().fail_with_default(
                "must be an instance of the expected type",
                [
                    var_text("actual type", friendly_name(self.actual().as_ref().type_id())),
                    var_text("expected type", std::any::type_name::<U>()),
                ],
            ),
        }
    }
}

impl<'a> Expectation<&'a dyn Any> {
    /// Assert that the erased value is a `U`.
    pub fn is_instance_of<U: Any>(self) -> Self {
        if (*self.actual()).is::<U>() {
            self
        } else {
            let vars = [
                var_text("actual type", friendly_name((*self.actual()).type_id())),
                var_text("expected type", std::any::type_name::<U>()),
            ];
            self.fail_with("must be an instance of the expected type", vars)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::capture;
    use crate::expect::{expect, EqualityAssert};

    #[test]
    fn test_instance_checks_on_boxed_values() {
        let value: Box<dyn Any> = Box::new(42i32);
        expect(value).is_instance_of::<i32>();
    }

    #[test]
    fn test_instance_checks_on_borrowed_values() {
        let value = 42i32;
        expect(&value as &dyn Any).is_instance_of::<i32>();
    }

    #[test]
    fn test_mismatched_type_names_both_sides() {
        let error = capture(|| {
            let value: Box<dyn Any> = Box::new(42i32);
            expect(value).is_instance_of::<String>();
        })
        .unwrap_err();
        assert!(error.message().contains("actual type: 'i32'"));
        assert!(error.message().contains("String"));
    }

    #[test]
    fn test_downcast_pivot() {
        let value: Box<dyn Any> = Box::new(42i32);
        expect(value).as_instance_of::<i32>().is_equal_to(42);
    }

    #[test]
    fn test_failed_downcast_is_an_ordinary_failure() {
        let error = capture(|| {
            let value: Box<dyn Any> = Box::new("text");
            expect(value).as_instance_of::<i32>();
        })
        .unwrap_err();
        assert!(error.message().contains("must be an instance of the expected type"));
        assert!(error.message().contains("actual type: '&str'"));
    }
}
