//! Failure kinds and the non-panicking capture helper.
//!
//! A failing predicate panics with its rendered message (see
//! [`crate::descriptor::Descriptor::fail`]). `capture` wraps a panicking
//! chain and hands the failure back as a value instead.

use std::panic;

/// The failure raised when an assertion chain is violated.
///
/// Predicates default to `InvalidArgument`; malformed use of the API itself
/// (an unparseable regex pattern, for example) is reported as `Usage` through
/// the same throwing path. The display form is exactly the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    /// A predicate evaluated to false.
    #[error("{0}")]
    InvalidArgument(String),

    /// The assertion API was used incorrectly.
    #[error("{0}")]
    Usage(String),
}

impl AssertionError {
    /// The rendered failure message.
    pub fn message(&self) -> &str {
        match self {
            AssertionError::InvalidArgument(message) | AssertionError::Usage(message) => message,
        }
    }
}

/// Run a chain and convert a panicking failure into a value.
///
/// This is the inspection surface for callers who want to examine a failure
/// rather than unwind with it.
///
/// # Example
///
/// ```rust
/// use affirm::{capture, expect, OrderedAssert};
///
/// let result = capture(|| {
///     expect(7).is_less_than(5);
/// });
/// assert!(result.is_err());
/// ```
pub fn capture<R>(check: impl FnOnce() -> R) -> Result<R, AssertionError> {
    match panic::catch_unwind(panic::AssertUnwindSafe(check)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let message = if let Some(text) = payload.downcast_ref::<String>() {
                text.clone()
            } else if let Some(text) = payload.downcast_ref::<&str>() {
                (*text).to_string()
            } else {
                "assertion failed".to_string()
            };
            Err(AssertionError::InvalidArgument(message))
        }
    }
}
