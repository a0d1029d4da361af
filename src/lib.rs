//! # affirm
//!
//! A fluent assertion library: wrap a value, chain checks, and get a
//! descriptive failure the moment one of them does not hold.
//!
//! Checks are grouped into capability contracts: independent traits for
//! ordering, size, membership, position, holders, and more. A value picks
//! up every capability its type qualifies for. Each
//! passing check hands the same node back, so the full concrete API stays
//! available all the way down a chain.
//!
//! ## Quick Start
//!
//! ```rust
//! use affirm::{expect, ContainerAssert, SequenceAssert, SizeAssert};
//!
//! expect(vec![1, 2, 3, 4, 5])
//!     .has_size(5)
//!     .contains(3)
//!     .does_not_contain(9)
//!     .starts_with(&[1, 2]);
//! ```
//!
//! ## Custom failure messages
//!
//! A description set before the failing check replaces the built-in
//! message outright:
//!
//! ```rust,should_panic
//! use affirm::{expect, OrderedAssert};
//!
//! expect(7)
//!     .described_as("retry count must stay within limits")
//!     .is_between(1, 5);
//! ```
//!
//! ## Pivoting a chain
//!
//! `as_*` conversions hand the chain over to a derived value (a size, an
//! element, a held value) while keeping the failure context traceable to
//! the original chain:
//!
//! ```rust
//! use affirm::{expect, EqualityAssert, SequenceAssert};
//!
//! expect(vec![10, 20, 30])
//!     .as_first_element()
//!     .is_equal_to(10);
//! ```
//!
//! ## Inspecting failures
//!
//! Chains panic on failure, like `assert!`. Use [`capture`] to examine a
//! failure as a value instead:
//!
//! ```rust
//! use affirm::{capture, expect, OrderedAssert};
//!
//! let failure = capture(|| {
//!     expect(7).is_less_than(5);
//! });
//! assert!(failure.is_err());
//! ```

pub mod caps;
pub mod descriptor;
pub mod error;
pub mod expect;

// Core types
pub use descriptor::{var, var_text, Descriptor, FailureFactory};
pub use error::{capture, AssertionError};
pub use expect::{expect, EqualityAssert, Expectation, Subject};

// Capability contracts
pub use caps::{
    ContainerAssert, Enumerable, Holder, HolderAssert, Keyed, MapAssert, OptionContainerAssert,
    OrderedAssert, PathAssert, SequenceAssert, Sequential, SignAssert, Sizable, SizeAssert,
    StringAssert,
};

// JSON domain (feature-gated)
#[cfg(feature = "json")]
pub use caps::{JsonAssert, JsonSource};
