//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use dare_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`throw!`], [`check!`], [`check_cause!`] and the `assert_*!` family
//! - **Types**: [`Failure`], [`Outcome`], [`TraceEntry`], [`CodeRange`], [`ScopeState`]
//! - **Functions**: [`scope`], [`render`], [`release`]
//! - **Traits**: [`OutcomeExt`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use dare_rail::prelude::*;
//!
//! fn divide(a: f64, b: f64) -> Outcome<f64> {
//!     assert_not_equal!(b, 0.0, "Division by zero!", 1000);
//!     Ok(a / b)
//! }
//!
//! let value = scope(|| divide(1.0, 0.0)).recover(|failure| {
//!     assert_eq!(failure.code(), 1000);
//!     f64::NAN
//! });
//! assert!(value.is_nan());
//! ```

// Macros
pub use crate::{
    assert_equal, assert_false, assert_ge, assert_gt, assert_le, assert_lt, assert_not_equal,
    assert_not_null, assert_null, assert_str_equal, assert_str_not_equal, assert_true, check,
    check_cause, throw,
};

// Core types
pub use crate::protocol::{append_trace, release, scope, ScopeState, Scoped};
pub use crate::types::{render, CodeRange, Failure, Outcome, RenderConfig, TraceEntry};

// Traits
pub use crate::traits::{OutcomeExt, ResultExt};
