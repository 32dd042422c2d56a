//! Explicit, traced failure propagation.
//!
//! A [`Failure`] carries a message, a class code, an optional cause and the
//! trace of every scope it crossed. Fallible operations return an
//! [`Outcome`]; the [`protocol`] module and the macros raise, forward and wrap
//! failures, appending one trace entry per frame, and [`render`] prints the
//! whole chain.
//!
//! # Examples
//!
//! ## Raise, forward and render
//!
//! ```
//! use dare_rail::prelude::*;
//!
//! fn throw_directly() -> Outcome {
//!     throw!("Thrown directly", 10);
//! }
//!
//! fn wrap_it() -> Outcome {
//!     check_cause!(throw_directly(), "Thrown with cause", 30);
//!     Ok(())
//! }
//!
//! let failure = wrap_it().unwrap_err();
//! let rendered = failure.stacktrace().to_string();
//!
//! let lines: Vec<&str> = rendered.lines().collect();
//! assert_eq!(lines[0], "Exception: (30) Thrown with cause");
//! assert!(lines[1].starts_with("  at "));
//! assert_eq!(lines[2], "Caused by: (10) Thrown directly");
//! assert!(lines[3].starts_with("  at "));
//! ```
//!
//! ## Single handling section per scope
//!
//! ```
//! use dare_rail::prelude::*;
//!
//! fn pop(stack: &mut Vec<f64>) -> Outcome<f64> {
//!     assert_gt!(stack.len(), 0, "The stack is empty!", 3000);
//!     Ok(stack.pop().unwrap_or_default())
//! }
//!
//! let mut stack = vec![2.0];
//! let outcome = scope(|| {
//!     let a = check!(pop(&mut stack));
//!     let b = check!(pop(&mut stack));
//!     Ok(a + b)
//! })
//! .catch(|failure| {
//!     // Handled here: dropping `failure` releases it and its causes.
//!     assert_eq!(failure.code(), 3000);
//!     Ok(0.0)
//! });
//!
//! assert_eq!(outcome.ok(), Some(0.0));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Raise, forward and wrap macros plus the assertion helpers
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Scopes, outcome operations and release
pub mod protocol;
/// Extension traits bridging plain results into the protocol
pub mod traits;
/// Failure record, trace entries and rendering
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use protocol::{append_trace, release, scope, OutcomeExt, ScopeState, Scoped};
pub use traits::ResultExt;
#[cfg(feature = "std")]
pub use types::render::{print_stacktrace, write_stacktrace};
pub use types::{
    render, render_with, Chain, CodeRange, ConstructionError, Failure, Outcome, Released,
    RenderConfig, Stacktrace, StacktraceFormatter, TraceEntry, TraceVec,
};
