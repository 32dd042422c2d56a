//! The propagation protocol.
//!
//! Every fallible operation returns an [`Outcome`]. A *scope* is the body of
//! such an operation and is always in one of two [`ScopeState`]s:
//!
//! - **Running** until a failure is raised or received from a nested call;
//! - **Failed** from then on. The scope returns immediately, so none of its
//!   remaining statements run, and the failure reaches the scope's single
//!   handling section.
//!
//! The three ways to enter the failed state are:
//!
//! | Step    | Macro                        | Method                      |
//! |---------|------------------------------|-----------------------------|
//! | Raise   | [`throw!`](crate::throw)      | [`Failure::traced_here`]     |
//! | Forward | [`check!`](crate::check)      | [`OutcomeExt::forward`]      |
//! | Wrap    | [`check_cause!`](crate::check_cause) | [`OutcomeExt::wrap`] |
//!
//! Each of them appends exactly one trace entry naming the frame it runs in.
//! The handling section is [`Scoped::catch`]: it receives ownership of the
//! failure and either recovers (the failure is released) or hands it back to
//! the caller unchanged.
//!
//! # Examples
//!
//! ```
//! use dare_rail::prelude::*;
//!
//! fn pop(stack: &mut Vec<f64>) -> Outcome<f64> {
//!     assert_gt!(stack.len(), 0, "The stack is empty!", 3000);
//!     Ok(stack.pop().unwrap_or_default())
//! }
//!
//! fn negate(stack: &mut Vec<f64>) -> Outcome {
//!     let top = check!(pop(stack));
//!     stack.push(-top);
//!     Ok(())
//! }
//!
//! let mut stack = Vec::new();
//! let outcome = scope(|| negate(&mut stack)).catch(|failure| {
//!     assert_eq!(failure.message(), "The stack is empty!");
//!     assert_eq!(failure.trace_len(), 2);
//!     Ok(())
//! });
//! assert!(outcome.is_ok());
//! ```

use crate::types::alloc_type::{Box, Text};
use crate::types::{Failure, Outcome, Released, TraceEntry};

/// Whether a scope is still running or has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeState {
    Running,
    Failed,
}

impl ScopeState {
    #[inline]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Protocol operations on an [`Outcome`].
pub trait OutcomeExt<T>: Sized {
    /// State of the scope that produced this outcome.
    fn state(&self) -> ScopeState;

    /// Borrows the failure, if any.
    fn failure(&self) -> Option<&Failure>;

    /// Forward: on failure, appends the caller's location to the same record.
    ///
    /// A successful outcome passes through untouched.
    fn forward(self) -> Outcome<T>;

    /// Forward with an explicit trace entry.
    fn forward_at<E: Into<TraceEntry>>(self, entry: E) -> Outcome<T>;

    /// Wrap: on failure, raises a new record carrying the failure as its cause,
    /// traced at the caller's location.
    fn wrap<M: Into<Text>>(self, message: M, code: i32) -> Outcome<T>;

    /// Wrap with an explicit trace entry.
    fn wrap_at<M, E>(self, message: M, code: i32, entry: E) -> Outcome<T>
    where
        M: Into<Text>,
        E: Into<TraceEntry>;
}

impl<T> OutcomeExt<T> for Outcome<T> {
    #[inline]
    fn state(&self) -> ScopeState {
        match self {
            Ok(_) => ScopeState::Running,
            Err(_) => ScopeState::Failed,
        }
    }

    #[inline]
    fn failure(&self) -> Option<&Failure> {
        self.as_ref().err().map(|failure| &**failure)
    }

    #[track_caller]
    #[inline]
    fn forward(self) -> Outcome<T> {
        match self {
            Ok(value) => Ok(value),
            Err(failure) => Err(forwarded(failure, TraceEntry::caller())),
        }
    }

    #[inline]
    fn forward_at<E: Into<TraceEntry>>(self, entry: E) -> Outcome<T> {
        match self {
            Ok(value) => Ok(value),
            Err(failure) => Err(forwarded(failure, entry.into())),
        }
    }

    #[track_caller]
    #[inline]
    fn wrap<M: Into<Text>>(self, message: M, code: i32) -> Outcome<T> {
        match self {
            Ok(value) => Ok(value),
            Err(failure) => Err(wrapped(failure, message, code, TraceEntry::caller())),
        }
    }

    #[inline]
    fn wrap_at<M, E>(self, message: M, code: i32, entry: E) -> Outcome<T>
    where
        M: Into<Text>,
        E: Into<TraceEntry>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(failure) => Err(wrapped(failure, message, code, entry.into())),
        }
    }
}

/// Runs `body` as a scope and returns it awaiting its handling section.
///
/// # Examples
///
/// ```
/// use dare_rail::prelude::*;
///
/// fn throw_directly() -> Outcome {
///     throw!("Thrown directly", 10);
/// }
///
/// let mut reached_end = false;
/// let outcome = scope(|| {
///     check_cause!(throw_directly(), "Thrown with cause", 30);
///     reached_end = true;
///     Ok(())
/// })
/// .catch(|failure| {
///     assert_eq!(failure.code(), 30);
///     assert_eq!(failure.cause().map(Failure::code), Some(10));
///     Ok(())
/// });
///
/// assert!(outcome.is_ok());
/// assert!(!reached_end);
/// ```
#[inline]
pub fn scope<T, F>(body: F) -> Scoped<T>
where
    F: FnOnce() -> Outcome<T>,
{
    Scoped { outcome: body() }
}

/// A finished scope body waiting for its single handling section.
#[must_use = "a scope must be resolved by `catch`, `recover` or `propagate`"]
#[derive(Debug)]
pub struct Scoped<T> {
    outcome: Outcome<T>,
}

impl<T> Scoped<T> {
    #[inline]
    pub fn state(&self) -> ScopeState {
        self.outcome.state()
    }

    /// The handling section.
    ///
    /// `handler` runs only when the scope failed and receives the failure by
    /// value. Returning `Ok` recovers and releases the failure; returning
    /// `Err(failure)` re-propagates it to the caller.
    pub fn catch<F>(self, handler: F) -> Outcome<T>
    where
        F: FnOnce(Box<Failure>) -> Outcome<T>,
    {
        match self.outcome {
            Ok(value) => Ok(value),
            Err(failure) => {
                #[cfg(feature = "tracing")]
                let (code, depth) = (failure.code(), failure.depth());
                let handled = handler(failure);
                #[cfg(feature = "tracing")]
                if handled.is_ok() {
                    tracing::trace!(target: "dare_rail", code, depth, "failure recovered");
                }
                handled
            },
        }
    }

    /// Handling section that always recovers, turning the failure into a value.
    pub fn recover<F>(self, handler: F) -> T
    where
        F: FnOnce(Box<Failure>) -> T,
    {
        match self.outcome {
            Ok(value) => value,
            Err(failure) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    target: "dare_rail",
                    code = failure.code(),
                    depth = failure.depth(),
                    "failure recovered"
                );
                handler(failure)
            },
        }
    }

    /// Handling section that re-propagates any failure unchanged.
    #[inline]
    pub fn propagate(self) -> Outcome<T> {
        self.outcome
    }
}

/// Appends `entry` to `record`; an absent record stays absent.
///
/// Never raises.
///
/// # Examples
///
/// ```
/// use dare_rail::{append_trace, Failure};
///
/// assert!(append_trace(None, "engine.rs:10").is_none());
///
/// let failure = append_trace(Some(Failure::raise("boom", 1)), "engine.rs:10");
/// assert_eq!(failure.map(|f| f.trace_len()), Some(1));
/// ```
#[inline]
pub fn append_trace<E>(record: Option<Box<Failure>>, entry: E) -> Option<Box<Failure>>
where
    E: Into<TraceEntry>,
{
    record.map(|failure| failure.traced(entry))
}

/// Releases `record` and everything it owns; an absent record is a no-op.
#[inline]
pub fn release(record: Option<Box<Failure>>) -> Released {
    record.map(Failure::release).unwrap_or_default()
}

/// Raise step shared by [`throw!`](crate::throw) and the assertion macros.
#[doc(hidden)]
pub fn raised(failure: Box<Failure>, entry: TraceEntry) -> Box<Failure> {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "dare_rail",
        code = failure.code(),
        description = failure.message(),
        at = entry.as_str(),
        "failure raised"
    );
    failure.traced(entry)
}

/// Forward step shared by [`check!`](crate::check) and [`OutcomeExt::forward`].
#[doc(hidden)]
pub fn forwarded(failure: Box<Failure>, entry: TraceEntry) -> Box<Failure> {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "dare_rail",
        code = failure.code(),
        at = entry.as_str(),
        "failure forwarded"
    );
    failure.traced(entry)
}

/// Wrap step shared by [`check_cause!`](crate::check_cause) and [`OutcomeExt::wrap`].
#[doc(hidden)]
pub fn wrapped<M: Into<Text>>(
    cause: Box<Failure>,
    message: M,
    code: i32,
    entry: TraceEntry,
) -> Box<Failure> {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "dare_rail",
        code,
        cause_code = cause.code(),
        at = entry.as_str(),
        "failure wrapped"
    );
    raised(Failure::caused_by(message, code, cause), entry)
}
