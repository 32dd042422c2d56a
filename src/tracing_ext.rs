//! Tracing integration for dare-rail.
//!
//! Uses the active `tracing` span as a propagation point and reports failures
//! through `tracing` events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! dare-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::alloc_type::Box;
use crate::types::{Failure, Outcome, TraceEntry};

/// Converts a span into a trace entry, or `None` when the span is disabled.
fn span_entry(span: &Span) -> Option<TraceEntry> {
    span.metadata()
        .map(|metadata| TraceEntry::from(format!("in span '{}'", metadata.name())))
}

/// Extension trait forwarding failures with span names as trace entries.
pub trait ResultSpanExt<T> {
    /// Forwards a failure using the current span's name as the trace entry.
    ///
    /// Falls back to the caller's source location when no span is active.
    fn forward_in_span(self) -> Outcome<T>;

    /// Forwards a failure using the given span's name as the trace entry.
    fn forward_in(self, span: &Span) -> Outcome<T>;
}

impl<T> ResultSpanExt<T> for Outcome<T> {
    #[track_caller]
    fn forward_in_span(self) -> Outcome<T> {
        let fallback = TraceEntry::caller();
        match self {
            Ok(value) => Ok(value),
            Err(failure) => {
                let entry = span_entry(&Span::current()).unwrap_or(fallback);
                Err(crate::protocol::forwarded(failure, entry))
            },
        }
    }

    #[track_caller]
    fn forward_in(self, span: &Span) -> Outcome<T> {
        let fallback = TraceEntry::caller();
        match self {
            Ok(value) => Ok(value),
            Err(failure) => {
                let entry = span_entry(span).unwrap_or(fallback);
                Err(crate::protocol::forwarded(failure, entry))
            },
        }
    }
}

/// Appends the current span's name to a failure's trace.
///
/// A disabled span leaves the failure unchanged.
pub fn instrument_failure(failure: Box<Failure>) -> Box<Failure> {
    match span_entry(&Span::current()) {
        Some(entry) => failure.traced(entry),
        None => failure,
    }
}

/// Emits one `error` event describing `failure` and its whole chain.
pub fn log_failure(failure: &Failure) {
    tracing::error!(
        target: "dare_rail",
        code = failure.code(),
        description = failure.message(),
        depth = failure.depth(),
        stacktrace = %failure.stacktrace(),
        "unhandled failure"
    );
}
