//! Extension trait for raising failures from foreign `Result` types.
//!
//! Operations that call into code outside the protocol (parsers, I/O) get a
//! `Result<T, E>` with some foreign error `E`. [`ResultExt`] turns it into an
//! [`Outcome`], raising at the call site.
//!
//! # Examples
//!
//! ```
//! use dare_rail::prelude::*;
//!
//! fn parse_operand(token: &str) -> Outcome<f64> {
//!     let value = token.parse::<f64>().or_raise_as("Syntax error!", 2000)?;
//!     Ok(value)
//! }
//!
//! let failure = parse_operand("x").unwrap_err();
//! assert_eq!(failure.message(), "Syntax error!");
//! assert_eq!(failure.cause().map(|c| c.message()), Some("invalid float literal"));
//! ```

use core::fmt::Display;

use crate::types::alloc_type::{String, Text};
use crate::types::{Failure, Outcome, TraceEntry};

/// Extension trait for raising failures from any `Result` with a displayable error.
pub trait ResultExt<T, E> {
    /// Raises a failure whose message is the error's `Display` text.
    fn or_raise(self, code: i32) -> Outcome<T>
    where
        E: Display;

    /// Raises a failure with `message`, keeping the error's text as its cause.
    ///
    /// The cause has the same `code` and no trace of its own.
    fn or_raise_as<M: Into<Text>>(self, message: M, code: i32) -> Outcome<T>
    where
        E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    #[inline]
    fn or_raise(self, code: i32) -> Outcome<T>
    where
        E: Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let entry = TraceEntry::caller();
                Err(crate::protocol::raised(Failure::raise(display_text(&err), code), entry))
            },
        }
    }

    #[track_caller]
    #[inline]
    fn or_raise_as<M: Into<Text>>(self, message: M, code: i32) -> Outcome<T>
    where
        E: Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let entry = TraceEntry::caller();
                let cause = Failure::raise(display_text(&err), code);
                Err(crate::protocol::wrapped(cause, message, code, entry))
            },
        }
    }
}

fn display_text<E: Display>(err: &E) -> String {
    use core::fmt::Write;

    let mut text = String::new();
    let _ = write!(text, "{}", err);
    text
}
