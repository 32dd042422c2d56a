//! Macros implementing the raise, forward and wrap steps of the protocol.
//!
//! - [`macro@crate::throw`] - Raises a new failure, traced at the invocation site,
//!   and returns it from the enclosing scope.
//! - [`macro@crate::check`] - Evaluates a nested [`Outcome`](crate::Outcome); on failure
//!   appends the invocation site to it and returns it, otherwise yields the
//!   success value.
//! - [`macro@crate::check_cause`] - Like `check!`, but raises a new failure with the
//!   nested one as its cause.
//! - `assert_*!` - Raise when a predicate does not hold. Operands are evaluated
//!   exactly once, left to right.
//!
//! All of them expand to an early `return`, so they can only be used inside a
//! function or closure returning `Result<_, E>` where `E: From<Box<Failure>>`
//! (in particular, any [`Outcome`](crate::Outcome)).
//!
//! # Examples
//!
//! ```
//! use dare_rail::prelude::*;
//!
//! fn push(stack: &mut Vec<f64>, value: f64) -> Outcome {
//!     assert_lt!(stack.len(), 10, "The stack is too full!", 3000);
//!     stack.push(value);
//!     Ok(())
//! }
//!
//! fn number(stack: &mut Vec<f64>, value: f64) -> Outcome {
//!     check_cause!(push(stack, value), "Number insertion failure", 1000);
//!     Ok(())
//! }
//!
//! let mut stack = vec![0.0; 10];
//! let failure = number(&mut stack, 1.0).unwrap_err();
//! assert_eq!(failure.message(), "Number insertion failure");
//! assert_eq!(failure.root_cause().message(), "The stack is too full!");
//! ```

/// Raises a failure with a message and a class code.
///
/// The failure is traced at the invocation site and returned from the
/// enclosing function or closure.
///
/// # Examples
///
/// ```
/// use dare_rail::prelude::*;
///
/// fn answer(value: i32) -> Outcome {
///     if value != 42 {
///         throw!("Something is wrong", 42);
///     }
///     Ok(())
/// }
///
/// assert!(answer(42).is_ok());
/// assert_eq!(answer(7).unwrap_err().code(), 42);
/// ```
#[macro_export]
macro_rules! throw {
    ($message:expr, $code:expr $(,)?) => {
        return ::core::result::Result::Err(::core::convert::From::from(
            $crate::protocol::raised(
                $crate::Failure::raise($message, $code),
                $crate::TraceEntry::location(file!(), line!()),
            ),
        ))
    };
}

/// Forwards the failure of a nested operation.
///
/// On success evaluates to the success value. On failure appends the
/// invocation site to the same failure and returns it.
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
/// fn rethrow_directly() -> Outcome {
///     check!(throw_directly());
///     Ok(())
/// }
///
/// let failure = rethrow_directly().unwrap_err();
/// assert_eq!(failure.message(), "Thrown directly");
/// assert_eq!(failure.trace_len(), 2);
/// ```
#[macro_export]
macro_rules! check {
    ($expr:expr $(,)?) => {
        match $expr {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(failure) => {
                return ::core::result::Result::Err(::core::convert::From::from(
                    $crate::protocol::forwarded(
                        failure,
                        $crate::TraceEntry::location(file!(), line!()),
                    ),
                ));
            },
        }
    };
}

/// Wraps the failure of a nested operation in a new failure.
///
/// The nested failure becomes the cause, keeping its own trace. The new
/// failure is traced at the invocation site and returned.
#[macro_export]
macro_rules! check_cause {
    ($expr:expr, $message:expr, $code:expr $(,)?) => {
        match $expr {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(failure) => {
                return ::core::result::Result::Err(::core::convert::From::from(
                    $crate::protocol::wrapped(
                        failure,
                        $message,
                        $code,
                        $crate::TraceEntry::location(file!(), line!()),
                    ),
                ));
            },
        }
    };
}

/// Raises unless the condition is `true`.
#[macro_export]
macro_rules! assert_true {
    ($cond:expr, $message:expr, $code:expr $(,)?) => {
        if !$cond {
            $crate::throw!($message, $code);
        }
    };
}

/// Raises unless the condition is `false`.
#[macro_export]
macro_rules! assert_false {
    ($cond:expr, $message:expr, $code:expr $(,)?) => {
        if $cond {
            $crate::throw!($message, $code);
        }
    };
}

/// Raises unless the `Option` is `None`.
#[macro_export]
macro_rules! assert_null {
    ($option:expr, $message:expr, $code:expr $(,)?) => {
        if ::core::option::Option::is_some(&$option) {
            $crate::throw!($message, $code);
        }
    };
}

/// Raises unless the `Option` is `Some`.
///
/// # Examples
///
/// ```
/// use dare_rail::prelude::*;
///
/// fn first_word(text: &str) -> Outcome<&str> {
///     let word = text.split_whitespace().next();
///     assert_not_null!(word, "Syntax error!", 2000);
///     Ok(word.unwrap_or_default())
/// }
///
/// assert_eq!(first_word("sqrt 2").ok(), Some("sqrt"));
/// assert!(first_word("   ").is_err());
/// ```
#[macro_export]
macro_rules! assert_not_null {
    ($option:expr, $message:expr, $code:expr $(,)?) => {
        if ::core::option::Option::is_none(&$option) {
            $crate::throw!($message, $code);
        }
    };
}

/// Raises unless `left == right`.
#[macro_export]
macro_rules! assert_equal {
    ($left:expr, $right:expr, $message:expr, $code:expr $(,)?) => {
        $crate::__assert_cmp!(==, $left, $right, $message, $code)
    };
}

/// Raises unless `left != right`.
#[macro_export]
macro_rules! assert_not_equal {
    ($left:expr, $right:expr, $message:expr, $code:expr $(,)?) => {
        $crate::__assert_cmp!(!=, $left, $right, $message, $code)
    };
}

/// Raises unless `left < right`.
#[macro_export]
macro_rules! assert_lt {
    ($left:expr, $right:expr, $message:expr, $code:expr $(,)?) => {
        $crate::__assert_cmp!(<, $left, $right, $message, $code)
    };
}

/// Raises unless `left > right`.
#[macro_export]
macro_rules! assert_gt {
    ($left:expr, $right:expr, $message:expr, $code:expr $(,)?) => {
        $crate::__assert_cmp!(>, $left, $right, $message, $code)
    };
}

/// Raises unless `left <= right`.
#[macro_export]
macro_rules! assert_le {
    ($left:expr, $right:expr, $message:expr, $code:expr $(,)?) => {
        $crate::__assert_cmp!(<=, $left, $right, $message, $code)
    };
}

/// Raises unless `left >= right`.
#[macro_export]
macro_rules! assert_ge {
    ($left:expr, $right:expr, $message:expr, $code:expr $(,)?) => {
        $crate::__assert_cmp!(>=, $left, $right, $message, $code)
    };
}

/// Raises unless both operands hold the same text.
#[macro_export]
macro_rules! assert_str_equal {
    ($left:expr, $right:expr, $message:expr, $code:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if ::core::convert::AsRef::<str>::as_ref(left)
                    != ::core::convert::AsRef::<str>::as_ref(right)
                {
                    $crate::throw!($message, $code);
                }
            },
        }
    };
}

/// Raises when both operands hold the same text.
#[macro_export]
macro_rules! assert_str_not_equal {
    ($left:expr, $right:expr, $message:expr, $code:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if ::core::convert::AsRef::<str>::as_ref(left)
                    == ::core::convert::AsRef::<str>::as_ref(right)
                {
                    $crate::throw!($message, $code);
                }
            },
        }
    };
}

/// Internal macro for the binary comparison assertions
#[macro_export]
#[doc(hidden)]
macro_rules! __assert_cmp {
    ($op:tt, $left:expr, $right:expr, $message:expr, $code:expr) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left $op *right) {
                    $crate::throw!($message, $code);
                }
            },
        }
    };
}
