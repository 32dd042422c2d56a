//! Named ranges of class codes.
//!
//! Codes carry no meaning of their own; applications group them by subsystem
//! (`1000..2000` for the engine, `3000..4000` for storage, and so on). A
//! [`CodeRange`] names one such group so a driver can ask which subsystem a
//! failure came from, or whether it belongs to a range it treats as fatal.

use core::fmt::{self, Display};
use core::ops::Range;

/// A half-open range of class codes with a display name.
///
/// # Examples
///
/// ```
/// use dare_rail::{CodeRange, Failure};
///
/// const STORAGE: CodeRange = CodeRange::new("storage", 3000, 4000);
///
/// let failure = Failure::raise("The stack is empty!", 3000);
/// assert!(failure.is_in(&STORAGE));
/// assert!(!STORAGE.contains(4000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeRange {
    name: &'static str,
    start: i32,
    end: i32,
}

impl CodeRange {
    /// Creates the range `start..end`.
    #[inline]
    pub const fn new(name: &'static str, start: i32, end: i32) -> Self {
        Self { name, start, end }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn start(&self) -> i32 {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Returns `true` when `start <= code < end`.
    #[inline]
    pub const fn contains(&self, code: i32) -> bool {
        self.start <= code && code < self.end
    }

    /// Returns the `n`th code of the range, or `None` past its end.
    #[inline]
    pub const fn code(&self, n: i32) -> Option<i32> {
        match self.start.checked_add(n) {
            Some(code) if n >= 0 && code < self.end => Some(code),
            _ => None,
        }
    }
}

impl From<CodeRange> for Range<i32> {
    #[inline]
    fn from(range: CodeRange) -> Self {
        range.start..range.end
    }
}

impl Display for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {})", self.name, self.start, self.end)
    }
}
