//! Trace entries recorded as a failure crosses scope boundaries.
//!
//! A [`TraceEntry`] is one propagation point, conventionally `<file>:<line>`.
//! Entries are stored oldest first: the frame that raised the failure appends
//! the first entry, each forwarding frame appends after it.

use core::fmt::{self, Display};
use core::panic::Location;

use crate::types::alloc_type::{String, Text};

/// One recorded propagation point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceEntry(Text);

impl TraceEntry {
    /// Creates an entry from arbitrary text.
    #[inline]
    pub fn new<S: Into<Text>>(text: S) -> Self {
        Self(text.into())
    }

    /// Creates an entry of the form `<file>:<line>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dare_rail::TraceEntry;
    ///
    /// let entry = TraceEntry::location("src/engine.rs", 42);
    /// assert_eq!(entry.as_str(), "src/engine.rs:42");
    /// ```
    pub fn location(file: &str, line: u32) -> Self {
        use core::fmt::Write;

        let mut text = String::with_capacity(file.len() + 6);
        let _ = write!(text, "{}:{}", file, line);
        Self(Text::Owned(text))
    }

    /// Creates an entry naming the source location of the caller.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Returns the entry text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TraceEntry {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self(Text::Borrowed(text))
    }
}

impl From<String> for TraceEntry {
    #[inline]
    fn from(text: String) -> Self {
        Self(Text::Owned(text))
    }
}

impl From<&Location<'_>> for TraceEntry {
    #[inline]
    fn from(location: &Location<'_>) -> Self {
        Self::location(location.file(), location.line())
    }
}

impl AsRef<str> for TraceEntry {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
