//! The failure record: message, class code, optional cause and propagation trace.
//!
//! A [`Failure`] is built once by the raising operation and afterwards only
//! grows its trace. It exclusively owns its cause, so the causes of a failure
//! always form a chain. Releasing a failure (explicitly through
//! [`Failure::release`] or by dropping it) releases the whole chain.

use core::fmt;

use crate::types::alloc_type::{Box, Text};
use crate::types::{CodeRange, TraceEntry, TraceVec};

mod traits;

/// A raised failure.
///
/// # Examples
///
/// ```
/// use dare_rail::Failure;
///
/// let io = Failure::raise("disk not ready", 3001);
/// let failure = Failure::caused_by("could not load settings", 1002, io);
///
/// assert_eq!(failure.code(), 1002);
/// assert_eq!(failure.cause().map(|c| c.message()), Some("disk not ready"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub(crate) message: Text,
    pub(crate) code: i32,
    pub(crate) cause: Option<Box<Failure>>,
    pub(crate) trace: TraceVec,
}

/// Tally of what a [`Failure::release`] call freed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Released {
    /// Failure records freed, the released one included.
    pub records: usize,
    /// Trace entries freed across all of those records.
    pub trace_entries: usize,
}

/// Trace storage could not grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// The requested capacity does not fit in `usize`.
    CapacityOverflow,
    /// The allocator refused a request of `size` bytes.
    AllocationFailed { size: usize },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("trace capacity overflow"),
            Self::AllocationFailed { size } => {
                write!(f, "could not allocate {} bytes for trace storage", size)
            },
        }
    }
}

impl core::error::Error for ConstructionError {}

impl From<smallvec::CollectionAllocErr> for ConstructionError {
    fn from(err: smallvec::CollectionAllocErr) -> Self {
        match err {
            smallvec::CollectionAllocErr::CapacityOverflow => Self::CapacityOverflow,
            smallvec::CollectionAllocErr::AllocErr { layout } => {
                Self::AllocationFailed { size: layout.size() }
            },
        }
    }
}

impl Failure {
    /// Raises a new failure with an empty trace and no cause.
    #[inline]
    pub fn raise<M: Into<Text>>(message: M, code: i32) -> Box<Self> {
        Box::new(Self { message: message.into(), code, cause: None, trace: TraceVec::new() })
    }

    /// Raises a new failure that takes ownership of `cause`.
    ///
    /// The trace of `cause` stays with `cause`; the new failure starts empty.
    #[inline]
    pub fn caused_by<M: Into<Text>>(message: M, code: i32, cause: Box<Failure>) -> Box<Self> {
        Box::new(Self {
            message: message.into(),
            code,
            cause: Some(cause),
            trace: TraceVec::new(),
        })
    }

    /// Returns the message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the class code.
    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the failure that caused this one, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_deref()
    }

    /// Detaches and returns the cause, leaving this failure without one.
    #[inline]
    pub fn take_cause(&mut self) -> Option<Box<Failure>> {
        self.cause.take()
    }

    /// Consumes the failure and returns its cause; everything else is released.
    #[inline]
    pub fn into_cause(mut self: Box<Self>) -> Option<Box<Failure>> {
        self.cause.take()
    }

    /// Iterates the trace from the oldest (deepest) entry to the newest.
    #[inline]
    pub fn trace(&self) -> core::slice::Iter<'_, TraceEntry> {
        self.trace.iter()
    }

    /// Number of trace entries recorded on this failure alone.
    #[inline]
    pub fn trace_len(&self) -> usize {
        self.trace.len()
    }

    /// Iterates this failure followed by each cause, outermost first.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Returns the innermost failure of the chain (`self` when there is no cause).
    pub fn root_cause(&self) -> &Failure {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Number of records in the chain, this one included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Returns `true` when the code falls inside `range`.
    #[inline]
    pub fn is_in(&self, range: &CodeRange) -> bool {
        range.contains(self.code)
    }

    /// Appends `entry` as the newest trace entry.
    ///
    /// Never fails: if the trace cannot grow the entry is dropped and the
    /// failure is left as it was.
    #[inline]
    pub fn push_trace<E: Into<TraceEntry>>(&mut self, entry: E) {
        let _ = self.try_push_trace(entry);
    }

    /// Appends `entry` as the newest trace entry, reporting allocation failure.
    pub fn try_push_trace<E: Into<TraceEntry>>(
        &mut self,
        entry: E,
    ) -> Result<(), ConstructionError> {
        self.trace.try_reserve(1)?;
        self.trace.push(entry.into());
        Ok(())
    }

    /// Builder form of [`push_trace`](Self::push_trace).
    #[inline]
    pub fn traced<E: Into<TraceEntry>>(mut self: Box<Self>, entry: E) -> Box<Self> {
        self.push_trace(entry);
        self
    }

    /// Appends the caller's source location as the newest trace entry.
    #[track_caller]
    #[inline]
    pub fn traced_here(self: Box<Self>) -> Box<Self> {
        self.traced(TraceEntry::caller())
    }

    /// Releases the failure, its trace and its whole cause chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use dare_rail::Failure;
    ///
    /// let inner = Failure::raise("stack empty", 3000).traced("stack.rs:30");
    /// let outer = Failure::caused_by("pop failed", 1000, inner).traced("engine.rs:12");
    ///
    /// let released = outer.release();
    /// assert_eq!(released.records, 2);
    /// assert_eq!(released.trace_entries, 2);
    /// ```
    pub fn release(self: Box<Self>) -> Released {
        let mut released = Released::default();
        let mut next = Some(self);
        while let Some(mut failure) = next {
            released.records += 1;
            released.trace_entries += failure.trace.len();
            failure.trace.clear();
            next = failure.cause.take();
        }
        released
    }
}

impl Drop for Failure {
    fn drop(&mut self) {
        // Unlink iteratively so a long cause chain cannot exhaust the stack.
        let mut next = self.cause.take();
        while let Some(mut failure) = next {
            next = failure.cause.take();
        }
    }
}

/// Iterator over a failure and its causes, outermost first.
///
/// Created by [`Failure::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Failure>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Failure;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}
