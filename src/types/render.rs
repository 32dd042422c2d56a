//! Stacktrace rendering.
//!
//! The default layout is fixed and compared byte for byte by consumers:
//!
//! ```text
//! Exception: (30) Thrown with cause
//!   at src/main.rs:96
//! Caused by: (10) Thrown directly
//!   at src/main.rs:7
//! ```
//!
//! Trace entries are written oldest first. Rendering never mutates or
//! releases the failure.

use core::fmt::{self, Display, Write};

use crate::types::alloc_type::Text;
use crate::types::{Failure, TraceEntry};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for customizing how a failure chain is written.
pub trait StacktraceFormatter {
    /// Writes the header line of one record; `level` is 0 for the outermost.
    fn write_header(&self, sink: &mut dyn Write, failure: &Failure, level: usize) -> fmt::Result {
        let label = if level == 0 { "Exception" } else { "Caused by" };
        writeln!(sink, "{}: ({}) {}", label, failure.code(), failure.message())
    }

    fn write_entry(&self, sink: &mut dyn Write, entry: &TraceEntry) -> fmt::Result {
        writeln!(sink, "  at {}", entry)
    }

    fn write_chain(&self, sink: &mut dyn Write, failure: &Failure) -> fmt::Result {
        for (level, record) in failure.chain().enumerate() {
            self.write_header(sink, record, level)?;
            for entry in record.trace() {
                self.write_entry(sink, entry)?;
            }
        }
        Ok(())
    }
}

/// Configuration-based stacktrace formatter.
///
/// `RenderConfig::default()` produces the fixed layout shown in the module
/// documentation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub header_label: Text,
    pub cause_label: Text,
    pub trace_prefix: Text,
    /// Separator between records in compact mode.
    pub separator: Text,
    pub show_code: bool,
    pub show_trace: bool,
    /// Render everything on one line, without trace entries.
    pub compact: bool,
    /// Maximum number of causes rendered below the outermost record.
    pub max_depth: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            header_label: Text::Borrowed("Exception"),
            cause_label: Text::Borrowed("Caused by"),
            trace_prefix: Text::Borrowed("  at "),
            separator: Text::Borrowed(" <- "),
            show_code: true,
            show_trace: true,
            compact: false,
            max_depth: None,
        }
    }
}

impl RenderConfig {
    /// One line per chain: `(30) Thrown with cause <- (10) Thrown directly`.
    #[inline]
    pub fn compact() -> Self {
        Self { compact: true, show_trace: false, ..Default::default() }
    }

    /// Headers only.
    #[inline]
    pub fn no_trace() -> Self {
        Self { show_trace: false, ..Default::default() }
    }

    #[inline]
    pub fn no_code() -> Self {
        Self { show_code: false, ..Default::default() }
    }

    fn write_summary(&self, sink: &mut dyn Write, failure: &Failure) -> fmt::Result {
        if self.show_code {
            write!(sink, "({}) {}", failure.code(), failure.message())
        } else {
            sink.write_str(failure.message())
        }
    }
}

impl StacktraceFormatter for RenderConfig {
    fn write_header(&self, sink: &mut dyn Write, failure: &Failure, level: usize) -> fmt::Result {
        let label = if level == 0 { &self.header_label } else { &self.cause_label };
        write!(sink, "{}: ", label)?;
        self.write_summary(sink, failure)?;
        sink.write_char('\n')
    }

    fn write_entry(&self, sink: &mut dyn Write, entry: &TraceEntry) -> fmt::Result {
        writeln!(sink, "{}{}", self.trace_prefix, entry)
    }

    fn write_chain(&self, sink: &mut dyn Write, failure: &Failure) -> fmt::Result {
        let limit = self.max_depth.map_or(usize::MAX, |depth| depth.saturating_add(1));

        for (level, record) in failure.chain().enumerate() {
            if level == limit {
                let remaining = failure.depth() - level;
                return if self.compact {
                    write!(sink, "{}... {} more", self.separator, remaining)
                } else {
                    writeln!(sink, "{}: ... {} more", self.cause_label, remaining)
                };
            }

            if self.compact {
                if level > 0 {
                    sink.write_str(&self.separator)?;
                }
                self.write_summary(sink, record)?;
                continue;
            }

            self.write_header(sink, record, level)?;
            if self.show_trace {
                for entry in record.trace() {
                    self.write_entry(sink, entry)?;
                }
            }
        }
        Ok(())
    }
}

/// Builder for customizing how one failure is displayed.
///
/// Created by [`Failure::stacktrace`].
///
/// # Examples
///
/// ```
/// use dare_rail::Failure;
///
/// let failure = Failure::raise("Thrown directly", 10).traced("calc.rs:7");
///
/// assert_eq!(
///     failure.stacktrace().to_string(),
///     "Exception: (10) Thrown directly\n  at calc.rs:7\n"
/// );
/// assert_eq!(failure.stacktrace().compact().to_string(), "(10) Thrown directly");
/// ```
#[must_use]
pub struct Stacktrace<'a> {
    failure: &'a Failure,
    config: RenderConfig,
}

impl<'a> Stacktrace<'a> {
    pub fn new(failure: &'a Failure) -> Self {
        Self { failure, config: RenderConfig::default() }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    pub fn show_trace(mut self, show: bool) -> Self {
        self.config.show_trace = show;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }

    pub fn compact(mut self) -> Self {
        self.config.compact = true;
        self.config.show_trace = false;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Display for Stacktrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.config.write_chain(f, self.failure)
    }
}

impl Failure {
    /// Returns a displayable, configurable stacktrace of this failure and its causes.
    #[inline]
    pub fn stacktrace(&self) -> Stacktrace<'_> {
        Stacktrace::new(self)
    }
}

/// Renders `record` and its causes to `sink` using the default layout.
///
/// An absent record renders nothing.
///
/// # Examples
///
/// ```
/// use dare_rail::{render, Failure};
///
/// let inner = Failure::raise("Thrown directly", 10).traced("basic.rs:7");
/// let outer = Failure::caused_by("Thrown with cause", 30, inner).traced("basic.rs:96");
///
/// let mut out = String::new();
/// render(&mut out, Some(&outer)).unwrap();
/// assert_eq!(
///     out,
///     "Exception: (30) Thrown with cause\n  at basic.rs:96\n\
///      Caused by: (10) Thrown directly\n  at basic.rs:7\n"
/// );
///
/// let mut empty = String::new();
/// render(&mut empty, None).unwrap();
/// assert!(empty.is_empty());
/// ```
#[inline]
pub fn render<W: Write>(sink: &mut W, record: Option<&Failure>) -> fmt::Result {
    render_with(sink, record, &RenderConfig::default())
}

/// Renders `record` with a custom formatter.
pub fn render_with<W, F>(sink: &mut W, record: Option<&Failure>, formatter: &F) -> fmt::Result
where
    W: Write,
    F: StacktraceFormatter + ?Sized,
{
    match record {
        Some(failure) => formatter.write_chain(sink, failure),
        None => Ok(()),
    }
}

/// Writes the stacktrace of `record` to an I/O stream.
#[cfg(feature = "std")]
pub fn write_stacktrace<W: std::io::Write>(
    writer: &mut W,
    record: Option<&Failure>,
) -> std::io::Result<()> {
    match record {
        Some(failure) => write!(writer, "{:#}", failure),
        None => Ok(()),
    }
}

/// Prints the stacktrace of `failure` to standard output.
#[cfg(feature = "std")]
pub fn print_stacktrace(failure: &Failure) {
    let stdout = std::io::stdout();
    let _ = write_stacktrace(&mut stdout.lock(), Some(failure));
}
