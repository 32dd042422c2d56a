//! Failure record, trace entries and rendering.
//!
//! # Examples
//!
//! ```
//! use dare_rail::{Failure, TraceEntry};
//!
//! let failure = Failure::raise("Division by zero!", 1000)
//!     .traced(TraceEntry::location("engine.rs", 97))
//!     .traced(TraceEntry::location("engine.rs", 183));
//!
//! print!("{:#}", failure);
//! // Exception: (1000) Division by zero!
//! //   at engine.rs:97
//! //   at engine.rs:183
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod code_range;
pub mod failure;
pub mod render;
pub mod trace;

pub use code_range::*;
pub use failure::*;
pub use render::*;
pub use trace::*;

use alloc_type::Box;

/// SmallVec-backed storage for the trace of one failure.
///
/// Most failures cross one or two frames before being handled, so two
/// entries are kept inline before spilling to the heap.
pub type TraceVec = SmallVec<[TraceEntry; 2]>;

/// Result of every fallible operation: success, or the failure that ended the scope.
///
/// # Type Parameters
///
/// * `T` - The success value type, `()` when the operation produces nothing
pub type Outcome<T = ()> = Result<T, Box<Failure>>;
