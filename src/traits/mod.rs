//! Extension traits bridging plain `Result`s into the propagation protocol.
//!
//! - [`OutcomeExt`]: forward and wrap steps as methods on an [`Outcome`](crate::Outcome)
//! - [`ResultExt`]: raise a failure from a `Result` carrying a foreign error

pub mod result_ext;

pub use crate::protocol::OutcomeExt;
pub use result_ext::ResultExt;
