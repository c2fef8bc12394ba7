//! `stockroom-sequence` — the growable sequence container behind the catalog.
//!
//! [`DynamicSequence`] owns a fixed-capacity block that is reallocated in
//! fixed-size increments when it fills up. The growth increment is part of
//! the public contract: callers can observe it through
//! [`DynamicSequence::capacity`] and rely on its cost profile.

pub mod error;
pub mod iter;
pub mod sequence;
mod serde_impl;

pub use error::{SequenceError, SequenceResult};
pub use iter::IntoIter;
pub use sequence::{DEFAULT_GROWTH_INCREMENT, DynamicSequence};
