//! Request validation errors for the step generator
//!
//! The generator never propagates these. Each one is rendered into the
//! narration of a single terminal snapshot that leaves the array unchanged,
//! so the `Display` text here is what the viewer reads.

use crate::snapshot::OperationKind;

/// Reasons an operation request cannot be animated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Cannot pop from empty array")]
    PopFromEmpty,

    #[error("Invalid slice range: [{start}, {end})")]
    InvalidSliceRange { start: i64, end: i64 },

    #[error("Invalid index: {index}")]
    InvalidIndex { index: i64 },

    #[error("Unknown operation: {0}")]
    UnknownOperation(OperationKind),
}
