//! Error types for array construction and growth.

use std::error::Error;
use std::fmt;

/// Errors that can occur while creating or resizing a dynamic array.
///
/// Both kinds are raised before any field of the array is mutated, so a
/// caller observes either full success or an unchanged array. Neither is
/// transient: there is no retry path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A size multiplication exceeded the maximum backing size.
    CapacityOverflow {
        /// Element count (or current capacity, for growth) being scaled.
        count: usize,
        /// Per-element byte size, or the growth factor.
        multiplier: usize,
    },
    /// The allocator could not provide the requested backing storage.
    AllocationFailed {
        /// Total bytes requested from the allocator.
        requested_bytes: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { count, multiplier } => {
                write!(
                    f,
                    "capacity overflow: {count} * {multiplier} exceeds the maximum backing size"
                )
            }
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation failed: {requested_bytes} bytes requested")
            }
        }
    }
}

impl Error for ArrayError {}
