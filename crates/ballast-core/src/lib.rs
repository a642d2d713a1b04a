//! Core types for the Ballast dynamic-array workspace.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! element kind tags and their byte widths, the [`Element`] encode/decode
//! seam for typed access, checked size arithmetic, the shared error type,
//! and reference-introspection helpers for embedding runtimes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod elem;
pub mod error;
pub mod introspect;
pub mod size;

// Public re-exports for the primary API surface.
pub use elem::{ElemBytes, ElemType, Element};
pub use error::ArrayError;
pub use introspect::{address, same_reference};
pub use size::{checked_size_mul, MAX_BYTE_SIZE};
