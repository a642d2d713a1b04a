//! Growable typed buffers with amortized doubling growth.
//!
//! `ballast` provides [`DynArray`], a byte-oriented dynamic array over
//! kind-tagged backing storage, and [`TypedArray`], a statically-typed
//! view for Rust callers. Arrays grow by a configurable factor when a
//! push-back overflows the capacity and shrink only through explicit,
//! truncating [`DynArray::resize`] calls.
//!
//! # Quick start
//!
//! ```rust
//! use ballast::TypedArray;
//!
//! let mut xs = TypedArray::<i32>::new(4)?;
//! for v in [1, 2, 3, 4, 5] {
//!     xs.push(v)?;
//! }
//! assert_eq!(xs.len(), 5);
//! assert_eq!(xs.capacity(), 8);
//! assert_eq!(xs.back(), Some(5));
//!
//! xs.resize(2)?;
//! assert_eq!(xs.iter().collect::<Vec<_>>(), vec![1, 2]);
//! # Ok::<(), ballast::ArrayError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod typed;
pub mod vector;

// Public re-exports for the primary API surface.
pub use array::DynArray;
pub use typed::TypedArray;
pub use vector::BackingVector;

// Re-export the core surface so `ballast` works as a single dependency.
pub use ballast_core::{
    address, checked_size_mul, same_reference, ArrayError, ElemBytes, ElemType, Element,
    MAX_BYTE_SIZE,
};
