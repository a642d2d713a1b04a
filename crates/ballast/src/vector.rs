//! Zero-initialised byte storage for dynamic arrays.
//!
//! A [`BackingVector`] is the memory block that actually stores element
//! bytes: a kind-tagged byte buffer with fallible allocation and a single
//! resize entry point. It knows nothing about element counts or growth
//! policy — that lives in [`crate::array::DynArray`].

use ballast_core::{ArrayError, ElemType};

/// Kind-tagged byte storage with fallible allocation.
///
/// Storage is zero-initialised at creation and whenever it grows. Growing
/// may relocate the buffer, so any raw pointer obtained before a resize is
/// invalid after it.
pub struct BackingVector {
    ty: ElemType,
    bytes: Vec<u8>,
}

impl BackingVector {
    /// Allocate a zero-filled vector of `len_bytes` bytes.
    ///
    /// Fails with [`ArrayError::AllocationFailed`] if the allocator cannot
    /// satisfy the request; nothing is allocated on failure.
    pub fn new(ty: ElemType, len_bytes: usize) -> Result<Self, ArrayError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len_bytes)
            .map_err(|_| ArrayError::AllocationFailed {
                requested_bytes: len_bytes,
            })?;
        bytes.resize(len_bytes, 0);
        Ok(Self { ty, bytes })
    }

    /// Resize to exactly `new_len` bytes.
    ///
    /// Growth zero-fills the new region and may relocate the storage;
    /// shrinking truncates in place. On failure the vector is unchanged.
    pub fn resize_bytes(&mut self, new_len: usize) -> Result<(), ArrayError> {
        if new_len > self.bytes.len() {
            let additional = new_len - self.bytes.len();
            self.bytes
                .try_reserve_exact(additional)
                .map_err(|_| ArrayError::AllocationFailed {
                    requested_bytes: new_len,
                })?;
        }
        self.bytes.resize(new_len, 0);
        Ok(())
    }

    /// Element kind this vector was allocated for.
    pub fn elem_type(&self) -> ElemType {
        self.ty
    }

    /// Current length in bytes.
    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// The stored bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The stored bytes, mutably.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Raw view of the storage, for address introspection only.
    ///
    /// Valid until the next [`BackingVector::resize_bytes`] call. Never
    /// dereferenced by this crate.
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_storage_is_zero_filled() {
        let vec = BackingVector::new(ElemType::Int32, 64).unwrap();
        assert_eq!(vec.len_bytes(), 64);
        assert!(vec.bytes().iter().all(|&b| b == 0));
        assert_eq!(vec.elem_type(), ElemType::Int32);
    }

    #[test]
    fn growth_preserves_prefix_and_zero_fills_tail() {
        let mut vec = BackingVector::new(ElemType::Byte, 4).unwrap();
        vec.bytes_mut().copy_from_slice(&[1, 2, 3, 4]);

        vec.resize_bytes(8).unwrap();
        assert_eq!(vec.len_bytes(), 8);
        assert_eq!(&vec.bytes()[..4], &[1, 2, 3, 4]);
        assert_eq!(&vec.bytes()[4..], &[0, 0, 0, 0]);
    }

    #[test]
    fn shrink_truncates_in_place() {
        let mut vec = BackingVector::new(ElemType::Byte, 4).unwrap();
        vec.bytes_mut().copy_from_slice(&[1, 2, 3, 4]);

        vec.resize_bytes(2).unwrap();
        assert_eq!(vec.bytes(), &[1, 2]);
    }

    #[test]
    fn shrink_then_grow_zero_fills_the_regrown_region() {
        let mut vec = BackingVector::new(ElemType::Byte, 4).unwrap();
        vec.bytes_mut().copy_from_slice(&[1, 2, 3, 4]);

        vec.resize_bytes(2).unwrap();
        vec.resize_bytes(4).unwrap();
        assert_eq!(vec.bytes(), &[1, 2, 0, 0]);
    }

    #[test]
    fn impossible_allocation_fails_without_constructing() {
        let result = BackingVector::new(ElemType::Byte, ballast_core::MAX_BYTE_SIZE);
        assert!(matches!(
            result,
            Err(ArrayError::AllocationFailed { .. })
        ));
    }

    #[test]
    fn failed_resize_leaves_contents_unchanged() {
        let mut vec = BackingVector::new(ElemType::Byte, 4).unwrap();
        vec.bytes_mut().copy_from_slice(&[1, 2, 3, 4]);

        let err = vec.resize_bytes(ballast_core::MAX_BYTE_SIZE).unwrap_err();
        assert!(matches!(err, ArrayError::AllocationFailed { .. }));
        assert_eq!(vec.bytes(), &[1, 2, 3, 4]);
    }
}
