//! Growable dynamic arrays over kind-tagged byte storage.
//!
//! [`DynArray`] is the byte-oriented core: a count/capacity pair, a growth
//! factor, and an owned [`BackingVector`]. Push-back either copies a
//! caller-supplied element or zero-fills the new slot; capacity grows by
//! the growth factor when a push overflows, and shrinks only through an
//! explicit, truncating [`DynArray::resize`].

use std::fmt;

use ballast_core::{checked_size_mul, ArrayError, ElemType};

use crate::vector::BackingVector;

/// A growable, kind-tagged element buffer.
///
/// The control fields and the backing storage are one owned value, so the
/// storage lives exactly as long as the array. Slices returned by the
/// accessors are re-borrowed per call; the raw pointer from
/// [`DynArray::as_ptr`] is invalidated by any operation that can resize
/// and must be re-fetched afterwards.
pub struct DynArray {
    ty: ElemType,
    /// Looked up from `ty` at creation, fixed for the array's lifetime.
    elem_byte_size: usize,
    count: usize,
    /// Allocated element slots. Invariant: `count <= capacity`, and
    /// `capacity * elem_byte_size` never exceeds the signed size limit.
    capacity: usize,
    growth_factor: usize,
    store: BackingVector,
}

impl DynArray {
    /// Class identity reported for every dynamic array.
    ///
    /// Fixed at compile time and never mutated; embedding runtimes use it
    /// to recognise these buffers among their own values.
    pub const CLASS: &'static str = "ballast_dyn_array";

    /// Capacity multiplier applied when a push overflows.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create an array of `ty` elements with room for `initial_capacity`
    /// of them.
    ///
    /// The array starts empty with the default growth factor. Fails with
    /// [`ArrayError::CapacityOverflow`] if the requested byte size is not
    /// representable, or [`ArrayError::AllocationFailed`] if the backing
    /// storage cannot be allocated; nothing is constructed on failure.
    pub fn new(ty: ElemType, initial_capacity: usize) -> Result<Self, ArrayError> {
        Self::with_growth_factor(ty, initial_capacity, Self::DEFAULT_GROWTH_FACTOR)
    }

    /// As [`DynArray::new`] with an explicit growth factor.
    ///
    /// # Panics
    ///
    /// Panics if `growth_factor < 2` — a factor of one could never grow.
    pub fn with_growth_factor(
        ty: ElemType,
        initial_capacity: usize,
        growth_factor: usize,
    ) -> Result<Self, ArrayError> {
        assert!(
            growth_factor > 1,
            "growth factor must be at least 2, got {growth_factor}"
        );
        let elem_byte_size = ty.byte_size();
        let len_bytes = checked_size_mul(initial_capacity, elem_byte_size)?;
        let store = BackingVector::new(ty, len_bytes)?;
        Ok(Self {
            ty,
            elem_byte_size,
            count: 0,
            capacity: initial_capacity,
            growth_factor,
            store,
        })
    }

    /// Create an untyped byte array sized for `initial_capacity` elements
    /// of `elem_byte_size` bytes each.
    ///
    /// The total byte capacity is `initial_capacity * elem_byte_size`,
    /// checked: if the product exceeds [`ballast_core::MAX_BYTE_SIZE`] the
    /// call fails with [`ArrayError::CapacityOverflow`] and nothing is
    /// constructed. The result is an [`ElemType::Byte`] array whose
    /// capacity is that total.
    pub fn with_byte_capacity(
        elem_byte_size: usize,
        initial_capacity: usize,
    ) -> Result<Self, ArrayError> {
        let total = checked_size_mul(initial_capacity, elem_byte_size)?;
        Self::new(ElemType::Byte, total)
    }

    /// Append one element.
    ///
    /// `Some(bytes)` copies the supplied element into the new slot; `None`
    /// zero-fills it. Either way the slot never holds stale bytes. When
    /// the incremented count would exceed the capacity, the capacity is
    /// first multiplied by the growth factor (an empty array grows to one
    /// slot). Capacity never shrinks on push.
    ///
    /// On error the array is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if a supplied slice is not exactly
    /// [`DynArray::elem_byte_size`] bytes long.
    pub fn push(&mut self, elem: Option<&[u8]>) -> Result<(), ArrayError> {
        if let Some(bytes) = elem {
            assert_eq!(
                bytes.len(),
                self.elem_byte_size,
                "element must be exactly {} bytes for a {} array",
                self.elem_byte_size,
                self.ty,
            );
        }

        let count = self.count + 1;
        if count > self.capacity {
            let new_capacity = if self.capacity == 0 {
                1
            } else {
                checked_size_mul(self.capacity, self.growth_factor)?
            };
            self.resize(new_capacity)?;
        }
        self.count = count;

        let start = (count - 1) * self.elem_byte_size;
        let slot = &mut self.store.bytes_mut()[start..start + self.elem_byte_size];
        match elem {
            Some(bytes) => slot.copy_from_slice(bytes),
            None => slot.fill(0),
        }
        Ok(())
    }

    /// Resize to `new_capacity` element slots.
    ///
    /// Growth and shrink share this path. Growth preserves existing
    /// elements byte-for-byte and may relocate the storage. Shrinking
    /// below the current count truncates: the count clamps to the new
    /// capacity and the trailing elements are dropped silently. On error
    /// the count, capacity, and storage are all unchanged.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let new_len = checked_size_mul(new_capacity, self.elem_byte_size)?;
        self.store.resize_bytes(new_len)?;
        self.count = self.count.min(new_capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    /// Element kind held by this array.
    pub fn elem_type(&self) -> ElemType {
        self.ty
    }

    /// Bytes per element.
    pub fn elem_byte_size(&self) -> usize {
        self.elem_byte_size
    }

    /// Number of valid elements.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Allocated element slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Capacity multiplier applied on push overflow.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The process-wide class identity tag ([`DynArray::CLASS`]).
    pub fn class(&self) -> &'static str {
        Self::CLASS
    }

    /// Bytes of the `count` valid elements, in push order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.store.bytes()[..self.count * self.elem_byte_size]
    }

    /// Bytes of the valid elements, mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.count * self.elem_byte_size;
        &mut self.store.bytes_mut()[..len]
    }

    /// Bytes of the element at `index`, or `None` past the count.
    pub fn elem_bytes(&self, index: usize) -> Option<&[u8]> {
        if index >= self.count {
            return None;
        }
        let start = index * self.elem_byte_size;
        Some(&self.store.bytes()[start..start + self.elem_byte_size])
    }

    /// Bytes of the element at `index`, mutably.
    pub fn elem_bytes_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.count {
            return None;
        }
        let start = index * self.elem_byte_size;
        Some(&mut self.store.bytes_mut()[start..start + self.elem_byte_size])
    }

    /// Bytes of the most recently pushed element.
    pub fn back_bytes(&self) -> Option<&[u8]> {
        self.count.checked_sub(1).and_then(|i| self.elem_bytes(i))
    }

    /// Raw view of the backing storage, for address introspection only.
    ///
    /// Valid until the next operation that can resize — re-fetch after any
    /// push or resize instead of caching across the boundary. Never
    /// dereferenced by this crate.
    pub fn as_ptr(&self) -> *const u8 {
        self.store.as_ptr()
    }

    /// The backing storage address formatted as a pointer string.
    pub fn data_address(&self) -> String {
        format!("{:p}", self.store.as_ptr())
    }
}

impl fmt::Debug for DynArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("class", &Self::CLASS)
            .field("ty", &self.ty)
            .field("count", &self.count)
            .field("capacity", &self.capacity)
            .field("growth_factor", &self.growth_factor)
            .finish_non_exhaustive()
    }
}
