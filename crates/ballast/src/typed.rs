//! Statically-typed views over the byte-oriented core.

use std::marker::PhantomData;

use ballast_core::{ArrayError, Element};

use crate::array::DynArray;

/// A dynamic array of a statically known element type.
///
/// Thin wrapper owning a [`DynArray`] tagged with `T::ELEM_TYPE`. Push and
/// read go through the [`Element`] encoding, so the byte layout matches
/// what the raw API would produce for the same values.
pub struct TypedArray<T: Element> {
    raw: DynArray,
    _elem: PhantomData<T>,
}

impl<T: Element> TypedArray<T> {
    /// Create an empty array with room for `initial_capacity` elements.
    pub fn new(initial_capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            raw: DynArray::new(T::ELEM_TYPE, initial_capacity)?,
            _elem: PhantomData,
        })
    }

    /// As [`TypedArray::new`] with an explicit growth factor.
    ///
    /// # Panics
    ///
    /// Panics if `growth_factor < 2`.
    pub fn with_growth_factor(
        initial_capacity: usize,
        growth_factor: usize,
    ) -> Result<Self, ArrayError> {
        Ok(Self {
            raw: DynArray::with_growth_factor(T::ELEM_TYPE, initial_capacity, growth_factor)?,
            _elem: PhantomData,
        })
    }

    /// Append a value.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        self.raw.push(Some(&value.to_bytes()[..]))
    }

    /// Append a zero-filled slot.
    pub fn push_zeroed(&mut self) -> Result<(), ArrayError> {
        self.raw.push(None)
    }

    /// Decode the element at `index`, or `None` past the length.
    pub fn get(&self, index: usize) -> Option<T> {
        self.raw.elem_bytes(index).map(T::from_bytes)
    }

    /// Decode the most recently pushed element.
    pub fn back(&self) -> Option<T> {
        self.raw.back_bytes().map(T::from_bytes)
    }

    /// Iterate over the elements in push order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.raw
            .as_bytes()
            .chunks_exact(T::ELEM_TYPE.byte_size())
            .map(T::from_bytes)
    }

    /// Number of valid elements.
    pub fn len(&self) -> usize {
        self.raw.count()
    }

    /// Allocated element slots.
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Resize to `new_capacity` slots, truncating below the current
    /// length (same policy as [`DynArray::resize`]).
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        self.raw.resize(new_capacity)
    }

    /// The underlying byte-oriented array.
    pub fn as_raw(&self) -> &DynArray {
        &self.raw
    }

    /// Unwrap into the underlying byte-oriented array.
    pub fn into_raw(self) -> DynArray {
        self.raw
    }
}
