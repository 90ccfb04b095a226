//! Row-key serialization for hash-based operators.
//!
//! Grouping and join operators build one flat byte key per row by appending
//! each key column's contribution in turn. A key is a [`RowKey`] whose
//! length is the write cursor; single-row keys can instead be carved out of
//! a caller-owned [`KeyArena`], which stays alive for as long as the
//! returned slices are referenced.
//!
//! The null-aware variants prefix each row with one flag byte (0 = present,
//! 1 = null); a null row contributes the flag byte only, and deserializing
//! it reconstructs the row as the type's default value.

use bumpalo::Bump;
use smallvec::SmallVec;

use crate::column::Column;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::simd;

/// Inline-first row key buffer; typical multi-column keys stay on the stack.
pub type RowKey = SmallVec<[u8; 32]>;

/// Bump arena backing single-row key slices.
///
/// The codec only borrows the arena; allocations stay valid until the arena
/// is reset or dropped, and the caller decides when that happens.
#[derive(Default)]
pub struct KeyArena {
    bump: Bump,
}

impl KeyArena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Allocate `size` zeroed bytes, valid until the arena is reset or
    /// dropped.
    pub fn alloc_contiguous(&self, size: usize) -> &mut [u8] {
        self.bump.alloc_slice_fill_copy(size, 0u8)
    }

    /// Drop all allocations, invalidating outstanding key slices (the
    /// borrow checker enforces that none are still referenced).
    pub fn reset(&mut self) {
        self.bump.reset();
    }

    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl<T: Scalar> Column<T> {
    /// Largest key contribution of a single row, in bytes.
    #[inline]
    pub fn max_row_byte_size(&self) -> usize {
        T::WIDTH
    }

    /// Serialize one row into `arena`-owned memory and return the key view.
    pub fn serialize_value_into_arena<'a>(&self, row: usize, arena: &'a KeyArena) -> &'a [u8] {
        let dst = arena.alloc_contiguous(T::WIDTH);
        dst.copy_from_slice(self.value_bytes(row));
        dst
    }

    /// Read one value off the front of `bytes`, append it, and return the
    /// advanced cursor.
    pub fn deserialize_and_append<'a>(&mut self, bytes: &'a [u8]) -> Result<&'a [u8]> {
        if bytes.len() < T::WIDTH {
            return Err(Error::TruncatedKey {
                need: T::WIDTH,
                have: bytes.len(),
            });
        }
        let (head, rest) = bytes.split_at(T::WIDTH);
        self.push(bytemuck::pod_read_unaligned(head));
        Ok(rest)
    }

    /// Append this column's value bytes to every caller-positioned key.
    pub fn serialize_batch(&self, keys: &mut [RowKey]) -> Result<()> {
        if keys.len() != self.len() {
            return Err(Error::SizeMismatch {
                expected: self.len(),
                got: keys.len(),
            });
        }
        for (key, value) in keys.iter_mut().zip(self.as_slice()) {
            key.extend_from_slice(bytemuck::bytes_of(value));
        }
        Ok(())
    }

    /// Append a null flag byte, then the value bytes for non-null rows.
    ///
    /// When the population scan shows no nulls, every row takes the uniform
    /// flag-plus-value path with no per-row branch.
    pub fn serialize_batch_with_nulls(&self, keys: &mut [RowKey], null_map: &[u8]) -> Result<()> {
        if keys.len() != self.len() {
            return Err(Error::SizeMismatch {
                expected: self.len(),
                got: keys.len(),
            });
        }
        if null_map.len() != self.len() {
            return Err(Error::SizeMismatch {
                expected: self.len(),
                got: null_map.len(),
            });
        }

        if !simd::has_nonzero(null_map) {
            for (key, value) in keys.iter_mut().zip(self.as_slice()) {
                key.push(0);
                key.extend_from_slice(bytemuck::bytes_of(value));
            }
            return Ok(());
        }

        for ((key, value), &null) in keys.iter_mut().zip(self.as_slice()).zip(null_map) {
            if null != 0 {
                key.push(1);
            } else {
                key.push(0);
                key.extend_from_slice(bytemuck::bytes_of(value));
            }
        }
        Ok(())
    }

    /// Consume this column's value bytes off the front of every key,
    /// appending the values. Validates every key before mutating anything.
    pub fn deserialize_batch(&mut self, keys: &mut [&[u8]]) -> Result<()> {
        for key in keys.iter() {
            if key.len() < T::WIDTH {
                return Err(Error::TruncatedKey {
                    need: T::WIDTH,
                    have: key.len(),
                });
            }
        }
        self.reserve(keys.len());
        for key in keys.iter_mut() {
            let (head, rest) = key.split_at(T::WIDTH);
            self.push(bytemuck::pod_read_unaligned(head));
            *key = rest;
        }
        Ok(())
    }

    /// Inverse of [`serialize_batch_with_nulls`]: consume the flag byte and,
    /// for non-null rows, the value bytes; null rows get the default value.
    /// Returns the reconstructed null map.
    ///
    /// [`serialize_batch_with_nulls`]: Column::serialize_batch_with_nulls
    pub fn deserialize_batch_with_nulls(&mut self, keys: &mut [&[u8]]) -> Result<Vec<u8>> {
        for key in keys.iter() {
            let need = match key.first() {
                None => 1,
                Some(0) => 1 + T::WIDTH,
                Some(_) => continue,
            };
            if key.len() < need {
                return Err(Error::TruncatedKey {
                    need,
                    have: key.len(),
                });
            }
        }

        let mut null_map = Vec::with_capacity(keys.len());
        self.reserve(keys.len());
        for key in keys.iter_mut() {
            let (flag, rest) = key.split_at(1);
            if flag[0] == 0 {
                let (head, rest) = rest.split_at(T::WIDTH);
                self.push(bytemuck::pod_read_unaligned(head));
                *key = rest;
            } else {
                self.push_default();
                *key = rest;
            }
            null_map.push(flag[0]);
        }
        Ok(null_map)
    }
}
