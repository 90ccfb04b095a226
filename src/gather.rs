//! Index-based gather, value fill, and run-length replication.

use crate::column::Column;
use crate::error::{Error, Result};
use crate::scalar::Scalar;

impl<T: Scalar> Column<T> {
    /// New container where output row `i` is `self[perm[i]]`.
    ///
    /// `limit == 0` selects all rows; otherwise the output is clamped to
    /// `min(len, limit)` rows and `perm` must supply at least that many
    /// entries.
    pub fn permute(&self, perm: &[u32], limit: usize) -> Result<Column<T>> {
        let rows = self.len();
        let limit = if limit == 0 { rows } else { limit.min(rows) };
        if perm.len() < limit {
            return Err(Error::PermutationTooShort {
                len: perm.len(),
                required: limit,
            });
        }

        let data = self.as_slice();
        let mut out = Vec::with_capacity(limit);
        for &index in &perm[..limit] {
            let index = index as usize;
            if index >= rows {
                return Err(Error::OutOfRange {
                    start: index,
                    length: 1,
                    rows,
                });
            }
            out.push(data[index]);
        }
        Ok(self.derived(out))
    }

    /// Expand each row into consecutive copies per a prefix-sum offsets
    /// array: row `i` repeats `offsets[i] - offsets[i - 1]` times
    /// (`offsets[-1]` is 0), so the output holds `offsets.last()` rows.
    pub fn replicate(&self, offsets: &[u32]) -> Result<Column<T>> {
        let rows = self.len();
        if offsets.len() != rows {
            return Err(Error::SizeMismatch {
                expected: rows,
                got: offsets.len(),
            });
        }
        if rows == 0 {
            return Ok(self.derived(Vec::new()));
        }

        let total = offsets[rows - 1] as usize;
        let mut out = Vec::with_capacity(total);
        let mut prev = 0u32;
        for (&value, &offset) in self.as_slice().iter().zip(offsets) {
            debug_assert!(offset >= prev, "offsets must be non-decreasing");
            let count = offset.saturating_sub(prev) as usize;
            out.resize(out.len() + count, value);
            prev = offset;
        }

        tracing::trace!(rows, replicated = out.len(), "replicate");
        Ok(self.derived(out))
    }

    /// Gather-append `src[indices[k]]` for each `k`, in index order.
    /// Validates every index before mutating.
    pub fn insert_indices_from(&mut self, src: &Column<T>, indices: &[u32]) -> Result<()> {
        let rows = src.len();
        if let Some(&bad) = indices.iter().find(|&&index| index as usize >= rows) {
            return Err(Error::OutOfRange {
                start: bad as usize,
                length: 1,
                rows,
            });
        }
        self.reserve(indices.len());
        let data = src.as_slice();
        for &index in indices {
            self.push(data[index as usize]);
        }
        Ok(())
    }

    /// Append `length` copies of `src[position]`.
    pub fn insert_many_from(&mut self, src: &Column<T>, position: usize, length: usize) -> Result<()> {
        if position >= src.len() {
            return Err(Error::OutOfRange {
                start: position,
                length,
                rows: src.len(),
            });
        }
        let value = src.value(position);
        self.reserve(length);
        for _ in 0..length {
            self.push(value);
        }
        Ok(())
    }

    /// Append the last row's value `times` more times.
    pub fn insert_last_value_repeated(&mut self, times: usize) -> Result<()> {
        let Some(&value) = self.as_slice().last() else {
            return Err(Error::OutOfRange {
                start: 0,
                length: times,
                rows: 0,
            });
        };
        self.reserve(times);
        for _ in 0..times {
            self.push(value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permute_all_rows() {
        let col = Column::from_values(vec![10i32, 20, 30]);
        let out = col.permute(&[2, 0, 1], 0).unwrap();
        assert_eq!(out.as_slice(), &[30, 10, 20]);
    }

    #[test]
    fn test_permute_with_limit() {
        let col = Column::from_values(vec![10i32, 20, 30, 40]);
        let out = col.permute(&[3, 1], 2).unwrap();
        assert_eq!(out.as_slice(), &[40, 20]);

        // Limit beyond the row count clamps.
        let out = col.permute(&[0, 1, 2, 3, 0, 1], 100).unwrap();
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_permute_too_short() {
        let col = Column::from_values(vec![1u8, 2, 3]);
        let err = col.permute(&[0, 1], 3).unwrap_err();
        assert_eq!(
            err,
            Error::PermutationTooShort {
                len: 2,
                required: 3
            }
        );
    }

    #[test]
    fn test_permute_rejects_out_of_bounds_index() {
        let col = Column::from_values(vec![1u8, 2, 3]);
        assert!(col.permute(&[0, 9, 1], 0).is_err());
    }

    #[test]
    fn test_replicate() {
        let col = Column::from_values(vec![10i32, 20]);
        let out = col.replicate(&[1, 3]).unwrap();
        assert_eq!(out.as_slice(), &[10, 20, 20]);
    }

    #[test]
    fn test_replicate_zero_counts() {
        let col = Column::from_values(vec![1i16, 2, 3]);
        let out = col.replicate(&[0, 2, 2]).unwrap();
        assert_eq!(out.as_slice(), &[2, 2]);
    }

    #[test]
    fn test_replicate_validation_and_empty() {
        let col = Column::from_values(vec![1u64, 2]);
        assert!(col.replicate(&[1]).is_err());

        let empty = Column::<u64>::new();
        assert!(empty.replicate(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_insert_indices_from() {
        let src = Column::from_values(vec![5i32, 6, 7]);
        let mut dst = Column::from_values(vec![1i32]);
        dst.insert_indices_from(&src, &[2, 0, 2]).unwrap();
        assert_eq!(dst.as_slice(), &[1, 7, 5, 7]);

        let before = dst.clone();
        assert!(dst.insert_indices_from(&src, &[0, 3]).is_err());
        assert_eq!(dst, before);
    }

    #[test]
    fn test_insert_many_from() {
        let src = Column::from_values(vec![9u8, 4]);
        let mut dst = Column::<u8>::new();
        dst.insert_many_from(&src, 1, 3).unwrap();
        assert_eq!(dst.as_slice(), &[4, 4, 4]);

        assert!(dst.insert_many_from(&src, 2, 1).is_err());
    }

    #[test]
    fn test_insert_last_value_repeated() {
        let mut col = Column::from_values(vec![1i64, 7]);
        col.insert_last_value_repeated(2).unwrap();
        assert_eq!(col.as_slice(), &[1, 7, 7, 7]);

        let mut empty = Column::<i64>::new();
        assert!(empty.insert_last_value_repeated(1).is_err());
    }
}
