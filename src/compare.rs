//! Scalar comparison against a reference row.
//!
//! `compare_scalar` is the per-column step of a multi-column ORDER BY
//! comparison chain: rows already decided by an earlier column carry a
//! nonzero flag and are skipped; this column only adjudicates the
//! contiguous runs of still-equal rows, located with the byte-scan
//! primitives in [`crate::simd`].

use std::cmp::Ordering;

use crate::column::Column;
use crate::error::{Error, Result};
use crate::scalar::{NanDirection, Scalar};
use crate::simd;

impl<T: Scalar> Column<T> {
    /// Three-way comparison between `self[row]` and `rhs[rhs_row]`.
    #[inline]
    pub fn compare_at(
        &self,
        row: usize,
        rhs_row: usize,
        rhs: &Column<T>,
        nan_direction: NanDirection,
    ) -> Ordering {
        self.value(row).cmp_with_nan(rhs.value(rhs_row), nan_direction)
    }

    /// Compare every not-yet-decided row against the scalar `rhs[rhs_row]`.
    ///
    /// `cmp_flags[i]` is nonzero once row `i` has been ordered by some
    /// column; such rows are skipped. For each undecided row the three-way
    /// outcome `ord` (−1, 0, 1) is computed, `cmp_flags[i]` becomes
    /// `ord != 0`, and `filter[i]` becomes `ord * direction < 0`
    /// (`direction` is +1 ascending, −1 descending).
    pub fn compare_scalar(
        &self,
        rhs_row: usize,
        rhs: &Column<T>,
        direction: i32,
        nan_direction: NanDirection,
        cmp_flags: &mut [u8],
        filter: &mut [u8],
    ) -> Result<()> {
        let rows = self.len();
        if cmp_flags.len() != rows {
            return Err(Error::SizeMismatch {
                expected: rows,
                got: cmp_flags.len(),
            });
        }
        if filter.len() != rows {
            return Err(Error::SizeMismatch {
                expected: rows,
                got: filter.len(),
            });
        }
        if rhs_row >= rhs.len() {
            return Err(Error::OutOfRange {
                start: rhs_row,
                length: 1,
                rows: rhs.len(),
            });
        }

        let base = rhs.value(rhs_row);
        let data = self.as_slice();

        let mut begin = simd::find_zero(cmp_flags, 0);
        while begin < rows {
            let end = simd::find_nonzero(cmp_flags, begin + 1);
            for row in begin..end {
                let ord = data[row].cmp_with_nan(base, nan_direction) as i32;
                cmp_flags[row] = u8::from(ord != 0);
                filter[row] = u8::from(ord * direction < 0);
            }
            begin = simd::find_zero(cmp_flags, end + 1);
        }
        Ok(())
    }
}
