//! Mask filtering over the column, in copy and in-place flavors.
//!
//! The mask is processed in groups of [`simd::GROUP`] bytes collapsed into a
//! single bit word. Predicate masks produced by real queries are strongly
//! run-length-correlated, so most groups resolve through the all-zero or
//! all-ones word test and never touch individual rows.

use crate::column::Column;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::simd::{self, GROUP};

impl<T: Scalar> Column<T> {
    /// New container holding only the rows whose mask byte is nonzero, in
    /// original order. `size_hint` pre-reserves the output when the caller
    /// already knows the selectivity.
    pub fn filter(&self, mask: &[u8], size_hint: Option<usize>) -> Result<Column<T>> {
        if mask.len() != self.len() {
            return Err(Error::SizeMismatch {
                expected: self.len(),
                got: mask.len(),
            });
        }

        let data = self.as_slice();
        let mut out: Vec<T> = Vec::with_capacity(size_hint.unwrap_or(data.len()));

        let full = mask.len() / GROUP * GROUP;
        let mut pos = 0;
        while pos < full {
            let word = simd::bytes_to_mask_word(&mask[pos..pos + GROUP]);
            if word == 0 {
                // whole group filtered out
            } else if word == u64::MAX {
                out.extend_from_slice(&data[pos..pos + GROUP]);
            } else {
                let mut bits = word;
                while bits != 0 {
                    let idx = bits.trailing_zeros() as usize;
                    out.push(data[pos + idx]);
                    bits &= bits - 1;
                }
            }
            pos += GROUP;
        }
        for row in full..mask.len() {
            if mask[row] != 0 {
                out.push(data[row]);
            }
        }

        tracing::trace!(rows = data.len(), kept = out.len(), "copy filter");
        Ok(self.derived(out))
    }

    /// Compact the column down to the surviving rows and return the new row
    /// count. No allocation; survivor order is preserved.
    pub fn filter_in_place(&mut self, mask: &[u8]) -> Result<usize> {
        if mask.len() != self.len() {
            return Err(Error::SizeMismatch {
                expected: self.len(),
                got: mask.len(),
            });
        }

        let data = self.as_mut_slice();
        let mut write = 0usize;

        let full = mask.len() / GROUP * GROUP;
        let mut pos = 0;
        while pos < full {
            let word = simd::bytes_to_mask_word(&mask[pos..pos + GROUP]);
            if word == 0 {
                // skip
            } else if word == u64::MAX {
                data.copy_within(pos..pos + GROUP, write);
                write += GROUP;
            } else {
                let mut bits = word;
                while bits != 0 {
                    let idx = bits.trailing_zeros() as usize;
                    data[write] = data[pos + idx];
                    write += 1;
                    bits &= bits - 1;
                }
            }
            pos += GROUP;
        }
        for row in full..mask.len() {
            if mask[row] != 0 {
                data[write] = data[row];
                write += 1;
            }
        }

        self.resize(write);
        tracing::trace!(kept = write, "in-place filter");
        Ok(write)
    }
}
