//! Per-row content hashing.
//!
//! Two batch families share the null-skip contract (a flagged row's slot is
//! left untouched): a seeded streaming hash for hash joins and aggregation,
//! and a CRC-style checksum whose temporal path renders packed date values
//! to canonical text first, keeping checksums stable across storage
//! representations of the same logical instant.

use std::hash::Hasher;

use xxhash_rust::xxh64::xxh64;

use crate::column::Column;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::temporal::{self, TemporalKind};

#[inline]
fn crc32_with_seed(bytes: &[u8], seed: u32) -> u32 {
    let mut hasher = crc32fast::Hasher::new_with_initial(seed);
    hasher.update(bytes);
    hasher.finalize()
}

impl<T: Scalar> Column<T> {
    /// Feed one row's raw value bytes into a cumulative row hash. The call
    /// order across columns defines the combined hash.
    #[inline]
    pub fn update_hash<H: Hasher>(&self, row: usize, hasher: &mut H) {
        hasher.write(self.value_bytes(row));
    }

    /// Mix every non-null row's raw bytes into its running hash slot,
    /// seeding the streaming hash with the slot's current value.
    pub fn update_hashes_batch(&self, hashes: &mut [u64], null_map: Option<&[u8]>) -> Result<()> {
        let rows = self.len();
        if hashes.len() != rows {
            return Err(Error::SizeMismatch {
                expected: rows,
                got: hashes.len(),
            });
        }
        match null_map {
            Some(nulls) => {
                if nulls.len() != rows {
                    return Err(Error::SizeMismatch {
                        expected: rows,
                        got: nulls.len(),
                    });
                }
                for row in 0..rows {
                    if nulls[row] == 0 {
                        hashes[row] = xxh64(self.value_bytes(row), hashes[row]);
                    }
                }
            }
            None => {
                for row in 0..rows {
                    hashes[row] = xxh64(self.value_bytes(row), hashes[row]);
                }
            }
        }
        Ok(())
    }

    /// Checksum counterpart of [`update_hashes_batch`], seeding a CRC with
    /// each slot's current value.
    ///
    /// When `temporal` is set and the scalar carries the packed 64-bit
    /// temporal representation, the canonical text rendering is checksummed
    /// instead of the raw bytes; every other scalar checksums raw bytes.
    ///
    /// [`update_hashes_batch`]: Column::update_hashes_batch
    pub fn update_checksums_batch(
        &self,
        checksums: &mut [u32],
        temporal: Option<TemporalKind>,
        null_map: Option<&[u8]>,
    ) -> Result<()> {
        let rows = self.len();
        if checksums.len() != rows {
            return Err(Error::SizeMismatch {
                expected: rows,
                got: checksums.len(),
            });
        }
        if let Some(nulls) = null_map {
            if nulls.len() != rows {
                return Err(Error::SizeMismatch {
                    expected: rows,
                    got: nulls.len(),
                });
            }
        }

        match null_map {
            Some(nulls) => {
                for row in 0..rows {
                    if nulls[row] == 0 {
                        checksums[row] = self.checksum_row(row, temporal, checksums[row]);
                    }
                }
            }
            None => {
                for row in 0..rows {
                    checksums[row] = self.checksum_row(row, temporal, checksums[row]);
                }
            }
        }
        Ok(())
    }

    #[inline]
    fn checksum_row(&self, row: usize, temporal: Option<TemporalKind>, seed: u32) -> u32 {
        if let Some(kind) = temporal {
            if let Some(raw) = self.value(row).packed_temporal() {
                let mut buf = [0u8; temporal::MAX_TEXT_LEN];
                let len = temporal::render(raw, kind, &mut buf);
                return crc32_with_seed(&buf[..len], seed);
            }
        }
        crc32_with_seed(self.value_bytes(row), seed)
    }
}
