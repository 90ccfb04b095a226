//! In-memory columnar storage primitive for fixed-width scalar values.
//!
//! A [`Column<T>`] holds one column's rows as a dense, contiguous buffer and
//! provides the bulk kernels a vectorized query engine's operators need:
//! mask filtering, sort-permutation generation, index gather and run-length
//! replication, arena-backed row-key serialization for hash joins and
//! grouping, and batch content hashing.
//!
//! The crate is single-threaded and synchronous: every operation is one
//! CPU-bound pass with exclusive access to its container, and any
//! parallelism is imposed by the surrounding engine at partition
//! granularity. Conversion to and from wire or interchange formats lives in
//! the engine's dispatch layer, which only goes through the raw accessors
//! exposed here.
//!
//! ```
//! use colvec::Column;
//!
//! let col = Column::from_values(vec![5i32, 3, 8, 1]);
//! let survivors = col.filter(&[1, 0, 1, 0], None).unwrap();
//! assert_eq!(survivors.as_slice(), &[5, 8]);
//! ```

pub mod column;
mod compare;
pub mod error;
mod filter;
mod gather;
mod hash;
pub mod keys;
pub mod scalar;
pub mod simd;
pub mod sort;
pub mod temporal;

pub use column::Column;
pub use error::{Error, Result};
pub use keys::{KeyArena, RowKey};
pub use scalar::{Ipv6, NanDirection, Scalar};
pub use sort::{EqualFlags, EqualRange, Permutation, SortStrategy};
pub use temporal::TemporalKind;
