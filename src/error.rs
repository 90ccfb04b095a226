use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the bulk column operations.
///
/// Every operation validates its preconditions before mutating anything, so
/// an `Err` never leaves a column partially updated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("size mismatch: expected {expected} rows, got {got}")]
    SizeMismatch { expected: usize, got: usize },

    #[error("range start = {start}, length = {length} is out of bound (rows = {rows})")]
    OutOfRange {
        start: usize,
        length: usize,
        rows: usize,
    },

    #[error("permutation has {len} entries, {required} required")]
    PermutationTooShort { len: usize, required: usize },

    #[error("truncated row key: need {need} bytes, have {have}")]
    TruncatedKey { need: usize, have: usize },

    #[error("not supported: {0}")]
    NotSupported(String),
}
