//! Sort permutations over a column.

use crate::column::Column;
use crate::scalar::{NanDirection, Scalar};

/// Row indices in output order. Shorter than the column when only a sorted
/// prefix was requested.
pub type Permutation = Vec<u32>;

/// One byte per row: nonzero once the row's position has been decided by a
/// previous sort column.
pub type EqualFlags = Vec<u8>;

/// Half-open row range still considered equal by previous sort columns.
pub type EqualRange = std::ops::Range<usize>;

/// Externally supplied ordering routine for multi-column sorts. The planner
/// picks the concrete strategy; the column only hands itself over.
pub trait SortStrategy<T: Scalar> {
    fn sort_column(
        &self,
        column: &Column<T>,
        flags: &mut EqualFlags,
        perm: &mut Permutation,
        range: EqualRange,
        last_column: bool,
    );
}

impl<T: Scalar> Column<T> {
    /// Build a permutation ordering all rows by value, or only the first
    /// `limit` rows when a sorted prefix suffices.
    ///
    /// `limit == 0` requests a full sort, as does any limit beyond an eighth
    /// of the rows (past that point a partial sort stops paying off). The
    /// sort is unstable: equal values keep arbitrary relative order.
    pub fn get_permutation(
        &self,
        reverse: bool,
        limit: usize,
        nan_direction: NanDirection,
    ) -> Permutation {
        let rows = self.len();
        let mut perm: Permutation = (0..rows as u32).collect();
        if rows == 0 {
            return perm;
        }

        let mut limit = limit;
        if limit as f64 > rows as f64 / 8.0 {
            limit = 0;
        }

        let data = self.as_slice();
        let cmp = move |a: &u32, b: &u32| {
            let ord = data[*a as usize].cmp_with_nan(data[*b as usize], nan_direction);
            if reverse {
                ord.reverse()
            } else {
                ord
            }
        };

        if limit > 0 {
            perm.select_nth_unstable_by(limit - 1, cmp);
            perm[..limit].sort_unstable_by(cmp);
        } else {
            perm.sort_unstable_by(cmp);
        }

        tracing::trace!(rows, limit, reverse, "built sort permutation");
        perm
    }

    /// Delegate one step of a multi-column sort to the supplied strategy.
    pub fn sort_column(
        &self,
        strategy: &dyn SortStrategy<T>,
        flags: &mut EqualFlags,
        perm: &mut Permutation,
        range: EqualRange,
        last_column: bool,
    ) {
        strategy.sort_column(self, flags, perm, range, last_column);
    }
}
