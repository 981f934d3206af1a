//! Visual reading direction for ranked sequences.
//!
//! Rank order is always ascending (rank 1 is the most prominent). For Arabic
//! the adapter flips the visual order of a row after ranking, so the most
//! prominent item still lands where a right-to-left reader starts. Each view
//! decides its own row boundary before calling it.

use super::PlacementPolicy;

/// Reverse `seq` for Arabic, otherwise return it unchanged.
pub fn apply_locale_order<T>(mut seq: Vec<T>, is_arabic: bool) -> Vec<T> {
    if is_arabic {
        seq.reverse();
    }
    seq
}

/// Split a ranked sequence into rows of `row_len` and order each row for the locale.
///
/// Rows are cut in rank order first, so the first row always holds the
/// top-ranked items whatever the reading direction.
pub fn rows_in_reading_order<T: Clone>(seq: &[T], row_len: usize, is_arabic: bool) -> Vec<Vec<T>> {
    seq.chunks(row_len.max(1))
        .map(|row| apply_locale_order(row.to_vec(), is_arabic))
        .collect()
}

impl PlacementPolicy {
    /// Order one row of the middle-banner strip.
    ///
    /// With `legacy_middle_reversal` the row is reversed for every locale,
    /// matching what the storefront used to render.
    pub fn order_middle_row<T>(&self, mut row: Vec<T>, is_arabic: bool) -> Vec<T> {
        if self.legacy_middle_reversal {
            row.reverse();
            return row;
        }
        apply_locale_order(row, is_arabic)
    }

    /// The middle strip cut into rows of `row_len`, each row ordered by
    /// [`Self::order_middle_row`].
    pub fn middle_rows<T: Clone>(&self, seq: &[T], is_arabic: bool) -> Vec<Vec<T>> {
        seq.chunks(self.row_len.max(1))
            .map(|row| self.order_middle_row(row.to_vec(), is_arabic))
            .collect()
    }
}
