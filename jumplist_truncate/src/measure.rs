// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! From sampled row geometry to a removal count.

/// Geometry sampled from an index element and its rows.
///
/// Row height is sampled from a single alphabetic row and assumed uniform;
/// this is a simplifying assumption of the solver, compensated only by the
/// summed-heights fallback below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    /// Vertical space actually available to the element.
    pub visible_height: f64,
    /// Full scrollable extent of the element's content.
    pub scroll_height: f64,
    /// Rendered height of one alphabetic row.
    pub char_height: f64,
    /// Sum of all rows' rendered heights. When rows are not simply stacked
    /// to fill the scroll extent this can exceed `scroll_height`, and the
    /// deficit is recomputed against it.
    pub rows_total_height: f64,
    /// Rows that consume space but are never elision candidates.
    pub non_alpha_rows: usize,
    /// Number of alphabetic rows.
    pub alpha_total: usize,
}

/// How many display positions must disappear for the element to fit.
///
/// Non-alphabetic rows consume space but cannot be elided, so each one adds
/// a position that alphabetic elision must compensate for. The result is
/// clamped so at least 5 alphabetic characters remain.
#[must_use]
pub fn letters_to_remove(metrics: &RowMetrics) -> usize {
    if metrics.visible_height >= metrics.scroll_height {
        return 0;
    }
    let mut delta = metrics.scroll_height - metrics.visible_height;
    if metrics.rows_total_height > metrics.scroll_height {
        delta = metrics.rows_total_height - metrics.visible_height;
    }
    let mut remove = ceil_ratio(delta, metrics.char_height);
    if remove == 0 {
        return 0;
    }
    remove += metrics.non_alpha_rows;
    if metrics.alpha_total < 5 + remove {
        remove = metrics.alpha_total.saturating_sub(5);
    }
    remove
}

/// Ceiling of `num / den` for non-negative inputs, without `std` float
/// intrinsics.
fn ceil_ratio(num: f64, den: f64) -> usize {
    if den <= 0.0 || num <= 0.0 {
        return 0;
    }
    let ratio = num / den;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "ratio is non-negative and bounded by row counts in practice"
    )]
    let floor = ratio as usize;
    if (floor as f64) < ratio { floor + 1 } else { floor }
}

#[cfg(test)]
mod tests {
    use super::{RowMetrics, letters_to_remove};

    fn metrics() -> RowMetrics {
        RowMetrics {
            visible_height: 500.0,
            scroll_height: 650.0,
            char_height: 25.0,
            rows_total_height: 650.0,
            non_alpha_rows: 0,
            alpha_total: 26,
        }
    }

    #[test]
    fn fitting_content_removes_nothing() {
        let m = RowMetrics {
            visible_height: 700.0,
            ..metrics()
        };
        assert_eq!(letters_to_remove(&m), 0);
    }

    #[test]
    fn deficit_divides_by_sampled_row_height() {
        // 150px deficit over 25px rows.
        assert_eq!(letters_to_remove(&metrics()), 6);

        // A partial row still costs a whole letter.
        let m = RowMetrics {
            visible_height: 499.0,
            ..metrics()
        };
        assert_eq!(letters_to_remove(&m), 7);
    }

    #[test]
    fn non_stacked_rows_recompute_against_their_sum() {
        // Rows overflow the scroll extent (e.g. margins collapse oddly):
        // the deficit grows to 700 - 500 = 200 → 8 rows.
        let m = RowMetrics {
            rows_total_height: 700.0,
            ..metrics()
        };
        assert_eq!(letters_to_remove(&m), 8);
    }

    #[test]
    fn non_alphabetic_rows_add_to_the_count() {
        let m = RowMetrics {
            non_alpha_rows: 2,
            ..metrics()
        };
        assert_eq!(letters_to_remove(&m), 8);
    }

    #[test]
    fn at_least_five_letters_survive() {
        let m = RowMetrics {
            visible_height: 100.0,
            alpha_total: 26,
            ..metrics()
        };
        // Raw demand would be 22; the clamp keeps it at 26 - 5 = 21.
        assert_eq!(letters_to_remove(&m), 21);

        let tiny = RowMetrics {
            alpha_total: 4,
            ..metrics()
        };
        assert_eq!(letters_to_remove(&tiny), 0);
    }

    #[test]
    fn zero_row_height_degrades_to_no_removal() {
        let m = RowMetrics {
            char_height: 0.0,
            ..metrics()
        };
        assert_eq!(letters_to_remove(&m), 0);
    }
}
