//! Chi-square test of independence for 2-row contingency tables.
//!
//! Only the statistic is needed by the split and masking searches; p-values
//! and degrees of freedom are never consumed, so no distribution CDF is
//! computed. Semantics follow `scipy.stats.chi2_contingency` defaults:
//! expected counts from the marginals, Yates continuity correction when the
//! table has a single degree of freedom. Empty categories (zero column
//! sums) are dropped before testing instead of raising; a table degenerate
//! after reduction scores 0.0.

/// Chi-square statistic for the 2-row table `[row_a, row_b]`.
///
/// Both rows must have equal length. Returns 0.0 when either row sum is
/// zero or fewer than two non-empty columns remain.
pub fn chi2_contingency(row_a: &[f64], row_b: &[f64]) -> f64 {
    debug_assert_eq!(row_a.len(), row_b.len());

    // Keep only columns with observations.
    let cols: Vec<(f64, f64)> = row_a
        .iter()
        .zip(row_b.iter())
        .map(|(a, b)| (*a, *b))
        .filter(|(a, b)| a + b > 0.0)
        .collect();
    if cols.len() < 2 {
        return 0.0;
    }

    let sum_a: f64 = cols.iter().map(|(a, _)| a).sum();
    let sum_b: f64 = cols.iter().map(|(_, b)| b).sum();
    if sum_a == 0.0 || sum_b == 0.0 {
        return 0.0;
    }
    let grand = sum_a + sum_b;

    // One degree of freedom left after reduction: apply Yates correction.
    let yates = cols.len() == 2;

    let mut statistic = 0.0;
    for (a, b) in &cols {
        let col_sum = a + b;
        for (observed, row_sum) in [(a, sum_a), (b, sum_b)] {
            let expected = row_sum * col_sum / grand;
            let mut delta = (observed - expected).abs();
            if yates {
                delta = (delta - 0.5).max(0.0);
            }
            statistic += delta * delta / expected;
        }
    }
    statistic
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_2x2_with_yates() {
        // scipy.stats.chi2_contingency([[10, 20], [30, 40]])[0]
        let chi2 = chi2_contingency(&[10.0, 20.0], &[30.0, 40.0]);
        assert!(close(chi2, 0.44642857142857145), "got {}", chi2);
    }

    #[test]
    fn test_2x3_without_correction() {
        // scipy.stats.chi2_contingency([[10, 20, 30], [20, 20, 20]])[0]
        let chi2 = chi2_contingency(&[10.0, 20.0, 30.0], &[20.0, 20.0, 20.0]);
        assert!(close(chi2, 5.333333333333333), "got {}", chi2);
    }

    #[test]
    fn test_zero_column_dropped() {
        // Middle column empty: reduces to [[5, 7], [3, 9]], Yates applies.
        let chi2 = chi2_contingency(&[5.0, 0.0, 7.0], &[3.0, 0.0, 9.0]);
        assert!(close(chi2, 0.1875), "got {}", chi2);
    }

    #[test]
    fn test_degenerate_tables_score_zero() {
        assert_eq!(chi2_contingency(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
        assert_eq!(chi2_contingency(&[5.0, 0.0], &[3.0, 0.0]), 0.0);
        assert_eq!(chi2_contingency(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_independent_rows_score_low() {
        let chi2 = chi2_contingency(&[50.0, 50.0], &[500.0, 500.0]);
        assert!(chi2 < 0.05, "got {}", chi2);
    }
}
