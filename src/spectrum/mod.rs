//! Substitution-spectrum aggregation, split search, and reporting.

pub mod accumulator;
pub mod report;
pub mod splits;

use anyhow::{bail, Result};

/// Weighted counts of the 12 directed substitution types, bucket order as
/// in [crate::mutation::SUBST_TYPES].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    counts: [f64; 12],
}

impl Spectrum {
    pub fn add(&mut self, type_index: usize, weight: f64) {
        self.counts[type_index] += weight;
    }

    pub fn merge(&mut self, other: &Spectrum) {
        for (slot, value) in self.counts.iter_mut().zip(other.counts.iter()) {
            *slot += value;
        }
    }

    /// Per-type difference, used for the "rest of region" contingency row.
    pub fn minus(&self, other: &Spectrum) -> Spectrum {
        let mut counts = self.counts;
        for (slot, value) in counts.iter_mut().zip(other.counts.iter()) {
            *slot -= value;
        }
        Spectrum { counts }
    }

    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }

    pub fn counts(&self) -> &[f64; 12] {
        &self.counts
    }

    pub fn get(&self, type_index: usize) -> f64 {
        self.counts[type_index]
    }

    /// Normalized per-type proportions. A zero-total spectrum cannot be
    /// normalized and is a hard error, never a NaN-filled row.
    pub fn proportions(&self) -> Result<[f64; 12]> {
        let total = self.total();
        if total == 0.0 {
            bail!("cannot normalize an empty spectrum (total weight is zero)");
        }
        let mut props = self.counts;
        for p in props.iter_mut() {
            *p /= total;
        }
        Ok(props)
    }

    /// Indices of types with at least one observation.
    pub fn observed_types(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0.0)
            .map(|(i, _)| i)
    }
}

/// Thresholds steering the split search.
#[derive(Debug, Clone, Copy)]
pub struct SplitParams {
    /// Minimum weighted mutation count required on each side of a
    /// candidate boundary.
    pub min_mutations: f64,
    /// Chi-square statistic a region's best candidate must exceed to be
    /// promoted to a boundary.
    pub min_chi: f64,
    /// Branches carrying more tokens than this are traversed but do not
    /// contribute to spectra.
    pub max_branch_mutations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::token_type;

    #[test]
    fn test_merge_and_minus() {
        let mut a = Spectrum::default();
        a.add(token_type("A1C").unwrap(), 2.0);
        let mut b = Spectrum::default();
        b.add(token_type("A1C").unwrap(), 1.0);
        b.add(token_type("G2T").unwrap(), 3.0);

        a.merge(&b);
        assert_eq!(a.total(), 6.0);
        let rest = a.minus(&b);
        assert_eq!(rest.get(token_type("A1C").unwrap()), 2.0);
        assert_eq!(rest.get(token_type("G2T").unwrap()), 0.0);
    }

    #[test]
    fn test_proportions() {
        let mut s = Spectrum::default();
        s.add(0, 1.0);
        s.add(5, 3.0);
        let props = s.proportions().unwrap();
        assert_eq!(props[0], 0.25);
        assert_eq!(props[5], 0.75);
    }

    #[test]
    fn test_empty_spectrum_normalization_fails() {
        let err = Spectrum::default().proportions().unwrap_err();
        assert!(err.to_string().contains("empty spectrum"));
    }

    #[test]
    fn test_observed_types() {
        let mut s = Spectrum::default();
        s.add(2, 1.0);
        s.add(7, 2.0);
        assert_eq!(s.observed_types().collect::<Vec<_>>(), vec![2, 7]);
    }
}
