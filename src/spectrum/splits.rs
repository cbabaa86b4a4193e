//! Iterative chi-square split search.
//!
//! Starting from the whole tree as one region, each iteration examines
//! every still-open region, finds the internal node whose subtree spectrum
//! diverges most from the rest of the region, and either promotes it to a
//! new partition boundary or finalizes the region. Both the accepted and
//! the finalized boundary sets only grow, so the loop terminates within
//! one iteration per tree node.

use super::accumulator::region_spectra;
use super::SplitParams;
use crate::stats::chi2_contingency;
use crate::tree::{MutationTree, NodeId};
use std::collections::{HashMap, HashSet};

/// One accepted boundary: `node` split away from the region rooted at
/// `region` with the recorded statistic.
#[derive(Debug, Clone)]
pub struct SplitRecord {
    pub node: NodeId,
    pub region: NodeId,
    pub chi2: f64,
}

/// Outcome of a split search: the final partition roots and the accepted
/// splits in the order they were found.
#[derive(Debug)]
pub struct SplitScan {
    pub partition: HashSet<NodeId>,
    pub records: Vec<SplitRecord>,
    pub iterations: usize,
}

impl SplitScan {
    /// Records sorted by statistic, strongest first.
    pub fn records_by_strength(&self) -> Vec<&SplitRecord> {
        let mut sorted: Vec<_> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.chi2.partial_cmp(&a.chi2).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }
}

/// Best split candidate inside one region, if any clears the thresholds.
fn scan_region(
    tree: &MutationTree,
    region: NodeId,
    accepted: &HashSet<NodeId>,
    weights: Option<&HashMap<u32, u32>>,
    params: &SplitParams,
) -> Option<(NodeId, f64)> {
    let memo = region_spectra(tree, region, accepted, weights, params.max_branch_mutations);
    let region_spectrum = &memo[&region];
    let region_total = region_spectrum.total();

    let mut best: Option<(NodeId, f64)> = None;
    // Postorder gives a deterministic candidate order; ties keep the first
    // candidate encountered (arbitrary but documented).
    for node in tree.postorder(region, accepted) {
        if node == region {
            continue;
        }
        let spectrum = &memo[&node];
        let inside = spectrum.total();
        if inside < params.min_mutations || region_total - inside < params.min_mutations {
            continue;
        }
        let rest = region_spectrum.minus(spectrum);
        let chi2 = chi2_contingency(spectrum.counts(), rest.counts());
        if best.map_or(true, |(_, max)| chi2 > max) {
            best = Some((node, chi2));
        }
    }
    best.filter(|(_, chi2)| *chi2 > params.min_chi)
}

/// Runs the split search over the whole tree under an optional position
/// weight map. Returns the finalized partition roots (always including the
/// tree root) and one record per accepted boundary.
pub fn find_splits(
    tree: &MutationTree,
    weights: Option<&HashMap<u32, u32>>,
    params: &SplitParams,
) -> SplitScan {
    let mut accepted: HashSet<NodeId> = [tree.root()].into_iter().collect();
    let mut finalized: HashSet<NodeId> = HashSet::new();
    let mut records = Vec::new();
    let mut iterations = 0;

    while accepted.len() != finalized.len() {
        iterations += 1;
        let mut open: Vec<NodeId> = accepted.difference(&finalized).copied().collect();
        open.sort();
        eprintln!(
            "Split search iteration {}: {} open region(s), {} accepted",
            iterations,
            open.len(),
            accepted.len()
        );

        let mut pending: Vec<SplitRecord> = Vec::new();
        for region in open {
            match scan_region(tree, region, &accepted, weights, params) {
                Some((node, chi2)) if !accepted.contains(&node) => {
                    pending.push(SplitRecord { node, region, chi2 });
                }
                _ => {
                    finalized.insert(region);
                }
            }
        }
        for record in pending {
            accepted.insert(record.node);
            records.push(record);
        }
    }

    SplitScan {
        partition: finalized,
        records,
        iterations,
    }
}
