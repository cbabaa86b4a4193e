//! Boundary-bounded spectrum accumulation.
//!
//! One bottom-up sweep produces the spectrum of every node inside a
//! partition region. The returned map doubles as the memo for the split
//! search: it is keyed by stable node ids, built fresh per invocation, and
//! never reused once the boundary set or weight map changes meaning.

use super::Spectrum;
use crate::mutation::{token_position, token_type};
use crate::tree::{MutationTree, NodeId};
use std::collections::{HashMap, HashSet};

/// Weight of one mutation token. No weight map means implicit weight 1;
/// with a map, a position absent from it weighs 0 (excluded from the
/// replicate), and an unparseable position always weighs 0.
fn token_weight(token: &str, weights: Option<&HashMap<u32, u32>>) -> f64 {
    match token_position(token) {
        None => 0.0,
        Some(pos) => match weights {
            None => 1.0,
            Some(map) => map.get(&pos).copied().unwrap_or(0) as f64,
        },
    }
}

/// Spectrum of a node's own branch, honoring the long-branch guard.
fn branch_spectrum(
    tree: &MutationTree,
    node: NodeId,
    weights: Option<&HashMap<u32, u32>>,
    max_branch_mutations: usize,
) -> Spectrum {
    let mut spectrum = Spectrum::default();
    let tokens = tree.mutations(node);
    if tokens.len() > max_branch_mutations {
        return spectrum;
    }
    for token in tokens {
        if let Some(type_index) = token_type(token) {
            let weight = token_weight(token, weights);
            if weight > 0.0 {
                spectrum.add(type_index, weight);
            }
        }
    }
    spectrum
}

/// Computes the spectrum of every node in the region rooted at `root`,
/// bounded below by `boundary` (children in the boundary set root other
/// regions and are not folded in). Pure over the current tree state.
pub fn region_spectra(
    tree: &MutationTree,
    root: NodeId,
    boundary: &HashSet<NodeId>,
    weights: Option<&HashMap<u32, u32>>,
    max_branch_mutations: usize,
) -> HashMap<NodeId, Spectrum> {
    let order = tree.postorder(root, boundary);
    let mut memo: HashMap<NodeId, Spectrum> = HashMap::with_capacity(order.len());
    for node in order {
        let mut spectrum = branch_spectrum(tree, node, weights, max_branch_mutations);
        for child in tree.children(node) {
            if boundary.contains(child) {
                continue;
            }
            // Children precede parents in postorder, so the memo is
            // already populated.
            spectrum.merge(&memo[child]);
        }
        memo.insert(node, spectrum);
    }
    memo
}

/// The aggregate spectrum of the region rooted at `root`.
pub fn accumulate(
    tree: &MutationTree,
    root: NodeId,
    boundary: &HashSet<NodeId>,
    weights: Option<&HashMap<u32, u32>>,
    max_branch_mutations: usize,
) -> Spectrum {
    let mut memo = region_spectra(tree, root, boundary, weights, max_branch_mutations);
    memo.remove(&root).unwrap_or_default()
}
