//! Recurrent-site detection and tree-wide masking.
//!
//! For every alignment position with enough occurrences, a single
//! bottom-up traversal finds the node that best separates the position's
//! occurrences from the rest of the tree's mutations (2x2 chi-square).
//! Positions whose best statistic clears the masking threshold are
//! stripped from every branch strictly below that node, counts are
//! recomputed, and the masked positions are rechecked until a pass masks
//! nothing new.

use crate::mutation::token_position;
use crate::stats::chi2_contingency;
use crate::tree::{MutationTree, NodeId};
use anyhow::Result;
use crossbeam_channel::bounded;
use std::collections::{HashMap, HashSet};
use std::thread;

/// Best changepoint found for one alignment position.
#[derive(Debug, Clone)]
pub struct SiteRecord {
    pub position: u32,
    pub chi2: f64,
    pub node: NodeId,
}

/// Thresholds steering the masking search.
#[derive(Debug, Clone, Copy)]
pub struct MaskParams {
    /// Minimum tree-wide occurrence count for a position to be scanned.
    pub min_count: u64,
    /// Minimum total mutation count required both above and below a
    /// candidate node.
    pub min_total: u64,
    /// Statistic a position's best node must exceed to be masked;
    /// non-positive disables masking (scan and report only).
    pub mask_chi: f64,
    /// Worker pool size for the per-position fan-out.
    pub threads: usize,
}

/// Summary of one full masking run.
#[derive(Debug, Default)]
pub struct MaskSummary {
    /// Every position scanned, with its best statistic, across all passes.
    pub records: Vec<SiteRecord>,
    /// Total number of (node, position) directives applied.
    pub masked_sites: usize,
    pub passes: usize,
}

/// Raw occurrence count per parseable alignment position.
pub fn position_counts(tree: &MutationTree) -> HashMap<u32, u64> {
    let mut counts = HashMap::new();
    for node in tree.preorder() {
        for token in tree.mutations(node) {
            if let Some(pos) = token_position(token) {
                *counts.entry(pos).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Raw mutation total: every token on every reachable branch, parseable
/// or not.
pub fn total_mutations(tree: &MutationTree) -> u64 {
    tree.preorder()
        .into_iter()
        .map(|node| tree.mutations(node).len() as u64)
        .sum()
}

/// Per-node cumulative counts from one bottom-up sweep: occurrences of
/// `position` and total mutations in the subtree.
fn subtree_counts(tree: &MutationTree, position: u32) -> HashMap<NodeId, (u64, u64)> {
    let boundary = HashSet::new();
    let order = tree.postorder(tree.root(), &boundary);
    let mut memo: HashMap<NodeId, (u64, u64)> = HashMap::with_capacity(order.len());
    for node in order {
        let mut occ = 0u64;
        let mut total = tree.mutations(node).len() as u64;
        for token in tree.mutations(node) {
            if token_position(token) == Some(position) {
                occ += 1;
            }
        }
        for child in tree.children(node) {
            let (child_occ, child_total) = memo[child];
            occ += child_occ;
            total += child_total;
        }
        memo.insert(node, (occ, total));
    }
    memo
}

/// Finds the node maximizing the 2x2 statistic contrasting occurrences of
/// `position` above vs. below against all other mutations above vs.
/// below. Falls back to the root with statistic 0.0 when no node clears
/// the size preconditions.
pub fn scan_position(
    tree: &MutationTree,
    position: u32,
    occurrences: u64,
    total: u64,
    min_total: u64,
) -> SiteRecord {
    let memo = subtree_counts(tree, position);
    let mut best = SiteRecord {
        position,
        chi2: 0.0,
        node: tree.root(),
    };
    let boundary = HashSet::new();
    for node in tree.postorder(tree.root(), &boundary) {
        let (below_occ, below_total) = memo[&node];
        let above_occ = occurrences - below_occ;
        let above_total = total - below_total - above_occ;
        if above_total <= min_total || below_total <= min_total {
            continue;
        }
        let chi2 = chi2_contingency(
            &[above_total as f64, above_occ as f64],
            &[(below_total - below_occ) as f64, below_occ as f64],
        );
        if chi2 > best.chi2 {
            best.chi2 = chi2;
            best.node = node;
        }
    }
    best
}

/// Scans every qualifying position on a bounded worker pool and collects
/// one record per position plus the mask directives that cleared
/// `mask_chi`. The tree is shared read-only; workers only append to the
/// result channel.
fn scan_positions(
    tree: &MutationTree,
    counts: &HashMap<u32, u64>,
    total: u64,
    params: &MaskParams,
) -> (Vec<SiteRecord>, HashMap<NodeId, Vec<u32>>) {
    let threads = params.threads.max(1);
    let (job_tx, job_rx) = bounded::<(u32, u64)>(threads * 2);
    let (result_tx, result_rx) = bounded::<SiteRecord>(threads * 2);

    let records = thread::scope(|scope| {
        for _ in 0..threads {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                while let Ok((position, occurrences)) = job_rx.recv() {
                    let record =
                        scan_position(tree, position, occurrences, total, params.min_total);
                    if result_tx.send(record).is_err() {
                        break;
                    }
                }
            });
        }
        drop(result_tx);

        let collector = scope.spawn(move || {
            let mut records: Vec<SiteRecord> = Vec::new();
            while let Ok(record) = result_rx.recv() {
                records.push(record);
            }
            records
        });

        for (position, occurrences) in counts {
            eprintln!("\tPosition: {}\tOccurrences: {}", position, occurrences);
            job_tx
                .send((*position, *occurrences))
                .expect("site-scan workers exited early");
        }
        drop(job_tx);

        collector.join().expect("site-scan collector panicked")
    });

    let mut directives: HashMap<NodeId, Vec<u32>> = HashMap::new();
    for record in &records {
        if params.mask_chi > 0.0 && record.chi2 > params.mask_chi {
            directives.entry(record.node).or_default().push(record.position);
        }
    }
    (records, directives)
}

/// Strips every masked position from all branches strictly below each
/// directive node, updating branch lengths. Idempotent: a second apply
/// with the same directives finds nothing left to remove.
pub fn apply_mask(tree: &mut MutationTree, directives: &HashMap<NodeId, Vec<u32>>) {
    for (node, positions) in directives {
        eprintln!(
            "Masking mutations at positions {:?} in descendants of node {}",
            positions,
            tree.name(*node)
        );
        let masked: HashSet<u32> = positions.iter().copied().collect();
        let boundary = HashSet::new();
        for descendant in tree.postorder(*node, &boundary) {
            if descendant == *node {
                continue;
            }
            let keep: Vec<String> = tree
                .mutations(descendant)
                .iter()
                .filter(|token| {
                    token_position(token).map_or(true, |pos| !masked.contains(&pos))
                })
                .cloned()
                .collect();
            if keep.len() != tree.mutations(descendant).len() {
                tree.update_mutations(descendant, keep, true);
            }
        }
    }
}

/// Full masking loop: scan all qualifying positions, mask the recurrent
/// ones, recount, and recheck only the masked positions until a pass
/// masks nothing.
pub fn mask_recurrent_sites(tree: &mut MutationTree, params: &MaskParams) -> Result<MaskSummary> {
    let total = total_mutations(tree);
    eprintln!("Counting mutations");
    let mut counts: HashMap<u32, u64> = position_counts(tree)
        .into_iter()
        .filter(|(_, count)| *count >= params.min_count)
        .collect();

    let mut summary = MaskSummary::default();
    while !counts.is_empty() {
        summary.passes += 1;
        eprintln!("Finding splits. Iteration no: {}", summary.passes);

        let (mut records, directives) = scan_positions(tree, &counts, total, params);
        records.sort_by(|a, b| {
            b.chi2
                .partial_cmp(&a.chi2)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        eprintln!("Mutations checked:");
        for record in &records {
            eprintln!(
                "{}\t{}\t{}",
                record.position,
                record.chi2,
                tree.name(record.node)
            );
        }
        summary.records.extend(records);

        if directives.is_empty() {
            break;
        }
        eprintln!("Masking mutations: {}", directives.len());
        summary.masked_sites += directives.values().map(Vec::len).sum::<usize>();
        apply_mask(tree, &directives);

        eprintln!("Recounting mutations");
        let masked_positions: HashSet<u32> =
            directives.values().flatten().copied().collect();
        counts = position_counts(tree)
            .into_iter()
            .filter(|(pos, _)| masked_positions.contains(pos))
            .collect();
        eprintln!("Sites to recheck: {}", counts.len());
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three subtrees under the root; position 99 recurs on every tip of
    /// the "hot" subtree, with one stray occurrence elsewhere. The third
    /// subtree keeps the above/below tables asymmetric so the hot node is
    /// the unique maximizer.
    fn recurrent_tree() -> (MutationTree, NodeId) {
        let mut tree = MutationTree::new("root");
        let mut pos = 1000;
        let mut background = |n: usize| -> Vec<String> {
            (0..n)
                .map(|_| {
                    pos += 1;
                    format!("A{}C", pos)
                })
                .collect()
        };

        let left = tree.add_child(tree.root(), "left", background(10));
        for i in 0..5 {
            let mut tokens = background(10);
            if i == 0 {
                tokens.push("G99T".into()); // stray occurrence
            }
            tree.add_child(left, format!("l{}", i), tokens);
        }
        let hot = tree.add_child(tree.root(), "hot", background(10));
        for i in 0..5 {
            let mut tokens = background(10);
            tokens.push("G99T".into());
            tokens.push("G99T".into());
            tree.add_child(hot, format!("h{}", i), tokens);
        }
        let mid = tree.add_child(tree.root(), "mid", background(10));
        for i in 0..2 {
            tree.add_child(mid, format!("m{}", i), background(10));
        }
        (tree, hot)
    }

    #[test]
    fn test_position_counts_and_totals() {
        let (tree, _) = recurrent_tree();
        let counts = position_counts(&tree);
        assert_eq!(counts[&99], 11);
        assert_eq!(total_mutations(&tree), 161);
    }

    #[test]
    fn test_scan_position_finds_hot_node() {
        let (tree, hot) = recurrent_tree();
        let record = scan_position(&tree, 99, 11, total_mutations(&tree), 20);
        assert_eq!(record.node, hot);
        assert!(record.chi2 > 0.0);
    }

    #[test]
    fn test_apply_mask_strips_strict_descendants() {
        let (mut tree, hot) = recurrent_tree();
        // Put the position on the hot branch itself too: it must survive,
        // masking is strictly below the directive node.
        let mut on_hot = tree.mutations(hot).to_vec();
        on_hot.push("G99T".into());
        tree.update_mutations(hot, on_hot, true);

        let directives: HashMap<_, _> = [(hot, vec![99u32])].into_iter().collect();
        apply_mask(&mut tree, &directives);

        for child in tree.children(hot).to_vec() {
            assert!(
                !tree.mutations(child).iter().any(|t| token_position(t) == Some(99)),
                "position 99 survived below the masking node"
            );
            assert_eq!(tree.branch_length(child), 10.0);
        }
        assert!(tree
            .mutations(hot)
            .iter()
            .any(|t| token_position(t) == Some(99)));
    }

    #[test]
    fn test_apply_mask_idempotent() {
        let (mut tree, hot) = recurrent_tree();
        let directives: HashMap<_, _> = [(hot, vec![99u32])].into_iter().collect();
        apply_mask(&mut tree, &directives);
        let snapshot: Vec<Vec<String>> = tree
            .preorder()
            .into_iter()
            .map(|id| tree.mutations(id).to_vec())
            .collect();
        apply_mask(&mut tree, &directives);
        let again: Vec<Vec<String>> = tree
            .preorder()
            .into_iter()
            .map(|id| tree.mutations(id).to_vec())
            .collect();
        assert_eq!(snapshot, again);
    }

    #[test]
    fn test_masking_loop_removes_recurrent_site() {
        let (mut tree, hot) = recurrent_tree();
        let params = MaskParams {
            min_count: 5,
            min_total: 20,
            mask_chi: 5.0,
            threads: 2,
        };
        let summary = mask_recurrent_sites(&mut tree, &params).unwrap();
        assert_eq!(summary.masked_sites, 1);
        // Second pass rechecks the masked position and finds nothing left.
        assert_eq!(summary.passes, 2);
        // The recurrent copies below the hot node are gone; the stray
        // occurrence elsewhere survives.
        let boundary = HashSet::new();
        for node in tree.postorder(hot, &boundary) {
            assert!(
                !tree.mutations(node).iter().any(|t| token_position(t) == Some(99)),
                "position 99 still present below the masking node"
            );
        }
        assert_eq!(position_counts(&tree)[&99], 1);
    }

    #[test]
    fn test_masking_disabled_reports_only() {
        let (mut tree, _) = recurrent_tree();
        let params = MaskParams {
            min_count: 5,
            min_total: 20,
            mask_chi: 0.0,
            threads: 1,
        };
        let summary = mask_recurrent_sites(&mut tree, &params).unwrap();
        assert_eq!(summary.masked_sites, 0);
        assert_eq!(summary.passes, 1);
        assert!(position_counts(&tree).contains_key(&99));
    }
}
