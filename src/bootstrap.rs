//! Bootstrap resampling of the split/spectrum analyses.
//!
//! Each replicate reweights alignment positions by sampling with
//! replacement, reruns the requested analysis under that weight map, and
//! writes its own report file. Replicates are independent: per-replicate
//! RNG seeds are derived from the base seed and the replicate index, so a
//! fixed seed reproduces every weight map regardless of scheduling.

use crate::sitemask::position_counts;
use crate::spectrum::accumulator::region_spectra;
use crate::spectrum::report::write_spectrum_table;
use crate::spectrum::splits::find_splits;
use crate::spectrum::{Spectrum, SplitParams};
use crate::tree::{MutationTree, NodeId};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapMode {
    /// Rerun the split search per replicate and report its partition.
    Splits,
    /// Keep the whole tree as one partition and report its spectrum.
    Spectrum,
}

#[derive(Debug, Clone, Copy)]
pub struct BootstrapParams {
    pub replicates: usize,
    pub threads: usize,
    pub seed: u64,
    pub mode: BootstrapMode,
    pub split_params: SplitParams,
    pub exemplar_tips: usize,
}

/// Draws one replicate's weight map: `positions.len()` uniform picks with
/// replacement. Positions never drawn are absent (weight zero).
pub fn draw_weights(positions: &[u32], rng: &mut impl Rng) -> HashMap<u32, u32> {
    let mut weights = HashMap::new();
    for _ in 0..positions.len() {
        let pick = positions[rng.gen_range(0..positions.len())];
        *weights.entry(pick).or_insert(0) += 1;
    }
    weights
}

/// Report path for one replicate, named deterministically by index.
pub fn replicate_path(prefix: &str, replicate: usize) -> PathBuf {
    PathBuf::from(format!("{}.rep{}.tsv", prefix, replicate))
}

fn run_replicate(
    tree: &MutationTree,
    positions: &[u32],
    params: &BootstrapParams,
    prefix: &str,
    replicate: usize,
) -> Result<()> {
    eprintln!("Bootstrap replicate {} starting", replicate);
    let mut rng = StdRng::seed_from_u64(params.seed.wrapping_add(replicate as u64));
    let weights = draw_weights(positions, &mut rng);

    let partition: HashSet<NodeId> = match params.mode {
        BootstrapMode::Splits => {
            find_splits(tree, Some(&weights), &params.split_params).partition
        }
        BootstrapMode::Spectrum => [tree.root()].into_iter().collect(),
    };

    let mut spectra: HashMap<NodeId, Spectrum> = HashMap::new();
    for root in &partition {
        let spectrum = region_spectra(
            tree,
            *root,
            &partition,
            Some(&weights),
            params.split_params.max_branch_mutations,
        )
        .remove(root)
        .unwrap_or_default();
        spectra.insert(*root, spectrum);
    }

    let path = replicate_path(prefix, replicate);
    let mut writer = BufWriter::new(
        File::create(&path).with_context(|| format!("creating report {:?}", path))?,
    );
    write_spectrum_table(
        &mut writer,
        tree,
        &partition,
        &spectra,
        params.exemplar_tips,
        &mut rng,
    )
    .with_context(|| format!("writing report {:?}", path))
}

/// Runs all replicates in waves of at most `threads`, joining each wave
/// before dispatching the next; returns after the last wave. A failed
/// replicate is reported on stderr and leaves its file absent; there is
/// no retry.
pub fn run_bootstrap(tree: &MutationTree, params: &BootstrapParams, prefix: &str) -> Result<()> {
    let mut positions: Vec<u32> = position_counts(tree).into_keys().collect();
    positions.sort();
    let positions = &positions[..];

    let wave_size = params.threads.max(1);
    let replicates: Vec<usize> = (0..params.replicates).collect();
    for wave in replicates.chunks(wave_size) {
        thread::scope(|scope| {
            let handles: Vec<_> = wave
                .iter()
                .map(|replicate| {
                    let replicate = *replicate;
                    scope.spawn(move || {
                        if let Err(e) = run_replicate(tree, positions, params, prefix, replicate)
                        {
                            eprintln!("Bootstrap replicate {} failed: {}", replicate, e);
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_weights_preserves_draw_count() {
        let positions: Vec<u32> = (1..=50).collect();
        let mut rng = StdRng::seed_from_u64(11);
        let weights = draw_weights(&positions, &mut rng);
        let drawn: u32 = weights.values().sum();
        assert_eq!(drawn as usize, positions.len());
        assert!(weights.keys().all(|p| positions.contains(p)));
    }

    #[test]
    fn test_draw_weights_deterministic_under_seed() {
        let positions: Vec<u32> = (1..=100).collect();
        let a = draw_weights(&positions, &mut StdRng::seed_from_u64(42));
        let b = draw_weights(&positions, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        let c = draw_weights(&positions, &mut StdRng::seed_from_u64(43));
        assert_ne!(a, c);
    }

    #[test]
    fn test_replicate_path_naming() {
        assert_eq!(
            replicate_path("out/boot", 3),
            PathBuf::from("out/boot.rep3.tsv")
        );
    }
}
