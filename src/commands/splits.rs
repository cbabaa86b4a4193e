use crate::config::Config;
use crate::spectrum::accumulator::region_spectra;
use crate::spectrum::report::write_spectrum_table;
use crate::spectrum::splits::find_splits;
use crate::spectrum::{Spectrum, SplitParams};
use crate::tree::{self, NodeId};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[allow(clippy::too_many_arguments)]
pub fn run(
    input_tree: String,
    output_file: String,
    min_mutations: f64,
    min_chi: f64,
    max_branch_mutations: Option<usize>,
    exemplar_tips: usize,
    seed: u64,
) -> Result<()> {
    let config = Config::load();
    let params = SplitParams {
        min_mutations,
        min_chi,
        max_branch_mutations: max_branch_mutations.unwrap_or(config.max_branch_mutations),
    };

    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    progress.set_message(format!("Loading tree from {}", input_tree));
    let tree = tree::io::load(Path::new(&input_tree))?;

    progress.set_message("Searching for spectrum splits...");
    let scan = find_splits(&tree, None, &params);

    eprintln!("Splits accepted:");
    for record in scan.records_by_strength() {
        eprintln!(
            "{}\t{}\t{}",
            tree.name(record.node),
            record.chi2,
            tree.name(record.region)
        );
    }

    progress.set_message("Computing partition spectra...");
    let mut spectra: HashMap<NodeId, Spectrum> = HashMap::new();
    for root in &scan.partition {
        let spectrum = region_spectra(&tree, *root, &scan.partition, None, params.max_branch_mutations)
            .remove(root)
            .unwrap_or_default();
        spectra.insert(*root, spectrum);
    }

    progress.set_message(format!("Writing spectrum table to {}", output_file));
    let mut writer = BufWriter::new(
        File::create(&output_file).with_context(|| format!("creating {}", output_file))?,
    );
    let mut rng = StdRng::seed_from_u64(seed);
    write_spectrum_table(
        &mut writer,
        &tree,
        &scan.partition,
        &spectra,
        exemplar_tips,
        &mut rng,
    )?;

    progress.finish_with_message(format!(
        "Found {} partition(s) in {} iteration(s)",
        scan.partition.len(),
        scan.iterations
    ));
    Ok(())
}
