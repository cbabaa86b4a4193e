use crate::bootstrap::{run_bootstrap, BootstrapMode, BootstrapParams};
use crate::cli::Mode;
use crate::config::Config;
use crate::spectrum::SplitParams;
use crate::tree;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

#[allow(clippy::too_many_arguments)]
pub fn run(
    input_tree: String,
    output_prefix: String,
    replicates: usize,
    threads: Option<usize>,
    seed: u64,
    mode: Mode,
    min_mutations: f64,
    min_chi: f64,
    max_branch_mutations: Option<usize>,
    exemplar_tips: usize,
) -> Result<()> {
    let config = Config::load();
    let params = BootstrapParams {
        replicates,
        threads: threads.unwrap_or(config.threads),
        seed,
        mode: match mode {
            Mode::Splits => BootstrapMode::Splits,
            Mode::Spectrum => BootstrapMode::Spectrum,
        },
        split_params: SplitParams {
            min_mutations,
            min_chi,
            max_branch_mutations: max_branch_mutations.unwrap_or(config.max_branch_mutations),
        },
        exemplar_tips,
    };

    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    progress.set_message(format!("Loading tree from {}", input_tree));
    let tree = tree::io::load(Path::new(&input_tree))?;

    progress.set_message(format!(
        "Running {} bootstrap replicate(s), {} in flight...",
        params.replicates, params.threads
    ));
    run_bootstrap(&tree, &params, &output_prefix)?;

    progress.finish_with_message(format!(
        "Bootstrap complete: reports at {}.rep*.tsv",
        output_prefix
    ));
    Ok(())
}
