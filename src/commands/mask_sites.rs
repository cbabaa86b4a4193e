use crate::config::Config;
use crate::sitemask::{mask_recurrent_sites, MaskParams};
use crate::tree;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

pub fn run(
    input_tree: String,
    output_tree: String,
    min_count: u64,
    min_total: u64,
    mask_chi: f64,
    threads: Option<usize>,
) -> Result<()> {
    let config = Config::load();
    let params = MaskParams {
        min_count,
        min_total,
        mask_chi,
        threads: threads.unwrap_or(config.threads),
    };

    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    progress.set_message(format!("Loading tree from {}", input_tree));
    let mut tree = tree::io::load(Path::new(&input_tree))?;

    progress.set_message("Scanning for recurrent sites...");
    let summary = mask_recurrent_sites(&mut tree, &params)?;

    eprintln!("Saving tree to: {}", output_tree);
    tree::io::save(&tree, Path::new(&output_tree))?;

    progress.finish_with_message(format!(
        "Masked {} site(s) in {} pass(es)",
        summary.masked_sites, summary.passes
    ));
    Ok(())
}
