use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Rerun the split search per replicate
    Splits,
    /// Whole-tree spectrum per replicate
    Spectrum,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Partition the tree into spectrum-homogeneous regions and write the spectrum table
    Splits {
        /// Input tree file (protobuf, optionally gzipped)
        input_tree: String,
        /// Output file for the spectrum table
        #[arg(short = 'o', long = "output", default_value = "spectrum_splits.tsv")]
        output_file: String,
        /// Minimum mutation count required on each side of a split
        #[arg(long, default_value = "50")]
        min_mutations: f64,
        /// Minimum chi-square value to accept a split
        #[arg(long, default_value = "100")]
        min_chi: f64,
        /// Branches with more mutations than this do not contribute to spectra
        #[arg(long)]
        max_branch_mutations: Option<usize>,
        /// Number of exemplar tips to sample per partition (0 = none)
        #[arg(long, default_value = "0")]
        exemplar_tips: usize,
        /// Random seed for exemplar sampling
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Detect recurrent alignment positions and mask them tree-wide
    MaskSites {
        /// Input tree file (protobuf, optionally gzipped)
        input_tree: String,
        /// Output tree file with masked mutations
        #[arg(long, default_value = "masked_sites.pb.gz")]
        output_tree: String,
        /// Minimum occurrence count for a position to be checked
        #[arg(long, default_value = "50")]
        min_count: u64,
        /// Minimum mutation count required above and below a candidate node
        #[arg(long, default_value = "500")]
        min_total: u64,
        /// Minimum chi-square value for masking a position below a node
        #[arg(long, default_value = "5000")]
        mask_chi: f64,
        /// Number of concurrent workers
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Rerun the analysis under bootstrap-resampled position weights
    Bootstrap {
        /// Input tree file (protobuf, optionally gzipped)
        input_tree: String,
        /// Prefix for per-replicate report files
        #[arg(long, default_value = "bootstrap")]
        output_prefix: String,
        /// Number of bootstrap replicates
        #[arg(long, default_value = "100")]
        replicates: usize,
        /// Number of replicates in flight at once
        #[arg(long)]
        threads: Option<usize>,
        /// Base random seed
        #[arg(long, default_value = "0")]
        seed: u64,
        /// Analysis rerun per replicate
        #[arg(long, value_enum, default_value_t = Mode::Splits)]
        mode: Mode,
        /// Minimum mutation count required on each side of a split
        #[arg(long, default_value = "50")]
        min_mutations: f64,
        /// Minimum chi-square value to accept a split
        #[arg(long, default_value = "100")]
        min_chi: f64,
        /// Branches with more mutations than this do not contribute to spectra
        #[arg(long)]
        max_branch_mutations: Option<usize>,
        /// Number of exemplar tips to sample per partition (0 = none)
        #[arg(long, default_value = "0")]
        exemplar_tips: usize,
    },
}
