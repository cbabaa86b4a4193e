use clap::Parser;
use spectrum_splits::cli;
use spectrum_splits::commands;

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Splits {
            input_tree,
            output_file,
            min_mutations,
            min_chi,
            max_branch_mutations,
            exemplar_tips,
            seed,
        } => commands::splits::run(
            input_tree,
            output_file,
            min_mutations,
            min_chi,
            max_branch_mutations,
            exemplar_tips,
            seed,
        ),
        cli::Commands::MaskSites {
            input_tree,
            output_tree,
            min_count,
            min_total,
            mask_chi,
            threads,
        } => commands::mask_sites::run(
            input_tree,
            output_tree,
            min_count,
            min_total,
            mask_chi,
            threads,
        ),
        cli::Commands::Bootstrap {
            input_tree,
            output_prefix,
            replicates,
            threads,
            seed,
            mode,
            min_mutations,
            min_chi,
            max_branch_mutations,
            exemplar_tips,
        } => commands::bootstrap::run(
            input_tree,
            output_prefix,
            replicates,
            threads,
            seed,
            mode,
            min_mutations,
            min_chi,
            max_branch_mutations,
            exemplar_tips,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
