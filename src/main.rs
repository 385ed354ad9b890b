use clap::Parser;

use series_palette::cli::{Cli, Commands};
use series_palette::commands::{run_assign, run_config, run_generate, run_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Generate(args) => run_generate(args, &cli),
        Commands::Assign(args) => run_assign(args, &cli),
        Commands::Init(args) => run_init(args, cli.quiet),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
