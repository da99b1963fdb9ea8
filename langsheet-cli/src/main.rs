use clap::{Parser, Subcommand};
use langsheet_cli::aggregate::{AggregateArgs, run_aggregate_command};
use langsheet_cli::extract::{ExtractArgs, run_extract_command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract a translation spreadsheet into one locale file per language.
    Extract(ExtractArgs),

    /// Aggregate a directory of locale files into a translation spreadsheet.
    Aggregate(AggregateArgs),
}

fn main() {
    let args = Args::parse();

    match args.commands {
        Commands::Extract(args) => run_extract_command(args),
        Commands::Aggregate(args) => run_aggregate_command(args),
    }
}
