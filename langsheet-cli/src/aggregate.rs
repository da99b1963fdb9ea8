use clap::Args;
use langsheet::{AggregateOptions, AggregateReport};

use crate::config::Config;
use crate::formats::{parse_format, resolve_format};

/// Arguments of the `aggregate` command.
#[derive(Args, Debug, Clone, Default)]
pub struct AggregateArgs {
    /// Directory holding one locale file per language
    pub source_dir: String,

    /// The .xlsx spreadsheet to write
    pub spreadsheet: String,

    /// Locale file format: json, js or ts
    pub format: Option<String>,

    /// Name of the written sheet
    #[arg(long)]
    pub sheet_name: Option<String>,

    /// Optional TOML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the languages that were read
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolve the options and run the aggregation, without printing anything.
pub fn execute_aggregate(args: &AggregateArgs) -> Result<AggregateReport, String> {
    // A format given on the command line is checked before the config file is read.
    let cli_format = args.format.as_deref().map(parse_format).transpose()?;
    let config = Config::load_optional(args.config.as_deref())?;
    let format = match cli_format {
        Some(format) => format,
        None => resolve_format(None, config.aggregate.format.as_deref())?,
    };

    let mut options = AggregateOptions::new(format);
    if let Some(sheet_name) = args.sheet_name.clone().or(config.aggregate.sheet_name) {
        options = options.with_sheet_name(sheet_name);
    }

    langsheet::aggregate(&args.source_dir, &args.spreadsheet, &options).map_err(|e| e.to_string())
}

/// Run the aggregate command: locale files → one spreadsheet.
pub fn run_aggregate_command(args: AggregateArgs) {
    println!(
        "Aggregating {} into {}...",
        args.source_dir, args.spreadsheet
    );

    match execute_aggregate(&args) {
        Ok(report) => {
            if args.verbose {
                for language in &report.languages {
                    println!("  read {}", language);
                }
            }
            println!(
                "✅ Wrote {} rows for {} languages to {}",
                report.rows,
                report.languages.len(),
                report.output.display()
            );
        }
        Err(e) => {
            println!("❌ Aggregation failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
