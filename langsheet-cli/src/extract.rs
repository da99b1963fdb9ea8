use clap::Args;
use langsheet::{ExtractOptions, ExtractReport};

use crate::config::Config;
use crate::formats::{parse_format, resolve_format};

/// Arguments of the `extract` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ExtractArgs {
    /// The .xlsx spreadsheet to read
    pub spreadsheet: String,

    /// Directory to write one locale file per language into
    pub target_dir: String,

    /// Locale file format: json, js or ts
    pub format: Option<String>,

    /// Expand dotted keys (`a.b`) into nested objects
    #[arg(short, long)]
    pub nested: bool,

    /// Write `module.exports = ...` instead of `export default ...` (js only)
    #[arg(long)]
    pub commonjs: bool,

    /// Only read the first sheet of the spreadsheet
    #[arg(long)]
    pub first_sheet_only: bool,

    /// Optional TOML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print every written file
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolve the options and run the extraction, without printing anything.
pub fn execute_extract(args: &ExtractArgs) -> Result<ExtractReport, String> {
    // A format given on the command line is checked before the config file is read.
    let cli_format = args.format.as_deref().map(parse_format).transpose()?;
    let config = Config::load_optional(args.config.as_deref())?;
    let format = match cli_format {
        Some(format) => format,
        None => resolve_format(None, config.extract.format.as_deref())?,
    };

    let options = ExtractOptions::new(format)
        .with_nested(args.nested || config.extract.nested.unwrap_or(false))
        .with_commonjs(args.commonjs || config.extract.commonjs.unwrap_or(false))
        .with_first_sheet_only(
            args.first_sheet_only || config.extract.first_sheet_only.unwrap_or(false),
        );

    langsheet::extract(&args.spreadsheet, &args.target_dir, &options).map_err(|e| e.to_string())
}

/// Run the extract command: spreadsheet → one locale file per language.
pub fn run_extract_command(args: ExtractArgs) {
    println!(
        "Extracting {} into {}...",
        args.spreadsheet, args.target_dir
    );

    match execute_extract(&args) {
        Ok(report) => {
            if args.verbose {
                for file in &report.files {
                    println!("  wrote {}", file.display());
                }
            }
            println!(
                "✅ Extracted {} translations into {} files ({})",
                report.translations,
                report.files.len(),
                report.languages.join(", ")
            );
        }
        Err(e) => {
            println!("❌ Extraction failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_format_fails_before_touching_files() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("locales");
        let args = ExtractArgs {
            spreadsheet: temp_dir.path().join("missing.xlsx").display().to_string(),
            target_dir: target.display().to_string(),
            format: Some("yaml".to_string()),
            ..Default::default()
        };

        let err = execute_extract(&args).unwrap_err();
        assert!(err.contains("unknown format `yaml`"));
        assert!(!target.exists());
    }

    #[test]
    fn test_unknown_format_rejected_before_reading_config() {
        let temp_dir = TempDir::new().unwrap();
        let args = ExtractArgs {
            spreadsheet: temp_dir.path().join("missing.xlsx").display().to_string(),
            target_dir: temp_dir.path().join("locales").display().to_string(),
            format: Some("yaml".to_string()),
            config: Some(temp_dir.path().join("missing.toml").display().to_string()),
            ..Default::default()
        };

        let err = execute_extract(&args).unwrap_err();
        assert!(err.contains("unknown format `yaml`"), "{err}");
    }

    #[test]
    fn test_format_from_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("langsheet.toml");
        fs::write(&config, "[extract]\nformat = \"ts\"\n").unwrap();

        let args = ExtractArgs {
            spreadsheet: temp_dir.path().join("missing.xlsx").display().to_string(),
            target_dir: temp_dir.path().join("locales").display().to_string(),
            config: Some(config.display().to_string()),
            ..Default::default()
        };

        // The format resolves, so the failure comes from the missing spreadsheet.
        let err = execute_extract(&args).unwrap_err();
        assert!(err.contains("spreadsheet not found"));
    }
}
