use std::str::FromStr;

use langsheet::FormatType;

/// Parse a locale file format from a string, with a helpful error message.
///
/// Accepts `json`, `js` and `ts` in any case.
pub fn parse_format(s: &str) -> Result<FormatType, String> {
    FormatType::from_str(s).map_err(|e| e.to_string())
}

/// Pick the format given on the command line, falling back to the config file.
pub fn resolve_format(
    from_args: Option<&str>,
    from_config: Option<&str>,
) -> Result<FormatType, String> {
    match from_args.or(from_config) {
        Some(format) => parse_format(format),
        None => Err(format!(
            "No format given. Pass one of: {} (or set `format` in the config file)",
            FormatType::supported_list()
        )),
    }
}
