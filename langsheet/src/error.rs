//! All error types for the langsheet crate.
//!
//! These are returned from every fallible operation (spreadsheet reading, locale file
//! parsing, serialization, and the two pipelines). Errors bubble up unchanged to the
//! caller; nothing in the crate retries or swallows them.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::formats::FormatType;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "unknown format `{0}`, supported formats: {supported}",
        supported = FormatType::supported_list()
    )]
    UnknownFormat(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("spreadsheet parse error: {0}")]
    Parse(#[from] calamine::XlsxError),

    #[error("spreadsheet write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid literal: {0}")]
    Literal(String),

    #[error("Invalid {format} file: {}: {source}", .path.display())]
    Format {
        format: FormatType,
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Creates a new literal error for malformed locale file content.
    pub fn literal(message: impl Into<String>) -> Self {
        Error::Literal(message.into())
    }

    /// Wraps a content error with the format and path of the offending locale file.
    pub fn format_error(format: FormatType, path: impl AsRef<Path>, source: Error) -> Self {
        Error::Format {
            format,
            path: path.as_ref().to_path_buf(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unknown_format_lists_supported_formats() {
        let error = Error::UnknownFormat("yaml".to_string());
        assert_eq!(
            error.to_string(),
            "unknown format `yaml`, supported formats: json, js, ts"
        );
    }

    #[test]
    fn test_invalid_input_error() {
        let error = Error::invalid_input("spreadsheet not found: missing.xlsx");
        assert_eq!(
            error.to_string(),
            "invalid input: spreadsheet not found: missing.xlsx"
        );
    }

    #[test]
    fn test_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Json(json_error);
        assert!(error.to_string().contains("JSON error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_format_error_names_format_and_path() {
        let error = Error::format_error(
            FormatType::Js,
            "locales/en.js",
            Error::literal("unexpected token"),
        );
        let display = error.to_string();
        assert!(display.starts_with("Invalid js file: locales/en.js"));
        assert!(display.contains("unexpected token"));
    }

    #[test]
    fn test_format_error_exposes_source() {
        let error = Error::format_error(FormatType::Json, "fr.json", Error::literal("bad"));
        let source = std::error::Error::source(&error).expect("source");
        assert_eq!(source.to_string(), "invalid literal: bad");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownFormat("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownFormat"));
        assert!(debug.contains("test"));
    }
}
