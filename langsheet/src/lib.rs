#![forbid(unsafe_code)]
//! Spreadsheet ⇄ localization file toolkit for Rust.
//!
//! Translators edit one spreadsheet with a row per translation key and a column per
//! language. `langsheet` extracts that spreadsheet into one locale file per language and
//! aggregates a directory of locale files back into a fresh spreadsheet.
//!
//! Both directions pivot through the [`LanguageMap`]: language code → key → value.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langsheet::{AggregateOptions, ExtractOptions, FormatType, aggregate, extract};
//!
//! // translations.xlsx → locales/en.json, locales/fr.json, ...
//! extract("translations.xlsx", "locales", &ExtractOptions::new(FormatType::Json))?;
//!
//! // locales/*.json → translations.xlsx
//! aggregate("locales", "translations.xlsx", &AggregateOptions::new(FormatType::Json))?;
//! # Ok::<(), langsheet::Error>(())
//! ```
//!
//! # Supported Formats
//!
//! - **json**: `<lang>.json`, the translations as a pretty-printed object
//! - **js**: `<lang>.js`, `export default {...}` or `module.exports = {...}`
//! - **ts**: `<lang>.ts`, `export default {...}`
//! - **xlsx**: the translation spreadsheet; header `_key_` followed by language codes
//!
//! With nested output enabled, dotted keys such as `home.title` are written as nested
//! objects. Aggregation always flattens them back to dotted keys.

pub mod converter;
pub mod error;
pub mod formats;
pub mod nesting;
pub mod options;
pub mod table;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    converter::{AggregateReport, ExtractReport, aggregate, extract},
    error::Error,
    formats::{FormatType, LocaleFile, ModuleSyntax},
    options::{AggregateOptions, ExtractOptions},
    table::{RESERVED_KEY, Table, TableRow},
    types::{LanguageMap, Locale, Translations},
};
