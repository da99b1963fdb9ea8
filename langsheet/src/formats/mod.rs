//! All supported document formats for langsheet.
//!
//! Locale files come in three flavours, selected by [`FormatType`]:
//! plain JSON, and JavaScript/TypeScript modules wrapping the same data. The
//! spreadsheet side lives in [`xlsx`].

pub mod json;
pub mod script;
pub mod xlsx;

use std::{
    fmt::{Display, Formatter},
    io::{BufRead, Write},
    path::Path,
    str::FromStr,
};

pub use json::Format as JsonFormat;
pub use script::Format as ScriptFormat;
pub use xlsx::Workbook;

use crate::{error::Error, traits::Parser, types::Translations};

/// The locale file formats accepted on the command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// `<lang>.json`: the translations as a pretty-printed JSON object.
    Json,
    /// `<lang>.js`: an ES module (or CommonJS module) exporting the translations.
    Js,
    /// `<lang>.ts`: an ES module exporting the translations.
    Ts,
}

impl FormatType {
    /// Every supported format, in the order they are listed to users.
    pub const ALL: [FormatType; 3] = [FormatType::Json, FormatType::Js, FormatType::Ts];

    /// Returns the file extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Json => "json",
            FormatType::Js => "js",
            FormatType::Ts => "ts",
        }
    }

    /// Comma separated list of supported format names, for error messages.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|format| format.extension())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Module syntax used when writing this format.
    ///
    /// Only `js` can be written as CommonJS; `json` has no wrapper at all and `ts`
    /// always uses `export default`.
    pub fn module_syntax(&self, commonjs: bool) -> Option<ModuleSyntax> {
        match self {
            FormatType::Json => None,
            FormatType::Js if commonjs => Some(ModuleSyntax::CommonJs),
            FormatType::Js | FormatType::Ts => Some(ModuleSyntax::EsModule),
        }
    }
}

/// Implements [`std::fmt::Display`] for [`FormatType`] as the format's extension.
///
/// # Example
/// ```rust
/// use langsheet::formats::FormatType;
/// assert_eq!(FormatType::Json.to_string(), "json");
/// assert_eq!(FormatType::Ts.to_string(), "ts");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Implements [`std::str::FromStr`] for [`FormatType`].
///
/// Accepts `json`, `js` and `ts`, case-insensitively and with an optional leading dot.
/// Returns [`Error::UnknownFormat`] for anything else.
///
/// # Example
/// ```rust
/// use langsheet::formats::FormatType;
/// use std::str::FromStr;
/// assert_eq!(FormatType::from_str("JSON").unwrap(), FormatType::Json);
/// assert_eq!(FormatType::from_str(".ts").unwrap(), FormatType::Ts);
/// assert!(FormatType::from_str("yaml").is_err());
/// ```
impl FromStr for FormatType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "json" => Ok(FormatType::Json),
            "js" => Ok(FormatType::Js),
            "ts" => Ok(FormatType::Ts),
            _ => Err(Error::UnknownFormat(s.trim().to_string())),
        }
    }
}

/// How a script module exposes its translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleSyntax {
    /// `export default { ... }`
    #[default]
    EsModule,
    /// `module.exports = { ... }`
    CommonJs,
}

impl ModuleSyntax {
    /// The text written before the embedded literal.
    pub fn prefix(&self) -> &'static str {
        match self {
            ModuleSyntax::EsModule => "export default ",
            ModuleSyntax::CommonJs => "module.exports = ",
        }
    }
}

/// A locale file of any supported format.
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleFile {
    Json(JsonFormat),
    Script(ScriptFormat),
}

impl LocaleFile {
    /// Wraps translations for writing in `format`.
    pub fn new(format: FormatType, commonjs: bool, translations: Translations) -> Self {
        match format.module_syntax(commonjs) {
            None => LocaleFile::Json(JsonFormat::new(translations)),
            Some(syntax) => LocaleFile::Script(ScriptFormat::new(translations, syntax)),
        }
    }

    /// Parses locale file content declared as `format`.
    pub fn from_reader<R: BufRead>(format: FormatType, reader: R) -> Result<Self, Error> {
        match format {
            FormatType::Json => Ok(LocaleFile::Json(JsonFormat::from_reader(reader)?)),
            FormatType::Js | FormatType::Ts => {
                Ok(LocaleFile::Script(ScriptFormat::from_reader(reader)?))
            }
        }
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        match self {
            LocaleFile::Json(format) => format.to_writer(writer),
            LocaleFile::Script(format) => format.to_writer(writer),
        }
    }

    /// Writes the file to `path`, replacing any existing file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        match self {
            LocaleFile::Json(format) => format.write_to(path),
            LocaleFile::Script(format) => format.write_to(path),
        }
    }

    pub fn translations(&self) -> &Translations {
        match self {
            LocaleFile::Json(format) => &format.translations,
            LocaleFile::Script(format) => &format.translations,
        }
    }

    pub fn into_translations(self) -> Translations {
        match self {
            LocaleFile::Json(format) => format.translations,
            LocaleFile::Script(format) => format.translations,
        }
    }
}

/// Extracts the top-level object of a parsed locale document.
fn expect_object(value: serde_json::Value) -> Result<Translations, Error> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(Error::literal(format!(
            "expected an object at the top level, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
