//! Options controlling the extraction and aggregation pipelines.

use crate::formats::{FormatType, ModuleSyntax, xlsx::DEFAULT_SHEET_NAME};

/// Options for [`crate::extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Format of the locale files to write.
    pub format: FormatType,
    /// Expand dotted keys into nested objects before writing.
    pub nested: bool,
    /// Write `js` files as CommonJS (`module.exports = ...`) instead of ES modules.
    pub commonjs: bool,
    /// Only read the first sheet of the spreadsheet.
    pub first_sheet_only: bool,
}

impl ExtractOptions {
    /// Creates default extract options for `format`: flat keys, ES modules, all sheets.
    pub fn new(format: FormatType) -> Self {
        Self {
            format,
            nested: false,
            commonjs: false,
            first_sheet_only: false,
        }
    }

    /// Enables/disables nested output.
    pub fn with_nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    /// Enables/disables CommonJS output for `js`.
    pub fn with_commonjs(mut self, commonjs: bool) -> Self {
        self.commonjs = commonjs;
        self
    }

    /// Enables/disables reading only the first sheet.
    pub fn with_first_sheet_only(mut self, first_sheet_only: bool) -> Self {
        self.first_sheet_only = first_sheet_only;
        self
    }

    /// The module wrapper used for written files, if any.
    pub fn module_syntax(&self) -> Option<ModuleSyntax> {
        self.format.module_syntax(self.commonjs)
    }
}

/// Options for [`crate::aggregate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Format of the locale files to read.
    pub format: FormatType,
    /// Name of the sheet written to the spreadsheet.
    pub sheet_name: String,
}

impl AggregateOptions {
    pub fn new(format: FormatType) -> Self {
        Self {
            format,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }

    /// Sets the sheet name.
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }
}
