//! The extraction and aggregation pipelines.
//!
//! Extraction: spreadsheet → [`LanguageMap`] → (optional denest) → one locale file per
//! language. Aggregation: locale files → flattened [`LanguageMap`] → [`Table`] → a new
//! single-sheet spreadsheet.
//!
//! Both run sequentially and stop at the first error. Files written before a failure
//! are left in place.

use std::{
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    error::Error,
    formats::{FormatType, LocaleFile, Workbook, xlsx},
    nesting,
    options::{AggregateOptions, ExtractOptions},
    table::Table,
    traits::Parser,
    types::{LanguageMap, Locale},
};

/// What an extraction run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    /// Languages written, in spreadsheet order.
    pub languages: Vec<String>,
    /// Paths of the written locale files.
    pub files: Vec<PathBuf>,
    /// Number of key/value pairs read from the spreadsheet.
    pub translations: usize,
}

/// What an aggregation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    /// Languages found in the source directory, in column order.
    pub languages: Vec<String>,
    /// Number of data rows written.
    pub rows: usize,
    /// Path of the written spreadsheet.
    pub output: PathBuf,
}

/// Extracts a spreadsheet into one locale file per language.
///
/// # Example
///
/// ```rust,no_run
/// use langsheet::{ExtractOptions, FormatType, extract};
///
/// let options = ExtractOptions::new(FormatType::Json).with_nested(true);
/// let report = extract("translations.xlsx", "locales", &options)?;
/// println!("wrote {} files", report.files.len());
/// # Ok::<(), langsheet::Error>(())
/// ```
pub fn extract<S, T>(
    spreadsheet: S,
    target_dir: T,
    options: &ExtractOptions,
) -> Result<ExtractReport, Error>
where
    S: AsRef<Path>,
    T: AsRef<Path>,
{
    let map = read_spreadsheet(spreadsheet, options.first_sheet_only)?;
    let translations = map.entry_count();
    let map = if options.nested { map.denest() } else { map };

    let files = write_locale_files(&map, target_dir, options.format, options.commonjs)?;

    Ok(ExtractReport {
        languages: map.languages().map(str::to_string).collect(),
        files,
        translations,
    })
}

/// Aggregates a directory of locale files into a new spreadsheet.
///
/// # Example
///
/// ```rust,no_run
/// use langsheet::{AggregateOptions, FormatType, aggregate};
///
/// let report = aggregate("locales", "translations.xlsx", &AggregateOptions::new(FormatType::Ts))?;
/// println!("wrote {} rows", report.rows);
/// # Ok::<(), langsheet::Error>(())
/// ```
pub fn aggregate<S, T>(
    source_dir: S,
    spreadsheet: T,
    options: &AggregateOptions,
) -> Result<AggregateReport, Error>
where
    S: AsRef<Path>,
    T: AsRef<Path>,
{
    let spreadsheet = spreadsheet.as_ref();
    ensure_spreadsheet_extension(spreadsheet)?;

    let source_dir = source_dir.as_ref();
    let map = read_locale_files(source_dir, options.format)?;
    if map.is_empty() {
        return Err(Error::invalid_input(format!(
            "no .{} files found in {}",
            options.format.extension(),
            source_dir.display()
        )));
    }

    let table = Table::from_language_map(&map);
    write_spreadsheet(&table, spreadsheet, &options.sheet_name)?;

    Ok(AggregateReport {
        languages: table.languages,
        rows: table.rows.len(),
        output: spreadsheet.to_path_buf(),
    })
}

/// Reads a spreadsheet into a flat language map.
///
/// Every sheet is read in document order unless `first_sheet_only` is set. Rows
/// sharing a key overwrite earlier ones for each language they carry.
pub fn read_spreadsheet<P: AsRef<Path>>(
    path: P,
    first_sheet_only: bool,
) -> Result<LanguageMap, Error> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::invalid_input(format!(
            "spreadsheet not found: {}",
            path.display()
        )));
    }
    ensure_spreadsheet_extension(path)?;

    let file = File::open(path)?;
    let workbook =
        Workbook::from_reader_limited(BufReader::new(file), first_sheet_only.then_some(1))?;
    let tables = workbook.to_tables()?;
    if tables.iter().all(|table| table.rows.is_empty()) {
        return Err(Error::invalid_input(format!(
            "spreadsheet has no data rows: {}",
            path.display()
        )));
    }

    Ok(LanguageMap::from_tables(tables))
}

/// Writes `<target_dir>/<language>.<ext>` for every language in `map`.
///
/// The directory is created if needed; existing files are overwritten.
pub fn write_locale_files<P: AsRef<Path>>(
    map: &LanguageMap,
    target_dir: P,
    format: FormatType,
    commonjs: bool,
) -> Result<Vec<PathBuf>, Error> {
    let target_dir = target_dir.as_ref();
    for language in map.languages() {
        validate_language_code(language)?;
    }
    fs::create_dir_all(target_dir)?;

    let mut files = Vec::with_capacity(map.len());
    for locale in map {
        let path = target_dir.join(format!("{}.{}", locale.language, format.extension()));
        LocaleFile::new(format, commonjs, locale.translations.clone()).write_to(&path)?;
        files.push(path);
    }
    Ok(files)
}

/// Reads every `<language>.<ext>` file directly under `dir` into a flat language map.
///
/// Files are visited in file name order. Nested files are flattened to dotted keys.
pub fn read_locale_files<P: AsRef<Path>>(dir: P, format: FormatType) -> Result<LanguageMap, Error> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::invalid_input(format!(
            "source directory not found: {}",
            dir.display()
        )));
    }

    let suffix = format!(".{}", format.extension());
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        match name.strip_suffix(&suffix) {
            Some(language) if !language.is_empty() => files.push((language.to_string(), path.clone())),
            _ => {}
        }
    }
    files.sort();

    let mut map = LanguageMap::new();
    for (language, path) in files {
        let bytes = fs::read(&path)?;
        let file = LocaleFile::from_reader(format, bytes.as_slice())
            .map_err(|e| Error::format_error(format, &path, e))?;
        map.push(Locale::with_translations(
            language,
            nesting::flatten(file.translations()),
        ));
    }
    Ok(map)
}

/// Writes `table` as a single-sheet spreadsheet, creating the parent directory if needed.
pub fn write_spreadsheet<P: AsRef<Path>>(
    table: &Table,
    path: P,
    sheet_name: &str,
) -> Result<(), Error> {
    let path = path.as_ref();
    ensure_spreadsheet_extension(path)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Workbook::from_table(table, sheet_name).write_to(path)
}

fn ensure_spreadsheet_extension(path: &Path) -> Result<(), Error> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(xlsx::EXTENSION));
    if matches {
        Ok(())
    } else {
        Err(Error::invalid_input(format!(
            "expected a .{} spreadsheet, got {}",
            xlsx::EXTENSION,
            path.display()
        )))
    }
}

/// Language codes become file names, so they must not escape the target directory.
fn validate_language_code(language: &str) -> Result<(), Error> {
    let invalid = language.is_empty()
        || language == "."
        || language == ".."
        || language.contains(['/', '\\']);
    if invalid {
        return Err(Error::invalid_input(format!(
            "invalid language code `{}`",
            language
        )));
    }
    Ok(())
}
