//! Tabular view of translations: one row per key, one column per language.
//!
//! This is the shape a spreadsheet holds. [`Table::from_language_map`] folds a language
//! map into rows and [`LanguageMap::from_tables`] folds rows back into a language map.

use std::collections::HashMap;

use serde_json::Value;

use crate::types::{LanguageMap, Translations};

/// Header label of the column holding the translation key. Never a language code.
pub const RESERVED_KEY: &str = "_key_";

/// A single row of the translation table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// The translation key.
    pub key: String,
    /// Language code → value. Languages without a translation are absent.
    pub values: Translations,
}

impl TableRow {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: Translations::new(),
        }
    }

    /// Sets the value for one language.
    pub fn set(&mut self, language: impl Into<String>, value: Value) {
        self.values.insert(language.into(), value);
    }

    /// Gets the value for one language.
    pub fn get(&self, language: &str) -> Option<&Value> {
        self.values.get(language)
    }
}

/// A translation table with its language columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Language codes in column order.
    pub languages: Vec<String>,
    /// Rows, at most one per key when built by [`Table::from_language_map`].
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            languages,
            rows: Vec::new(),
        }
    }

    /// The header row: [`RESERVED_KEY`] followed by the language codes.
    pub fn header(&self) -> Vec<String> {
        std::iter::once(RESERVED_KEY.to_string())
            .chain(self.languages.iter().cloned())
            .collect()
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Finds the row for `key`, if present.
    pub fn row(&self, key: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    /// Folds a language map into rows.
    ///
    /// Columns follow the map's language order. A key shared by several languages ends
    /// up in a single row; a repeated key within the same language overwrites the cell.
    pub fn from_language_map(map: &LanguageMap) -> Self {
        let mut table = Table::new(map.languages().map(str::to_string).collect());
        let mut index: HashMap<String, usize> = HashMap::new();

        for locale in map {
            for (key, value) in &locale.translations {
                let position = *index.entry(key.clone()).or_insert_with(|| {
                    table.rows.push(TableRow::new(key.clone()));
                    table.rows.len() - 1
                });
                table.rows[position].set(locale.language.clone(), value.clone());
            }
        }

        table
    }
}

impl LanguageMap {
    /// Folds table rows into a language map.
    ///
    /// Rows are applied in order, so when several rows (or several tables) share a
    /// key, the last one wins for each language it carries.
    pub fn from_tables<I>(tables: I) -> LanguageMap
    where
        I: IntoIterator<Item = Table>,
    {
        let mut map = LanguageMap::new();
        for table in tables {
            for row in table.rows {
                for (language, value) in row.values {
                    map.insert(&language, row.key.clone(), value);
                }
            }
        }
        map
    }
}

impl From<&LanguageMap> for Table {
    fn from(map: &LanguageMap) -> Self {
        Table::from_language_map(map)
    }
}

impl From<Table> for LanguageMap {
    fn from(table: Table) -> Self {
        LanguageMap::from_tables([table])
    }
}
