//! Support for `.xlsx` translation spreadsheets.
//!
//! Each sheet's first row is the header: [`RESERVED_KEY`] marks the key column and every
//! other non-empty header cell names a language. Cells are held as JSON values so that
//! strings, numbers and booleans survive a round trip.
use std::io::{BufRead, Cursor, Write};

use calamine::{Data, Reader, Xlsx};
use serde_json::{Number, Value};

use crate::{
    error::Error,
    table::{RESERVED_KEY, Table, TableRow},
    traits::Parser,
};

/// File extension of spreadsheet documents, without the dot.
pub const EXTENSION: &str = "xlsx";

/// Sheet name used when writing a table unless told otherwise.
pub const DEFAULT_SHEET_NAME: &str = "Translations";

/// One worksheet as a grid of cells. Empty cells are [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Value>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Lays a table out as a sheet: the header row, then one row per key.
    pub fn from_table(name: impl Into<String>, table: &Table) -> Self {
        let mut sheet = Sheet::new(name);
        sheet
            .rows
            .push(table.header().into_iter().map(Value::String).collect());
        for row in &table.rows {
            let mut cells = Vec::with_capacity(table.languages.len() + 1);
            cells.push(Value::String(row.key.clone()));
            for language in &table.languages {
                cells.push(row.get(language).cloned().unwrap_or(Value::Null));
            }
            sheet.rows.push(cells);
        }
        sheet
    }

    /// Reads the sheet as a translation table.
    ///
    /// Returns `Ok(None)` for a sheet without any cells. Rows whose key cell is empty
    /// are skipped, as are empty value cells and cells beyond the header.
    pub fn to_table(&self) -> Result<Option<Table>, Error> {
        let Some((header, data)) = self.rows.split_first() else {
            return Ok(None);
        };

        let labels: Vec<Option<String>> = header.iter().map(cell_text).collect();
        let key_column = labels
            .iter()
            .position(|label| label.as_deref() == Some(RESERVED_KEY))
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "sheet `{}` has no `{}` header column",
                    self.name, RESERVED_KEY
                ))
            })?;

        let columns: Vec<(usize, String)> = labels
            .into_iter()
            .enumerate()
            .filter(|(index, _)| *index != key_column)
            .filter_map(|(index, label)| label.map(|label| (index, label)))
            .filter(|(_, label)| label != RESERVED_KEY)
            .collect();

        let mut table = Table::new(columns.iter().map(|(_, label)| label.clone()).collect());
        for cells in data {
            let Some(key) = cells.get(key_column).and_then(cell_text) else {
                continue;
            };
            let mut row = TableRow::new(key);
            for (index, language) in &columns {
                match cells.get(*index) {
                    None | Some(Value::Null) => {}
                    Some(Value::String(s)) if s.is_empty() => {}
                    Some(value) => row.set(language.clone(), value.clone()),
                }
            }
            table.push_row(row);
        }

        Ok(Some(table))
    }
}

/// A spreadsheet document: its sheets in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-sheet workbook holding `table`.
    pub fn from_table(table: &Table, sheet_name: &str) -> Self {
        Workbook {
            sheets: vec![Sheet::from_table(sheet_name, table)],
        }
    }

    /// Parses a workbook, reading at most `max_sheets` sheets when given.
    pub fn from_reader_limited<R: BufRead>(
        mut reader: R,
        max_sheets: Option<usize>,
    ) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let mut document: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
        let names = document.sheet_names().to_vec();
        let limit = max_sheets.unwrap_or(names.len());

        let mut sheets = Vec::new();
        for name in names.into_iter().take(limit) {
            let range = document.worksheet_range(&name)?;
            let rows: Vec<Vec<Value>> = range
                .rows()
                .map(|row| row.iter().map(cell_to_value).collect::<Vec<_>>())
                .collect();
            sheets.push(Sheet { name, rows });
        }

        Ok(Workbook { sheets })
    }

    /// Reads every sheet as a translation table, skipping sheets without cells.
    pub fn to_tables(&self) -> Result<Vec<Table>, Error> {
        let mut tables = Vec::new();
        for sheet in &self.sheets {
            if let Some(table) = sheet.to_table()? {
                tables.push(table);
            }
        }
        Ok(tables)
    }
}

impl Parser for Workbook {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        Workbook::from_reader_limited(reader, None)
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut document = rust_xlsxwriter::Workbook::new();

        for sheet in &self.sheets {
            let worksheet = document.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            for (row_index, cells) in sheet.rows.iter().enumerate() {
                let row = u32::try_from(row_index).map_err(|_| {
                    Error::invalid_input(format!("sheet `{}` has too many rows", sheet.name))
                })?;
                for (column_index, cell) in cells.iter().enumerate() {
                    let column = u16::try_from(column_index).map_err(|_| {
                        Error::invalid_input(format!("sheet `{}` has too many columns", sheet.name))
                    })?;
                    match cell {
                        Value::Null => {}
                        Value::String(text) => {
                            worksheet.write_string(row, column, text)?;
                        }
                        Value::Bool(flag) => {
                            worksheet.write_boolean(row, column, *flag)?;
                        }
                        Value::Number(number) => match number.as_f64() {
                            Some(float) => {
                                worksheet.write_number(row, column, float)?;
                            }
                            None => {
                                worksheet.write_string(row, column, number.to_string())?;
                            }
                        },
                        nested => {
                            worksheet.write_string(row, column, nested.to_string())?;
                        }
                    }
                }
            }
        }

        let buffer = document.save_to_buffer()?;
        writer.write_all(&buffer)?;
        Ok(())
    }
}

/// Converts a spreadsheet cell into a JSON value.
///
/// Integral floats become integers, since spreadsheets store every number as a float.
/// Dates, durations and error cells keep their display text.
fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(text) => Value::String(text.clone()),
        Data::Bool(flag) => Value::Bool(*flag),
        Data::Int(int) => Value::Number((*int).into()),
        Data::Float(float) => float_to_value(*float),
        other => Value::String(other.to_string()),
    }
}

fn float_to_value(float: f64) -> Value {
    if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        return Value::Number((float as i64).into());
    }
    Number::from_f64(float)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(float.to_string()))
}

/// Text of a header or key cell; `None` when the cell is empty.
fn cell_text(cell: &Value) -> Option<String> {
    match cell {
        Value::Null => None,
        Value::String(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        other => Some(other.to_string()),
    }
}
