//! Delimited text table with a header row.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{DataError, DataResult};
use crate::format::CsvFormat;

/// Header names and the raw cells of every column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    cells: Vec<Vec<String>>,
    format: CsvFormat,
}

impl Table {
    /// Read a table from a file.
    pub fn from_path<P: AsRef<Path>>(path: P, format: CsvFormat) -> DataResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file), format)
    }

    /// Read a table from any reader. Cells are kept as text until a column is requested.
    pub fn from_reader<R: Read>(reader: R, format: CsvFormat) -> DataResult<Self> {
        format.validate()?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(format.field_separator as u8)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut cells = vec![Vec::new(); headers.len()];

        for record in csv_reader.records() {
            let record = record?;
            for (column, value) in cells.iter_mut().zip(record.iter()) {
                column.push(value.to_string());
            }
        }

        tracing::debug!(
            columns = headers.len(),
            rows = cells.first().map(Vec::len).unwrap_or(0),
            "loaded measurement table"
        );

        Ok(Self {
            headers,
            cells,
            format,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Parse a named column as numbers.
    pub fn column(&self, name: &str) -> DataResult<Vec<f64>> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn {
                name: name.to_string(),
            })?;

        self.cells[idx]
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                self.format
                    .parse_number(cell)
                    .ok_or_else(|| DataError::Parse {
                        // 1-based, counting the header line
                        row: row + 2,
                        column: name.to_string(),
                        value: cell.clone(),
                    })
            })
            .collect()
    }
}
