//! Delimited text format options.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};

/// Field separator and decimal point of a measurement file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvFormat {
    pub field_separator: char,
    pub decimal_point: char,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            field_separator: ';',
            decimal_point: '.',
        }
    }
}

impl CsvFormat {
    pub fn with_field_separator(mut self, separator: char) -> Self {
        self.field_separator = separator;
        self
    }

    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    /// Both characters must be single-byte ASCII and distinct.
    pub fn validate(&self) -> DataResult<()> {
        if !self.field_separator.is_ascii() {
            return Err(DataError::configuration(format!(
                "field separator {:?} is not an ASCII character",
                self.field_separator
            )));
        }
        if !self.decimal_point.is_ascii() {
            return Err(DataError::configuration(format!(
                "decimal point {:?} is not an ASCII character",
                self.decimal_point
            )));
        }
        if self.field_separator == self.decimal_point {
            return Err(DataError::configuration(
                "field separator and decimal point must differ",
            ));
        }
        Ok(())
    }

    /// Normalize a cell to Rust float syntax and parse it.
    pub(crate) fn parse_number(&self, cell: &str) -> Option<f64> {
        let cell = cell.trim();
        if self.decimal_point == '.' {
            return cell.parse().ok();
        }
        cell.replace(self.decimal_point, ".").parse().ok()
    }
}
