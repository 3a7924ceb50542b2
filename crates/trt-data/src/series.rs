//! Thermal response test time series with a movable steady-state window.
//!
//! Raw arrays are fixed at construction. Every windowed or derived view is
//! computed from the current start index on each call, so moving the window
//! can never leave a stale view behind.

use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};
use trt_core::numeric::mean;

use crate::columns::{ColumnSpec, RawColumns, TemperatureColumns};
use crate::error::{DataError, DataResult};
use crate::format::CsvFormat;
use crate::table::Table;

/// Construction options that are not measurement columns.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrtOptions {
    /// Constant injected power (W). Overrides any loaded power column.
    pub average_power: Option<f64>,
    /// First sample of the steady-state window.
    pub start_index: usize,
    /// Undisturbed ground temperature (°C).
    pub undisturbed_ground_temperature: Option<f64>,
}

impl TrtOptions {
    pub fn with_average_power(mut self, power_w: f64) -> Self {
        self.average_power = Some(power_w);
        self
    }

    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn with_undisturbed_ground_temperature(mut self, t_degc: f64) -> Self {
        self.undisturbed_ground_temperature = Some(t_degc);
        self
    }
}

/// Convert a signed start index from user input.
///
/// # Errors
/// `Configuration` for negative values.
pub fn start_index_from_signed(index: i64) -> DataResult<usize> {
    usize::try_from(index).map_err(|_| {
        DataError::configuration(format!(
            "start index must not be negative, got {index}"
        ))
    })
}

/// Time, temperature and power samples of one thermal response test.
#[derive(Debug, Clone, PartialEq)]
pub struct TrtData {
    time: Vec<f64>,
    temperature: Vec<f64>,
    /// Empty when no power column was loaded.
    power: Vec<f64>,
    start_index: usize,
    average_power: Option<f64>,
    undisturbed_ground_temperature: Option<f64>,
}

impl TrtData {
    /// Build the store from loaded columns.
    ///
    /// # Errors
    /// - `Configuration` if the temperature source is incomplete, no power
    ///   source is given, or the start index exceeds the series length
    /// - `LengthMismatch` if a column is not aligned with the time column
    pub fn from_columns(columns: RawColumns, options: TrtOptions) -> DataResult<Self> {
        let RawColumns {
            time,
            temperature_average,
            temperature_inlet,
            temperature_outlet,
            power,
        } = columns;

        let n = time.len();
        let temperature = match TemperatureColumns::resolve(
            temperature_average,
            temperature_inlet,
            temperature_outlet,
        )? {
            TemperatureColumns::Average(values) => {
                check_aligned("average temperature", n, &values)?;
                values
            }
            TemperatureColumns::InletOutlet { inlet, outlet } => {
                check_aligned("inlet temperature", n, &inlet)?;
                check_aligned("outlet temperature", n, &outlet)?;
                inlet
                    .iter()
                    .zip(&outlet)
                    .map(|(t_in, t_out)| (t_in + t_out) / 2.0)
                    .collect()
            }
        };

        let power = power.unwrap_or_default();
        if !power.is_empty() {
            check_aligned("power", n, &power)?;
        }

        check_start_index(options.start_index, n)?;

        if power.is_empty() && options.average_power.is_none() {
            return Err(DataError::configuration(
                "provide either a power column or an average power",
            ));
        }
        if let Some(p) = options.average_power.filter(|p| !p.is_finite()) {
            return Err(DataError::configuration(format!(
                "average power must be finite, got {p}"
            )));
        }
        if !power.is_empty() && options.average_power.is_some() {
            tracing::warn!(
                average_power = ?options.average_power,
                "power series will be overridden by the average power"
            );
        }

        Ok(Self {
            time,
            temperature,
            power,
            start_index: options.start_index,
            average_power: options.average_power,
            undisturbed_ground_temperature: options.undisturbed_ground_temperature,
        })
    }

    /// Load a delimited text file and build the store from the selected columns.
    pub fn load<P: AsRef<Path>>(
        path: P,
        columns: &ColumnSpec,
        format: CsvFormat,
        options: TrtOptions,
    ) -> DataResult<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading thermal response test data");
        let table = Table::from_path(path, format)?;
        Self::from_table(&table, columns, options)
    }

    /// Like [`TrtData::load`], reading from an in-memory source.
    pub fn from_reader<R: std::io::Read>(
        reader: R,
        columns: &ColumnSpec,
        format: CsvFormat,
        options: TrtOptions,
    ) -> DataResult<Self> {
        let table = Table::from_reader(reader, format)?;
        Self::from_table(&table, columns, options)
    }

    /// Select the configured columns from a parsed table.
    pub fn from_table(table: &Table, columns: &ColumnSpec, options: TrtOptions) -> DataResult<Self> {
        let mut raw = RawColumns {
            time: table.column(&columns.time)?,
            ..Default::default()
        };
        match &columns.temperature {
            TemperatureColumns::Average(name) => {
                raw.temperature_average = Some(table.column(name)?);
            }
            TemperatureColumns::InletOutlet { inlet, outlet } => {
                raw.temperature_inlet = Some(table.column(inlet)?);
                raw.temperature_outlet = Some(table.column(outlet)?);
            }
        }
        if let Some(name) = &columns.power {
            raw.power = Some(table.column(name)?);
        }
        Self::from_columns(raw, options)
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Number of samples in the steady-state window.
    pub fn window_len(&self) -> usize {
        self.len() - self.start_index
    }

    /// Move the start of the steady-state window.
    ///
    /// # Errors
    /// `Configuration` if `index` exceeds the series length; the window is left unchanged.
    pub fn set_start_index(&mut self, index: usize) -> DataResult<()> {
        check_start_index(index, self.len())?;
        self.start_index = index;
        Ok(())
    }

    pub fn undisturbed_ground_temperature(&self) -> Option<f64> {
        self.undisturbed_ground_temperature
    }

    pub fn set_undisturbed_ground_temperature(&mut self, t_degc: Option<f64>) {
        self.undisturbed_ground_temperature = t_degc;
    }

    /// Constant power that replaces the power column, if any.
    pub fn average_power_override(&self) -> Option<f64> {
        self.average_power
    }

    pub fn time_raw(&self) -> &[f64] {
        &self.time
    }

    pub fn temperature_raw(&self) -> &[f64] {
        &self.temperature
    }

    /// Loaded power column; empty if none was given.
    pub fn power_raw(&self) -> &[f64] {
        &self.power
    }

    pub fn time_window(&self) -> &[f64] {
        &self.time[self.start_index..]
    }

    pub fn temperature_window(&self) -> &[f64] {
        &self.temperature[self.start_index..]
    }

    /// Windowed power, or the override repeated over the window.
    pub fn power_window(&self) -> Cow<'_, [f64]> {
        match self.average_power {
            Some(p) => Cow::Owned(vec![p; self.window_len()]),
            None => Cow::Borrowed(&self.power[self.start_index..]),
        }
    }

    /// Natural logarithm of the windowed time.
    ///
    /// # Errors
    /// `Numeric` if a windowed time value is not strictly positive.
    pub fn log_time_window(&self) -> DataResult<Vec<f64>> {
        self.time_window()
            .iter()
            .enumerate()
            .map(|(offset, &t)| {
                if t > 0.0 {
                    Ok(t.ln())
                } else {
                    Err(DataError::numeric(format!(
                        "logarithm undefined for time {t} at index {}",
                        self.start_index + offset
                    )))
                }
            })
            .collect()
    }

    /// Override power if set, otherwise the mean of the windowed power.
    ///
    /// # Errors
    /// `Numeric` if the window is empty and no override is set.
    pub fn average_power(&self) -> DataResult<f64> {
        if let Some(p) = self.average_power {
            return Ok(p);
        }
        mean(&self.power[self.start_index..])
            .ok_or_else(|| DataError::numeric("average power of an empty window"))
    }

    pub fn has_power_override(&self) -> bool {
        self.average_power.is_some()
    }
}

fn check_aligned(column: &str, expected: usize, values: &[f64]) -> DataResult<()> {
    if values.len() != expected {
        return Err(DataError::LengthMismatch {
            column: column.to_string(),
            expected,
            got: values.len(),
        });
    }
    Ok(())
}

fn check_start_index(index: usize, len: usize) -> DataResult<()> {
    if index > len {
        return Err(DataError::configuration(format!(
            "start index {index} is outside the series of length {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrtData {
        let columns = RawColumns::with_average_temperature(
            vec![60.0, 120.0, 180.0, 240.0, 300.0],
            vec![12.0, 13.0, 13.5, 13.8, 14.0],
        )
        .with_power(vec![7000.0, 7100.0, 7200.0, 7300.0, 7400.0]);
        TrtData::from_columns(columns, TrtOptions::default()).unwrap()
    }

    #[test]
    fn windows_follow_start_index() {
        let mut data = sample();
        assert_eq!(data.window_len(), 5);
        data.set_start_index(2).unwrap();
        assert_eq!(data.time_window(), &[180.0, 240.0, 300.0]);
        assert_eq!(data.temperature_window(), &[13.5, 13.8, 14.0]);
        assert_eq!(&*data.power_window(), &[7200.0, 7300.0, 7400.0]);
        assert_eq!(data.average_power().unwrap(), 7300.0);
    }

    #[test]
    fn start_index_may_equal_length() {
        let mut data = sample();
        data.set_start_index(5).unwrap();
        assert!(data.time_window().is_empty());
        assert!(data.log_time_window().unwrap().is_empty());
        assert!(matches!(
            data.average_power(),
            Err(DataError::Numeric { .. })
        ));
    }

    #[test]
    fn rejected_start_index_keeps_previous_window() {
        let mut data = sample();
        data.set_start_index(1).unwrap();
        let err = data.set_start_index(6).unwrap_err();
        assert!(matches!(err, DataError::Configuration { .. }));
        assert_eq!(data.start_index(), 1);
    }

    #[test]
    fn inlet_outlet_mean_is_temperature() {
        let columns = RawColumns::with_inlet_outlet(
            vec![1.0, 2.0],
            vec![10.0, 12.0],
            vec![8.0, 9.0],
        )
        .with_power(vec![1.0, 1.0]);
        let data = TrtData::from_columns(columns, TrtOptions::default()).unwrap();
        assert_eq!(data.temperature_raw(), &[9.0, 10.5]);
    }

    #[test]
    fn override_replaces_power_column() {
        let columns = RawColumns::with_average_temperature(vec![1.0, 2.0, 3.0], vec![1.0; 3])
            .with_power(vec![5.0, 6.0, 7.0]);
        let options = TrtOptions::default()
            .with_average_power(8000.0)
            .with_start_index(1);
        let data = TrtData::from_columns(columns, options).unwrap();
        assert!(data.has_power_override());
        assert_eq!(&*data.power_window(), &[8000.0, 8000.0]);
        assert_eq!(data.average_power().unwrap(), 8000.0);
        assert_eq!(data.power_raw(), &[5.0, 6.0, 7.0]);
    }

    #[test]
    fn empty_series_with_override_has_empty_windows() {
        let columns = RawColumns::with_average_temperature(Vec::new(), Vec::new());
        let mut data =
            TrtData::from_columns(columns, TrtOptions::default().with_average_power(50.0)).unwrap();
        assert!(data.is_empty());
        data.set_start_index(0).unwrap();
        assert!(data.time_window().is_empty());
        assert!(data.power_window().is_empty());
        assert_eq!(data.average_power().unwrap(), 50.0);
        assert!(data.set_start_index(1).is_err());
    }

    /// Collects formatted log lines written while `f` runs.
    fn captured_logs(f: impl FnOnce()) -> String {
        use std::sync::{Arc, Mutex};

        struct LogBuffer(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for LogBuffer {
            fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(bytes);
                Ok(bytes.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&buffer);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || LogBuffer(Arc::clone(&sink)))
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn override_with_power_column_warns() {
        let logs = captured_logs(|| {
            let columns = RawColumns::with_average_temperature(vec![1.0, 2.0], vec![1.0, 2.0])
                .with_power(vec![5.0, 6.0]);
            TrtData::from_columns(columns, TrtOptions::default().with_average_power(8000.0))
                .unwrap();
        });
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("power series will be overridden"), "{logs}");
    }

    #[test]
    fn single_power_source_does_not_warn() {
        let logs = captured_logs(|| {
            let column_only = RawColumns::with_average_temperature(vec![1.0, 2.0], vec![1.0, 2.0])
                .with_power(vec![5.0, 6.0]);
            TrtData::from_columns(column_only, TrtOptions::default()).unwrap();

            let override_only = RawColumns::with_average_temperature(vec![1.0, 2.0], vec![1.0, 2.0]);
            TrtData::from_columns(override_only, TrtOptions::default().with_average_power(8000.0))
                .unwrap();
        });
        assert!(!logs.contains("overridden"), "{logs}");
    }

    #[test]
    fn override_alone_is_enough() {
        let columns = RawColumns::with_average_temperature(vec![1.0, 2.0], vec![1.0, 2.0]);
        let data =
            TrtData::from_columns(columns, TrtOptions::default().with_average_power(50.0)).unwrap();
        assert!(data.power_raw().is_empty());
        assert_eq!(data.average_power().unwrap(), 50.0);
    }

    #[test]
    fn non_positive_time_has_no_logarithm() {
        let columns = RawColumns::with_average_temperature(vec![0.0, 60.0], vec![1.0, 2.0])
            .with_power(vec![1.0, 1.0]);
        let mut data = TrtData::from_columns(columns, TrtOptions::default()).unwrap();
        assert!(matches!(
            data.log_time_window(),
            Err(DataError::Numeric { .. })
        ));
        data.set_start_index(1).unwrap();
        assert_eq!(data.log_time_window().unwrap(), vec![60.0_f64.ln()]);
    }

    #[test]
    fn misaligned_columns_are_rejected() {
        let columns = RawColumns::with_average_temperature(vec![1.0, 2.0], vec![1.0])
            .with_power(vec![1.0, 1.0]);
        let err = TrtData::from_columns(columns, TrtOptions::default()).unwrap_err();
        assert!(matches!(err, DataError::LengthMismatch { .. }));
    }

    #[test]
    fn signed_start_index() {
        assert_eq!(start_index_from_signed(4).unwrap(), 4);
        assert!(matches!(
            start_index_from_signed(-1),
            Err(DataError::Configuration { .. })
        ));
    }
}
