//! trt-data: thermal response test measurements.
//!
//! Loads a delimited text table of time, fluid temperature and heating power,
//! and holds it as a [`TrtData`] store. All analysis reads the store through its
//! steady-state window, which starts at a caller-controlled index and can be
//! moved at any time.
//!
//! # Example
//!
//! ```no_run
//! use trt_data::{ColumnSpec, CsvFormat, TemperatureColumns, TrtData, TrtOptions};
//!
//! let columns = ColumnSpec::new("t [s]", TemperatureColumns::Average("Tf [degC]".into()))
//!     .with_power("P [W]");
//! let format = CsvFormat::default().with_decimal_point(',');
//! let options = TrtOptions::default().with_undisturbed_ground_temperature(11.7);
//!
//! let mut data = TrtData::load("data/Linz.csv", &columns, format, options).unwrap();
//! data.set_start_index(100).unwrap();
//! println!("average power: {} W", data.average_power().unwrap());
//! ```

pub mod columns;
pub mod error;
pub mod format;
pub mod series;
pub mod table;

pub use columns::{ColumnSpec, RawColumns, TemperatureColumns};
pub use error::{DataError, DataResult};
pub use format::CsvFormat;
pub use series::{TrtData, TrtOptions, start_index_from_signed};
pub use table::Table;
