//! trt-methods: analysis methods for thermal response tests.
//!
//! Every method turns the steady-state window of a [`TrtData`](trt_data::TrtData)
//! store into a [`MethodResult`] holding the effective ground thermal
//! conductivity and the borehole thermal resistance. Methods implement the
//! [`Method`] trait so new models can sit next to the infinite line source
//! without touching the data store.
//!
//! # Example
//!
//! ```no_run
//! use trt_core::units::m;
//! use trt_data::{ColumnSpec, CsvFormat, TemperatureColumns, TrtData, TrtOptions};
//! use trt_methods::{Ils, IlsParameters, Method};
//!
//! let columns = ColumnSpec::new("t [s]", TemperatureColumns::Average("Tf [degC]".into()))
//!     .with_power("P [W]");
//! let data = TrtData::load(
//!     "data/Linz.csv",
//!     &columns,
//!     CsvFormat::default().with_decimal_point(','),
//!     TrtOptions::default().with_undisturbed_ground_temperature(11.7),
//! )
//! .unwrap();
//!
//! let ils = Ils::new(IlsParameters::new(m(150.0), m(0.0665), 2.3e6).unwrap());
//! let result = ils.evaluate(&data).unwrap();
//! println!(
//!     "ks = {:.3} W/(mK), Rb = {:.4} mK/W",
//!     result.thermal_conductivity(),
//!     result.borehole_resistance()
//! );
//! ```

pub mod error;
pub mod ils;
pub mod result;
pub mod traits;

// Re-exports
pub use error::{EstimateResult, MethodError};
pub use ils::{Ils, IlsParameters};
pub use result::MethodResult;
pub use traits::Method;
