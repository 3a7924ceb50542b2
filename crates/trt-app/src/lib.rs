//! Shared application service layer for thermal response test analysis.
//!
//! Frontends describe an analysis in a YAML file (measurement file, columns,
//! window, borehole parameters) and get back serializable reports.

pub mod analysis_file;
pub mod error;
pub mod query;
pub mod run_service;
pub mod schema;

// Re-export key types for convenience
pub use analysis_file::{load_analysis, save_analysis, validate_analysis};
pub use error::{AppError, AppResult};
pub use query::{DataSummary, summarize};
pub use run_service::{
    AnalysisReport, MethodReport, SweepPoint, build_method, build_methods, data_path, load_data,
    run_analysis, sweep_start_index,
};
pub use schema::{AnalysisFile, DataSourceDef, MethodDef, WindowDef};
