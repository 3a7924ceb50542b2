//! Analysis file schema.

use serde::{Deserialize, Serialize};
use trt_data::CsvFormat;

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisFile {
    pub version: u32,
    pub name: String,
    pub data: DataSourceDef,
    #[serde(default)]
    pub window: WindowDef,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

/// Measurement file and the columns to read from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataSourceDef {
    /// Relative paths resolve against the analysis file's directory.
    pub path: String,
    #[serde(default)]
    pub format: CsvFormat,
    pub time_column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inlet_temperature_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlet_temperature_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_column: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WindowDef {
    /// Signed so that negative values from hand-written files are reported, not wrapped.
    #[serde(default)]
    pub start_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_power_w: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undisturbed_ground_temperature_degc: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum MethodDef {
    #[serde(rename = "ils", alias = "ILS")]
    Ils {
        borehole_length_m: f64,
        borehole_radius_m: f64,
        volumetric_heat_capacity_j_per_m3k: f64,
    },
}

impl MethodDef {
    pub fn label(&self) -> &'static str {
        match self {
            MethodDef::Ils { .. } => "ILS",
        }
    }
}
