//! Column selection and raw column arrays.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};

/// Source of the fluid temperature: one averaged column, or inlet and outlet
/// columns whose elementwise mean is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureColumns<T> {
    Average(T),
    InletOutlet { inlet: T, outlet: T },
}

impl<T> TemperatureColumns<T> {
    /// Resolve the loose optional form into a temperature source.
    ///
    /// Inlet and outlet must come as a pair. An average column takes
    /// precedence over a complete pair.
    pub fn resolve(average: Option<T>, inlet: Option<T>, outlet: Option<T>) -> DataResult<Self> {
        match (average, inlet, outlet) {
            (_, Some(_), None) | (_, None, Some(_)) => Err(DataError::configuration(
                "both the inlet and the outlet temperature must be provided",
            )),
            (Some(average), _, _) => Ok(Self::Average(average)),
            (None, Some(inlet), Some(outlet)) => Ok(Self::InletOutlet { inlet, outlet }),
            (None, None, None) => Err(DataError::configuration(
                "either the average fluid temperature or the inlet and outlet temperatures must be provided",
            )),
        }
    }
}

/// Names of the columns to read from a measurement table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub time: String,
    pub temperature: TemperatureColumns<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
}

impl ColumnSpec {
    pub fn new(time: impl Into<String>, temperature: TemperatureColumns<String>) -> Self {
        Self {
            time: time.into(),
            temperature,
            power: None,
        }
    }

    pub fn with_power(mut self, power: impl Into<String>) -> Self {
        self.power = Some(power.into());
        self
    }

    /// Build from optional column names, enforcing the temperature pairing rules.
    pub fn from_names(
        time: impl Into<String>,
        average: Option<String>,
        inlet: Option<String>,
        outlet: Option<String>,
        power: Option<String>,
    ) -> DataResult<Self> {
        Ok(Self {
            time: time.into(),
            temperature: TemperatureColumns::resolve(average, inlet, outlet)?,
            power,
        })
    }
}

/// Already-loaded measurement columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawColumns {
    pub time: Vec<f64>,
    pub temperature_average: Option<Vec<f64>>,
    pub temperature_inlet: Option<Vec<f64>>,
    pub temperature_outlet: Option<Vec<f64>>,
    pub power: Option<Vec<f64>>,
}

impl RawColumns {
    pub fn with_average_temperature(time: Vec<f64>, temperature: Vec<f64>) -> Self {
        Self {
            time,
            temperature_average: Some(temperature),
            ..Default::default()
        }
    }

    pub fn with_inlet_outlet(time: Vec<f64>, inlet: Vec<f64>, outlet: Vec<f64>) -> Self {
        Self {
            time,
            temperature_inlet: Some(inlet),
            temperature_outlet: Some(outlet),
            ..Default::default()
        }
    }

    pub fn with_power(mut self, power: Vec<f64>) -> Self {
        self.power = Some(power);
        self
    }
}
