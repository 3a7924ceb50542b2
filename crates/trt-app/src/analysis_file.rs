//! Analysis file loading, saving and validation.

use std::path::Path;

use trt_data::{ColumnSpec, start_index_from_signed};
use trt_methods::IlsParameters;

use crate::error::{AppError, AppResult};
use crate::schema::{AnalysisFile, LATEST_VERSION, MethodDef};

/// Load an analysis from a YAML file.
pub fn load_analysis(path: &Path) -> AppResult<AnalysisFile> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::AnalysisFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let analysis: AnalysisFile = serde_yaml::from_str(&content)
        .map_err(|e| AppError::AnalysisFile(format!("Failed to parse analysis YAML: {}", e)))?;

    validate_analysis(&analysis)?;
    Ok(analysis)
}

/// Save an analysis to a YAML file.
pub fn save_analysis(path: &Path, analysis: &AnalysisFile) -> AppResult<()> {
    validate_analysis(analysis)?;
    let content = serde_yaml::to_string(analysis)
        .map_err(|e| AppError::AnalysisFile(format!("Failed to serialize analysis: {}", e)))?;

    std::fs::write(path, content).map_err(|e| AppError::AnalysisFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Check everything that can be checked without reading the measurement file.
pub fn validate_analysis(analysis: &AnalysisFile) -> AppResult<()> {
    if analysis.version > LATEST_VERSION {
        return Err(AppError::Validation(format!(
            "Unsupported analysis version: {}",
            analysis.version
        )));
    }

    analysis
        .data
        .format
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    column_spec(analysis).map_err(|e| AppError::Validation(e.to_string()))?;
    start_index_from_signed(analysis.window.start_index)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if let Some(p) = analysis.window.average_power_w.filter(|p| !p.is_finite()) {
        return Err(AppError::Validation(format!(
            "average power must be finite, got {p}"
        )));
    }

    if analysis.methods.is_empty() {
        return Err(AppError::Validation(
            "Analysis must configure at least one method".to_string(),
        ));
    }
    for (i, method) in analysis.methods.iter().enumerate() {
        match method {
            MethodDef::Ils {
                borehole_length_m,
                borehole_radius_m,
                volumetric_heat_capacity_j_per_m3k,
            } => {
                IlsParameters::from_si(
                    *borehole_length_m,
                    *borehole_radius_m,
                    *volumetric_heat_capacity_j_per_m3k,
                )
                .map_err(|e| AppError::Validation(format!("method {i} ({}): {e}", method.label())))?;
            }
        }
    }
    if analysis.window.undisturbed_ground_temperature_degc.is_none() {
        return Err(AppError::Validation(
            "window.undisturbed_ground_temperature_degc is required".to_string(),
        ));
    }

    Ok(())
}

pub(crate) fn column_spec(analysis: &AnalysisFile) -> trt_data::DataResult<ColumnSpec> {
    let data = &analysis.data;
    ColumnSpec::from_names(
        data.time_column.clone(),
        data.temperature_column.clone(),
        data.inlet_temperature_column.clone(),
        data.outlet_temperature_column.clone(),
        data.power_column.clone(),
    )
}
