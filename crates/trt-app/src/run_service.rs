//! Running configured analyses.

use std::path::{Path, PathBuf};

use serde::Serialize;
use trt_data::{TrtData, TrtOptions, start_index_from_signed};
use trt_methods::{Ils, IlsParameters, Method, MethodResult};

use crate::analysis_file::column_spec;
use crate::error::{AppError, AppResult};
use crate::query::{DataSummary, summarize};
use crate::schema::{AnalysisFile, MethodDef};

/// Outcome of one method on the configured window.
#[derive(Debug, Clone, Serialize)]
pub struct MethodReport {
    pub method: String,
    pub result: MethodResult,
}

/// Outcome of a full analysis file.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub name: String,
    pub data_path: PathBuf,
    pub summary: DataSummary,
    pub estimates: Vec<MethodReport>,
}

/// One evaluation of a start-index sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub start_index: usize,
    pub start_time_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MethodResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Resolve the data path of an analysis against `base_dir`.
pub fn data_path(analysis: &AnalysisFile, base_dir: &Path) -> PathBuf {
    let path = Path::new(&analysis.data.path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Load the measurement store an analysis describes.
pub fn load_data(analysis: &AnalysisFile, base_dir: &Path) -> AppResult<TrtData> {
    let columns = column_spec(analysis)?;
    let options = TrtOptions {
        average_power: analysis.window.average_power_w,
        start_index: start_index_from_signed(analysis.window.start_index)?,
        undisturbed_ground_temperature: analysis.window.undisturbed_ground_temperature_degc,
    };
    let data = TrtData::load(
        data_path(analysis, base_dir),
        &columns,
        analysis.data.format,
        options,
    )?;
    tracing::info!(
        samples = data.len(),
        start_index = data.start_index(),
        "measurement data loaded"
    );
    Ok(data)
}

pub fn build_method(def: &MethodDef) -> AppResult<Box<dyn Method>> {
    match def {
        MethodDef::Ils {
            borehole_length_m,
            borehole_radius_m,
            volumetric_heat_capacity_j_per_m3k,
        } => {
            let params = IlsParameters::from_si(
                *borehole_length_m,
                *borehole_radius_m,
                *volumetric_heat_capacity_j_per_m3k,
            )?;
            Ok(Box::new(Ils::new(params)))
        }
    }
}

pub fn build_methods(analysis: &AnalysisFile) -> AppResult<Vec<Box<dyn Method>>> {
    analysis.methods.iter().map(build_method).collect()
}

/// Load the data and evaluate every configured method.
pub fn run_analysis(analysis: &AnalysisFile, base_dir: &Path) -> AppResult<AnalysisReport> {
    let data = load_data(analysis, base_dir)?;
    let methods = build_methods(analysis)?;
    if methods.is_empty() {
        return Err(AppError::InvalidInput(
            "No methods configured".to_string(),
        ));
    }

    let mut estimates = Vec::with_capacity(methods.len());
    for method in &methods {
        let result = method.evaluate(&data)?;
        tracing::info!(
            method = method.name(),
            thermal_conductivity = result.thermal_conductivity(),
            borehole_resistance = result.borehole_resistance(),
            "estimate complete"
        );
        estimates.push(MethodReport {
            method: method.name().to_string(),
            result,
        });
    }

    Ok(AnalysisReport {
        name: analysis.name.clone(),
        data_path: data_path(analysis, base_dir),
        summary: summarize(&data),
        estimates,
    })
}

/// Evaluate `method` with the window starting at each of `indices`.
///
/// Failures are reported per point. `data` itself is not modified.
pub fn sweep_start_index<I>(data: &TrtData, method: &dyn Method, indices: I) -> Vec<SweepPoint>
where
    I: IntoIterator<Item = usize>,
{
    let mut work = data.clone();
    indices
        .into_iter()
        .map(|start_index| {
            let start_time_s = data.time_raw().get(start_index).copied();
            let outcome = work
                .set_start_index(start_index)
                .map_err(trt_methods::MethodError::from)
                .and_then(|()| method.evaluate(&work));
            match outcome {
                Ok(result) => SweepPoint {
                    start_index,
                    start_time_s,
                    result: Some(result),
                    error: None,
                },
                Err(e) => {
                    tracing::debug!(start_index, error = %e, "sweep point failed");
                    SweepPoint {
                        start_index,
                        start_time_s,
                        result: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trt_data::RawColumns;

    fn line_source_store() -> TrtData {
        let time: Vec<f64> = (1..=100).map(|i| 600.0 * i as f64).collect();
        let temperature = time.iter().map(|t| 1.1 * t.ln() + 4.0).collect();
        TrtData::from_columns(
            RawColumns::with_average_temperature(time, temperature),
            TrtOptions::default()
                .with_average_power(6000.0)
                .with_undisturbed_ground_temperature(12.0),
        )
        .unwrap()
    }

    #[test]
    fn sweep_reports_each_index_and_leaves_data_alone() {
        let data = line_source_store();
        let ils = Ils::new(IlsParameters::from_si(120.0, 0.07, 2.2e6).unwrap());
        let points = sweep_start_index(&data, &ils, [0, 50, 99, 100, 101]);

        assert_eq!(points.len(), 5);
        let k0 = points[0].result.unwrap().thermal_conductivity();
        let k50 = points[1].result.unwrap().thermal_conductivity();
        assert!((k0 - k50).abs() < 1e-9 * k0);
        assert_eq!(points[1].start_time_s, Some(600.0 * 51.0));

        // One sample, empty window, out of range.
        for p in &points[2..] {
            assert!(p.result.is_none());
            assert!(p.error.is_some());
        }
        assert_eq!(points[4].start_time_s, None);
        assert_eq!(data.start_index(), 0);
    }

    #[test]
    fn relative_data_path_uses_base_dir() {
        let analysis: AnalysisFile = serde_yaml::from_str(
            "version: 1\nname: t\ndata:\n  path: m.csv\n  time_column: t\n  temperature_column: T\n",
        )
        .unwrap();
        assert_eq!(
            data_path(&analysis, Path::new("/tmp/project")),
            PathBuf::from("/tmp/project/m.csv")
        );
    }
}
