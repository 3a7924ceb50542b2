//! Smoke tests for the trt-app service layer.

use std::f64::consts::PI;
use std::path::PathBuf;

use trt_app::*;

/// Write a measurement file and an analysis file into a fresh directory.
fn write_project(dir_name: &str, analysis_yaml: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(dir_name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    // ks = 2.0 W/(mK) for Q = 6000 W over L = 120 m.
    let slope = 6000.0 / (4.0 * PI * 120.0 * 2.0);
    let mut csv = String::from("t [s];Tf [degC];P [W]\n");
    for i in 1..=150 {
        let t = 600.0 * i as f64;
        let tf = slope * t.ln() + 5.0;
        csv.push_str(&format!("{t};{tf};6000\n").replace('.', ","));
    }
    std::fs::write(dir.join("measurements.csv"), csv).unwrap();

    let path = dir.join("analysis.yaml");
    std::fs::write(&path, analysis_yaml).unwrap();
    path
}

const ANALYSIS: &str = r#"
version: 1
name: Synthetic borehole
data:
  path: measurements.csv
  format:
    field_separator: ";"
    decimal_point: ","
  time_column: "t [s]"
  temperature_column: "Tf [degC]"
  power_column: "P [W]"
window:
  start_index: 10
  undisturbed_ground_temperature_degc: 11.0
methods:
  - type: ils
    borehole_length_m: 120.0
    borehole_radius_m: 0.07
    volumetric_heat_capacity_j_per_m3k: 2.2e6
"#;

#[test]
fn run_analysis_from_yaml() {
    let path = write_project("trt_app_run_analysis", ANALYSIS);
    let analysis = load_analysis(&path).expect("Failed to load analysis");
    assert_eq!(analysis.methods.len(), 1);

    let report = run_analysis(&analysis, path.parent().unwrap()).expect("Analysis should run");
    assert_eq!(report.name, "Synthetic borehole");
    assert_eq!(report.summary.sample_count, 150);
    assert_eq!(report.summary.start_index, 10);
    assert_eq!(report.summary.window_count, 140);
    assert_eq!(report.estimates.len(), 1);
    assert_eq!(report.estimates[0].method, "ILS");

    let ks = report.estimates[0].result.thermal_conductivity();
    assert!((ks - 2.0).abs() < 1e-9, "ks = {ks}");
    assert!(report.estimates[0].result.borehole_resistance().is_finite());

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["estimates"][0]["result"]["thermal_conductivity"].is_number());
}

#[test]
fn sweep_over_loaded_data() {
    let path = write_project("trt_app_sweep", ANALYSIS);
    let analysis = load_analysis(&path).unwrap();
    let data = load_data(&analysis, path.parent().unwrap()).unwrap();
    let method = build_method(&analysis.methods[0]).unwrap();

    let points = sweep_start_index(&data, method.as_ref(), (0..150).step_by(30));
    assert_eq!(points.len(), 5);
    for p in &points {
        let ks = p.result.expect("sweep point should succeed").thermal_conductivity();
        assert!((ks - 2.0).abs() < 1e-9);
    }
    assert_eq!(data.start_index(), 10);
}

#[test]
fn negative_start_index_fails_validation() {
    let yaml = ANALYSIS.replace("start_index: 10", "start_index: -1");
    let path = write_project("trt_app_negative_start", &yaml);
    let err = load_analysis(&path).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "{err}");
}

#[test]
fn half_temperature_pair_fails_validation() {
    let yaml = ANALYSIS.replace(
        "temperature_column: \"Tf [degC]\"",
        "inlet_temperature_column: \"Tf [degC]\"",
    );
    let path = write_project("trt_app_half_pair", &yaml);
    let err = load_analysis(&path).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "{err}");
}

#[test]
fn start_index_beyond_data_fails_on_load() {
    let yaml = ANALYSIS.replace("start_index: 10", "start_index: 151");
    let path = write_project("trt_app_start_beyond", &yaml);
    let analysis = load_analysis(&path).unwrap();
    let err = run_analysis(&analysis, path.parent().unwrap()).unwrap_err();
    assert!(matches!(err, AppError::Data(_)), "{err}");
}

#[test]
fn missing_ground_temperature_fails_validation() {
    let yaml = ANALYSIS.replace("  undisturbed_ground_temperature_degc: 11.0\n", "");
    let path = write_project("trt_app_no_ground", &yaml);
    let err = load_analysis(&path).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "{err}");
}

#[test]
fn save_and_reload_analysis() {
    let path = write_project("trt_app_roundtrip", ANALYSIS);
    let analysis = load_analysis(&path).unwrap();

    let copy = path.with_file_name("analysis_copy.yaml");
    save_analysis(&copy, &analysis).unwrap();
    let reloaded = load_analysis(&copy).unwrap();
    assert_eq!(analysis, reloaded);
}
