//! Query helpers for loaded measurement data.

use serde::Serialize;
use trt_core::numeric::mean;
use trt_data::TrtData;

/// Overview of a measurement store and its current steady-state window.
#[derive(Debug, Clone, Serialize)]
pub struct DataSummary {
    pub sample_count: usize,
    pub start_index: usize,
    pub window_count: usize,
    pub time_range_s: (f64, f64),
    pub window_time_range_s: Option<(f64, f64)>,
    pub average_power_w: Option<f64>,
    pub power_overridden: bool,
    pub mean_window_temperature_degc: Option<f64>,
    pub undisturbed_ground_temperature_degc: Option<f64>,
}

pub fn summarize(data: &TrtData) -> DataSummary {
    let time = data.time_raw();
    let window = data.time_window();
    let range = |t: &[f64]| match (t.first(), t.last()) {
        (Some(&a), Some(&b)) => Some((a, b)),
        _ => None,
    };

    DataSummary {
        sample_count: data.len(),
        start_index: data.start_index(),
        window_count: data.window_len(),
        time_range_s: range(time).unwrap_or((0.0, 0.0)),
        window_time_range_s: range(window),
        average_power_w: data.average_power().ok(),
        power_overridden: data.has_power_override(),
        mean_window_temperature_degc: mean(data.temperature_window()),
        undisturbed_ground_temperature_degc: data.undisturbed_ground_temperature(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trt_data::{RawColumns, TrtOptions};

    #[test]
    fn summary_reflects_window() {
        let mut data = TrtData::from_columns(
            RawColumns::with_average_temperature(vec![60.0, 120.0, 180.0], vec![10.0, 12.0, 14.0])
                .with_power(vec![100.0, 200.0, 300.0]),
            TrtOptions::default(),
        )
        .unwrap();
        data.set_start_index(1).unwrap();
        let summary = summarize(&data);
        assert_eq!(summary.sample_count, 3);
        assert_eq!(summary.window_count, 2);
        assert_eq!(summary.time_range_s, (60.0, 180.0));
        assert_eq!(summary.window_time_range_s, Some((120.0, 180.0)));
        assert_eq!(summary.average_power_w, Some(250.0));
        assert_eq!(summary.mean_window_temperature_degc, Some(13.0));
        assert!(!summary.power_overridden);
    }

    #[test]
    fn empty_window_has_no_statistics() {
        let mut data = TrtData::from_columns(
            RawColumns::with_average_temperature(vec![60.0], vec![10.0]).with_power(vec![1.0]),
            TrtOptions::default(),
        )
        .unwrap();
        data.set_start_index(1).unwrap();
        let summary = summarize(&data);
        assert_eq!(summary.window_time_range_s, None);
        assert_eq!(summary.average_power_w, None);
        assert_eq!(summary.mean_window_temperature_degc, None);
    }
}
