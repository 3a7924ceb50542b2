use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use trt_app::{
    AppError, AppResult, AnalysisReport, DataSummary, SweepPoint, build_method, load_analysis,
    load_data, run_analysis, summarize, sweep_start_index,
};
use trt_data::{ColumnSpec, CsvFormat, TrtData, TrtOptions, start_index_from_signed};
use trt_methods::{Ils, IlsParameters, Method};

#[derive(Parser)]
#[command(name = "trt-cli")]
#[command(about = "Thermal response test analysis - ground conductivity and borehole resistance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every method configured in an analysis file
    Analyze {
        /// Path to the analysis YAML file
        analysis_path: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the infinite line source method on a measurement file
    Ils {
        #[command(flatten)]
        data: DataArgs,
        /// Borehole length in m
        #[arg(long)]
        length: f64,
        /// Borehole radius in m
        #[arg(long)]
        radius: f64,
        /// Ground volumetric heat capacity in J/(m³K)
        #[arg(long)]
        heat_capacity: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize a measurement file and its steady-state window
    Inspect {
        #[command(flatten)]
        data: DataArgs,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the first method of an analysis file over several start indices
    Sweep {
        /// Path to the analysis YAML file
        analysis_path: PathBuf,
        /// First start index
        #[arg(long, default_value_t = 0)]
        from: usize,
        /// Last start index (inclusive, defaults to the last sample)
        #[arg(long)]
        to: Option<usize>,
        /// Index increment
        #[arg(long, default_value_t = 10)]
        step: usize,
        /// Print the points as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct DataArgs {
    /// Path to the measurement file
    data_path: PathBuf,
    /// Time column (s)
    #[arg(long)]
    time: String,
    /// Average fluid temperature column (°C)
    #[arg(long)]
    temp: Option<String>,
    /// Inlet fluid temperature column (°C)
    #[arg(long)]
    temp_in: Option<String>,
    /// Outlet fluid temperature column (°C)
    #[arg(long)]
    temp_out: Option<String>,
    /// Power column (W)
    #[arg(long)]
    power: Option<String>,
    /// Constant power in W, overrides the power column
    #[arg(long)]
    average_power: Option<f64>,
    /// Undisturbed ground temperature (°C)
    #[arg(long)]
    ground_temp: Option<f64>,
    /// First sample of the steady-state window
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    start_index: i64,
    /// Field separator
    #[arg(long, default_value_t = ';')]
    sep: char,
    /// Decimal point
    #[arg(long, default_value_t = '.')]
    decimal: char,
}

impl DataArgs {
    fn load(&self) -> AppResult<TrtData> {
        let columns = ColumnSpec::from_names(
            self.time.clone(),
            self.temp.clone(),
            self.temp_in.clone(),
            self.temp_out.clone(),
            self.power.clone(),
        )?;
        let format = CsvFormat::default()
            .with_field_separator(self.sep)
            .with_decimal_point(self.decimal);
        let options = TrtOptions {
            average_power: self.average_power,
            start_index: start_index_from_signed(self.start_index)?,
            undisturbed_ground_temperature: self.ground_temp,
        };
        Ok(TrtData::load(&self.data_path, &columns, format, options)?)
    }
}

fn main() -> AppResult<()> {
    // Results go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            analysis_path,
            json,
        } => cmd_analyze(&analysis_path, json),
        Commands::Ils {
            data,
            length,
            radius,
            heat_capacity,
            json,
        } => cmd_ils(&data, length, radius, heat_capacity, json),
        Commands::Inspect { data, json } => cmd_inspect(&data, json),
        Commands::Sweep {
            analysis_path,
            from,
            to,
            step,
            json,
        } => cmd_sweep(&analysis_path, from, to, step, json),
    }
}

fn base_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_analyze(analysis_path: &Path, json: bool) -> AppResult<()> {
    let analysis = load_analysis(analysis_path)?;
    let report = run_analysis(&analysis, base_dir(analysis_path))?;
    if json {
        return print_json(&report);
    }
    print_report(&report);
    Ok(())
}

fn cmd_ils(
    data_args: &DataArgs,
    length: f64,
    radius: f64,
    heat_capacity: f64,
    json: bool,
) -> AppResult<()> {
    let data = data_args.load()?;
    let ils = Ils::new(IlsParameters::from_si(length, radius, heat_capacity)?);
    let result = ils.evaluate(&data)?;
    if json {
        return print_json(&result);
    }
    println!(
        "{} (start index {}, {} samples)",
        ils.name(),
        data.start_index(),
        data.window_len()
    );
    println!(
        "  Thermal conductivity: {:.4} W/(mK)",
        result.thermal_conductivity()
    );
    println!(
        "  Borehole resistance:  {:.4} mK/W",
        result.borehole_resistance()
    );
    Ok(())
}

fn cmd_inspect(data_args: &DataArgs, json: bool) -> AppResult<()> {
    let data = data_args.load()?;
    let summary = summarize(&data);
    if json {
        return print_json(&summary);
    }
    print_summary(&summary);
    Ok(())
}

fn cmd_sweep(
    analysis_path: &Path,
    from: usize,
    to: Option<usize>,
    step: usize,
    json: bool,
) -> AppResult<()> {
    if step == 0 {
        return Err(AppError::InvalidInput("step must be positive".to_string()));
    }
    let analysis = load_analysis(analysis_path)?;
    let data = load_data(&analysis, base_dir(analysis_path))?;
    let def = analysis
        .methods
        .first()
        .ok_or_else(|| AppError::InvalidInput("No methods configured".to_string()))?;
    let method = build_method(def)?;

    let to = to.unwrap_or(data.len().saturating_sub(1));
    let points = sweep_start_index(&data, method.as_ref(), (from..=to).step_by(step));
    if json {
        return print_json(&points);
    }
    print_sweep(method.name(), &points);
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!("Analysis: {}", report.name);
    println!("  Data: {}", report.data_path.display());
    print_summary(&report.summary);
    for estimate in &report.estimates {
        println!("✓ {}", estimate.method);
        println!(
            "  Thermal conductivity: {:.4} W/(mK)",
            estimate.result.thermal_conductivity()
        );
        println!(
            "  Borehole resistance:  {:.4} mK/W",
            estimate.result.borehole_resistance()
        );
    }
}

fn print_summary(summary: &DataSummary) {
    println!("  Samples: {}", summary.sample_count);
    println!(
        "  Window: from index {} ({} samples)",
        summary.start_index, summary.window_count
    );
    println!(
        "  Time range: {:.0} - {:.0} s",
        summary.time_range_s.0, summary.time_range_s.1
    );
    if let Some((t0, t1)) = summary.window_time_range_s {
        println!("  Window time range: {:.0} - {:.0} s", t0, t1);
    }
    match summary.average_power_w {
        Some(p) if summary.power_overridden => println!("  Average power: {:.1} W (override)", p),
        Some(p) => println!("  Average power: {:.1} W", p),
        None => println!("  Average power: n/a"),
    }
    if let Some(t) = summary.mean_window_temperature_degc {
        println!("  Mean window temperature: {:.3} °C", t);
    }
    if let Some(t) = summary.undisturbed_ground_temperature_degc {
        println!("  Undisturbed ground temperature: {:.2} °C", t);
    }
}

fn print_sweep(method: &str, points: &[SweepPoint]) {
    println!("{} start-index sweep", method);
    println!("  {:>8}  {:>10}  {:>10}  {:>10}", "index", "t [s]", "ks", "Rb");
    for p in points {
        let t = p
            .start_time_s
            .map(|t| format!("{:.0}", t))
            .unwrap_or_else(|| "-".to_string());
        match (&p.result, &p.error) {
            (Some(r), _) => println!(
                "  {:>8}  {:>10}  {:>10.4}  {:>10.4}",
                p.start_index,
                t,
                r.thermal_conductivity(),
                r.borehole_resistance()
            ),
            (None, Some(e)) => println!("  {:>8}  {:>10}  {}", p.start_index, t, e),
            (None, None) => println!("  {:>8}  {:>10}", p.start_index, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ils_arguments_parse() {
        let cli = Cli::try_parse_from([
            "trt-cli", "ils", "m.csv", "--time", "t", "--temp-in", "a", "--temp-out", "b",
            "--average-power", "6000", "--ground-temp", "11.7", "--length", "150",
            "--radius", "0.0665", "--heat-capacity", "2.3e6", "--decimal", ",",
        ])
        .unwrap();
        let Commands::Ils { data, length, .. } = cli.command else {
            panic!("expected ils subcommand");
        };
        assert_eq!(length, 150.0);
        assert_eq!(data.decimal, ',');
        assert_eq!(data.sep, ';');
        assert_eq!(data.temp_in.as_deref(), Some("a"));
        assert_eq!(data.start_index, 0);
    }

    #[test]
    fn negative_start_index_is_rejected_before_reading() {
        let cli = Cli::try_parse_from([
            "trt-cli", "inspect", "does-not-exist.csv", "--time", "t", "--temp", "T",
            "--average-power", "6000", "--start-index", "-3",
        ])
        .unwrap();
        let Commands::Inspect { data, .. } = cli.command else {
            panic!("expected inspect subcommand");
        };
        assert_eq!(data.start_index, -3);
        let err = data.load().unwrap_err();
        assert!(err.to_string().contains("negative"), "{err}");
    }

    #[test]
    fn sweep_defaults() {
        let cli = Cli::try_parse_from(["trt-cli", "sweep", "a.yaml"]).unwrap();
        let Commands::Sweep { from, to, step, .. } = cli.command else {
            panic!("expected sweep subcommand");
        };
        assert_eq!((from, to, step), (0, None, 10));
    }
}
