//! # cpu-anomaly
//!
//! Command-line driver for ARIMA-based CPU anomaly detection.

mod config;
mod error;
mod pipeline;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use forecast_facade::ArimaOrder;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ConfigOverrides, PipelineConfig};
use crate::error::Result;
use crate::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "cpu-anomaly")]
#[command(about = "Detect CPU utilization anomalies with ARIMA residuals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: PipelineArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate data, fit, detect and write the plot and report (default)
    Run,

    /// Only generate the synthetic CPU dataset
    Generate,

    /// Run detection on an existing timestamp,cpu_percent CSV file
    Detect {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Args)]
struct PipelineArgs {
    /// JSON configuration file; explicit flags take precedence
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of days to simulate
    #[arg(long, global = true)]
    days: Option<usize>,

    /// Samples per day
    #[arg(long, global = true)]
    hours_per_day: Option<usize>,

    /// Sigma multiplier of the dynamic threshold
    #[arg(short, long, global = true)]
    threshold: Option<f64>,

    /// ARIMA order as p,d,q
    #[arg(long, global = true)]
    order: Option<ArimaOrder>,

    /// Seed of the synthetic data generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Where the generated data CSV is written
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,

    /// Where the detection plot is written
    #[arg(long, global = true)]
    plot_path: Option<PathBuf>,

    /// Where the anomaly report CSV is written
    #[arg(long, global = true)]
    report_path: Option<PathBuf>,

    /// Use the population standard deviation of the residuals
    #[arg(long, global = true)]
    population_std: bool,

    /// Log stage details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl PipelineArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            days: self.days,
            hours_per_day: self.hours_per_day,
            threshold: self.threshold,
            order: self.order,
            seed: self.seed,
            data_path: self.data_path.clone(),
            plot_path: self.plot_path.clone(),
            report_path: self.report_path.clone(),
            population_std: self.population_std,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_pipeline(config: &PipelineConfig, input: Option<PathBuf>) -> Result<()> {
    println!("--- STARTING CPU ANOMALY DETECTION PIPELINE ---\n");

    let pipeline = Pipeline::new(config);
    for path in [&config.plot_path, &config.report_path] {
        pipeline::ensure_parent(path)?;
    }
    let outcome = match input {
        Some(path) => pipeline.run_on_file(&path)?,
        None => pipeline.run()?,
    };

    for report in &outcome.reports {
        info!(
            kind = %report.kind,
            path = %report.path.display(),
            anomalies = report.anomalies,
            "report written"
        );
    }
    info!(aic = outcome.model.aic, n_params = outcome.model.n_params, "run finished");

    println!("\n--- PIPELINE COMPLETE ---");
    println!(
        "{} anomalies in {} observations. Check the '{}' folder for results.",
        outcome.annotated.anomaly_count(),
        outcome.annotated.len(),
        config.output_dir().display()
    );
    Ok(())
}

fn run_generate(config: &PipelineConfig) -> Result<()> {
    let series = Pipeline::new(config).generate()?;
    println!(
        "Generated {} observations into {}",
        series.len(),
        config.data_path.display()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.options.verbose);

    let result = PipelineConfig::resolve(cli.options.config.as_deref(), &cli.options.overrides())
        .and_then(|config| match cli.command {
            None | Some(Commands::Run) => run_pipeline(&config, None),
            Some(Commands::Generate) => run_generate(&config),
            Some(Commands::Detect { input }) => run_pipeline(&config, Some(input)),
        });

    if let Err(e) = result {
        error!(stage = e.stage(), "pipeline aborted");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
