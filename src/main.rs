//! CLI entry point for device_insights.
//!
//! Loads a device table from a file or URL and writes the four aggregate
//! views, once (`analyze`) or repeatedly (`poll`).

use anyhow::{Result, ensure};
use clap::{Args, Parser, Subcommand, ValueEnum};
use device_insights::fetch::load_source;
use device_insights::output::{Report, print_pretty, write_report, write_views_csv};
use device_insights::{ColumnMap, DashboardState, SourceOptions, build_dashboard};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "device_insights")]
#[command(about = "Aggregate a phone dataset into chart-ready views", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the views once from a file or URL
    Analyze {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// JSON report path, or directory for CSV views (defaults: stdout / "views")
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        table: TableArgs,
    },
    /// Rebuild the views from the source at a fixed interval
    Poll {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// JSON report path, replaced after every successful round
        #[arg(short, long, default_value = "dashboard.json")]
        output: String,

        /// Seconds between rounds
        #[arg(short = 'r', long, default_value_t = 60)]
        sample_rate: u64,

        /// Number of rounds (0 = infinite)
        #[arg(short = 'n', long, default_value_t = 1)]
        num_samples: usize,

        #[command(flatten)]
        table: TableArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
    Pretty,
}

#[derive(Args)]
struct TableArgs {
    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// JSON file mapping canonical field names to header names
    #[arg(long, value_name = "JSON")]
    columns: Option<String>,
}

impl TableArgs {
    fn to_options(&self) -> Result<SourceOptions> {
        ensure!(
            self.delimiter.is_ascii(),
            "delimiter must be a single ASCII character"
        );
        let columns = match &self.columns {
            Some(path) => ColumnMap::load(path)?,
            None => ColumnMap::default(),
        };
        Ok(SourceOptions {
            delimiter: self.delimiter as u8,
            columns,
            api_key: std::env::var("DEVICE_INSIGHTS_API_KEY").ok(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/device_insights.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("device_insights.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            source,
            format,
            output,
            table,
        } => {
            let options = table.to_options()?;
            let text = load_source(&source, &options).await?;
            let dashboard = build_dashboard(&text, &options)?;

            match format {
                Format::Json => {
                    let report = Report::new(&source, &dashboard);
                    match output {
                        Some(path) => write_report(Path::new(&path), &report)?,
                        None => println!("{}", serde_json::to_string_pretty(&report)?),
                    }
                }
                Format::Csv => {
                    let dir = output.unwrap_or_else(|| "views".to_string());
                    write_views_csv(Path::new(&dir), &dashboard)?;
                }
                Format::Pretty => print_pretty(&dashboard),
            }

            info!(
                rows = dashboard.rows,
                years = dashboard.yearly_models.len(),
                brands = dashboard.average_prices.len(),
                os_families = dashboard.foldable_by_os.len(),
                "Analysis complete"
            );
        }
        Commands::Poll {
            source,
            output,
            sample_rate,
            num_samples,
            table,
        } => {
            let options = table.to_options()?;
            poll(&source, Path::new(&output), &options, sample_rate, num_samples).await?;
        }
    }

    Ok(())
}

/// Rebuilds the dashboard every `sample_rate` seconds, replacing the report
/// after each successful round. A failed round keeps the previous report.
#[tracing::instrument(skip(options))]
async fn poll(
    source: &str,
    output: &Path,
    options: &SourceOptions,
    sample_rate: u64,
    num_samples: usize,
) -> Result<()> {
    let mut state = DashboardState::new();
    let mut sample_count = 0;

    if num_samples == 0 {
        info!(sample_rate, "Polling infinitely. Press Ctrl+C to stop.");
    } else {
        info!(num_samples, sample_rate, "Starting polling");
    }

    loop {
        // Check if we've reached the sample limit (0 = infinite)
        if num_samples > 0 && sample_count >= num_samples {
            break;
        }
        sample_count += 1;

        match ingest_round(&mut state, source, output, options).await {
            Ok(()) => info!(
                sample = sample_count,
                rows = state.current().rows,
                "Dashboard refreshed"
            ),
            Err(e) => error!(sample = sample_count, error = %e, "Round failed, keeping previous report"),
        }

        if num_samples == 0 || sample_count < num_samples {
            tokio::time::sleep(tokio::time::Duration::from_secs(sample_rate)).await;
        }
    }

    info!(ingestions = state.ingestions(), "Finished polling");
    Ok(())
}

async fn ingest_round(
    state: &mut DashboardState,
    source: &str,
    output: &Path,
    options: &SourceOptions,
) -> Result<()> {
    let text = load_source(source, options).await?;
    let dashboard = state.ingest(&text, options)?;
    write_report(output, &Report::new(source, dashboard))?;
    Ok(())
}
