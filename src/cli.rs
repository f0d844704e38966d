//! Command-line interface components.

use crate::aggregator::Aggregator;
use crate::config::AggregatorConfig;
use crate::constants::{DEFAULT_LOGS_DIR, OUTPUT_FILE_NAME};
use crate::models::AggregationStats;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug, Clone)]
#[command(name = "energy_entropy_aggregator")]
#[command(about = "Join per-run entropy summaries with power logs into one CSV report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing summary_<run>_<mode>.{txt,csv} and run_<run>_<mode>.csv files
    #[arg(value_name = "LOGS_DIR", default_value = DEFAULT_LOGS_DIR)]
    pub logs_dir: PathBuf,

    /// File name of the report written inside LOGS_DIR
    #[arg(short, long, value_name = "NAME", default_value = OUTPUT_FILE_NAME)]
    pub output_name: String,

    /// Parse and join everything but do not write the report
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    pub fn to_config(&self) -> AggregatorConfig {
        AggregatorConfig::new(&self.logs_dir)
            .with_output_file_name(&self.output_name)
            .with_dry_run(self.dry_run)
    }
}

/// Initialize the tracing subscriber; `RUST_LOG` overrides the CLI level
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("energy_entropy_aggregator={}", log_level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Run one aggregation pass for the parsed arguments
pub fn run(args: &Args) -> Result<AggregationStats> {
    let config = args.to_config();
    debug!("Configuration: {:?}", config);
    info!("Aggregating logs in {}", config.logs_dir.display());

    let stats = Aggregator::new(config.clone())
        .run()
        .with_context(|| format!("Failed to aggregate logs in {}", config.logs_dir.display()))?;

    report(&stats, args.quiet);
    Ok(stats)
}

fn report(stats: &AggregationStats, quiet: bool) {
    if stats.dry_run {
        println!(
            "{} {} rows would be written to: {}",
            "Dry run:".bright_yellow().bold(),
            stats.summaries_parsed.to_string().bright_white().bold(),
            stats.output_path.display()
        );
    } else {
        println!(
            "Wrote {} rows to: {}",
            stats.rows_written.to_string().bright_green().bold(),
            stats.output_path.display()
        );
    }

    if quiet {
        return;
    }

    if stats.rows_with_power < stats.summaries_parsed {
        println!(
            "  {} {} of {} runs have no matching power log",
            "Note:".bright_cyan(),
            stats.summaries_parsed - stats.rows_with_power,
            stats.summaries_parsed
        );
    }
    if !stats.unmatched_power_logs.is_empty() {
        println!(
            "  {} {} power logs without a summary: {}",
            "Note:".bright_cyan(),
            stats.unmatched_power_logs.len(),
            stats.unmatched_power_logs.join(", ")
        );
    }
    debug!("Finished in {:?}", stats.processing_time);
}
