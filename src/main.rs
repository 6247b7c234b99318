//! Focus Tally CLI
//!
//! Live summary of foreground-application time over the trailing 24 hours.

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use focus_tally::{
    config::Config,
    core::{Aggregation, Aggregator, SampleLog},
    detector::Detector,
    render,
    sampler::{Sampler, UNKNOWN_LABEL},
    stats::SessionStats,
    VERSION,
};

#[derive(Parser)]
#[command(name = "focus-tally")]
#[command(version = VERSION)]
#[command(about = "Live summary of where your foreground time goes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start tracking and drawing the live summary
    Start {
        /// Seconds between foreground samples
        #[arg(long)]
        interval: Option<u64>,

        /// Slack, in seconds, beyond the interval before a gap counts as idle
        #[arg(long)]
        slack: Option<u64>,

        /// Size of the trailing summary window, in hours
        #[arg(long)]
        window_hours: Option<u64>,
    },

    /// Show configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start {
            interval,
            slack,
            window_hours,
        } => {
            cmd_start(interval, slack, window_hours);
        }
        Commands::Config { init } => {
            cmd_config(init);
        }
    }
}

fn cmd_start(interval: Option<u64>, slack: Option<u64>, window_hours: Option<u64>) {
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config, using defaults: {e}");
            Config::default()
        }
    };

    // Flags override the config file for this run only.
    if let Some(secs) = interval {
        config.sample_interval = Duration::from_secs(secs);
    }
    if let Some(secs) = slack {
        config.idle_gap_slack = Duration::from_secs(secs);
    }
    if let Some(hours) = window_hours {
        config.window_hours = hours;
    }

    if config.sample_interval.is_zero() {
        eprintln!("Error: sample interval must be at least one second");
        std::process::exit(1);
    }
    if config.window_hours == 0 {
        eprintln!("Error: summary window must be at least one hour");
        std::process::exit(1);
    }

    let aggregator = Aggregator::from_config(&config);
    let mut log = SampleLog::for_window(config.window_hours);
    let stats = SessionStats::new();

    let mut sampler = Sampler::new(Detector::new(), config.sample_interval);
    if let Err(e) = sampler.start() {
        eprintln!("Error starting sampler: {e}");
        std::process::exit(1);
    }

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    let receiver = sampler.receiver().clone();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut last_aggregation: Option<Aggregation> = None;

    // Main loop: append, aggregate, redraw, in lock-step per sample.
    while running.load(Ordering::SeqCst) {
        match receiver.recv_timeout(Duration::from_millis(250)) {
            Ok(sample) => {
                stats.record_sample();
                if sample.label == UNKNOWN_LABEL {
                    stats.record_unknown_sample();
                }

                let now = Utc::now();
                log.push(sample);
                log.evict_expired(now);

                let aggregation = aggregator.summarize(&log, now);
                if let Err(e) = render::draw(&mut out, &aggregation) {
                    eprintln!("Error drawing summary: {e}");
                    break;
                }
                stats.record_summary_rendered();
                last_aggregation = Some(aggregation);
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                // Keep polling the running flag
            }
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                eprintln!("Sampler disconnected unexpectedly");
                break;
            }
        }
    }

    // Stop sampling
    sampler.stop();

    // Flush the last known state, this time without clearing the screen.
    let _ = writeln!(out);
    if let Some(Aggregation::Report(summary)) = last_aggregation {
        let _ = render::write_summary(&mut out, &summary);
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "{}", stats.summary());
}

fn cmd_config(init: bool) {
    if init && !Config::config_path().exists() {
        if let Err(e) = Config::default().save() {
            eprintln!("Error writing config: {e}");
            std::process::exit(1);
        }
        println!("Wrote default config to {:?}", Config::config_path());
        println!();
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    println!("Configuration");
    println!("=============");
    println!();
    println!("Config file: {:?}", Config::config_path());
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&config).unwrap_or_else(|_| "Error".to_string())
    );
}
