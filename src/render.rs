//! Terminal presentation of the aggregation result.
//!
//! The run loop redraws after every sample: clear the screen, print the
//! ranked entries, print the totals. All logic lives in the aggregator;
//! this module only formats.

use std::io::{self, Write};

use crate::core::aggregate::{Aggregation, Summary};

/// ANSI: clear screen, cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Redraw the live view for one aggregation pass.
pub fn draw(out: &mut impl Write, aggregation: &Aggregation) -> io::Result<()> {
    write!(out, "{CLEAR_SCREEN}")?;
    match aggregation {
        Aggregation::Warmup { .. } => writeln!(out, "Please wait, gathering data...")?,
        Aggregation::Report(summary) => write_summary(out, summary)?,
    }
    out.flush()
}

/// Write a summary without clearing; used for the final flush on shutdown.
pub fn write_summary(out: &mut impl Write, summary: &Summary) -> io::Result<()> {
    for entry in &summary.entries {
        writeln!(
            out,
            "{:>10}  {:>3}%  {}",
            format_duration(entry.seconds),
            entry.percent,
            entry.label
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Time spent at your computer: {}",
        format_duration(summary.active_seconds)
    )?;
    writeln!(
        out,
        "Time away or idle:           {}",
        format_duration(summary.idle_seconds)
    )?;
    writeln!(
        out,
        "Total time tracked:          {}",
        format_duration(summary.total_seconds)
    )?;
    Ok(())
}

/// Render seconds as `XhYmZs`, omitting zero components.
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 {
        parts.push(format!("{seconds}s"));
    }

    if parts.is_empty() {
        return "0s".to_string();
    }
    parts.join(" ")
}
