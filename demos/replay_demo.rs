//! Replay a synthetic stretch of focus samples through the aggregator.
//!
//! This demo shows how to:
//! 1. Build a sample log
//! 2. Summarize it over the trailing window
//! 3. Render the summary the way the live view does
//!
//! Run with: cargo run --example replay_demo

use chrono::{Duration, Utc};
use focus_tally::{render, Aggregation, Aggregator, Sample, SampleLog};

fn main() {
    let now = Utc::now();
    let mut log = SampleLog::for_window(24);

    // A morning, compressed: browser, editor, a locked stretch, more editor.
    let script: &[(i64, &str)] = &[
        (0, "Google Chrome"),
        (60, "Google Chrome"),
        (120, "Zed"),
        (180, "Zed"),
        (240, "ScreenSaverEngine"),
        (300, "ScreenSaverEngine"),
        (360, "Zed"),
        (420, "Zed"),
        (480, "Terminal"),
        (540, "Terminal"),
    ];
    let start = now - Duration::seconds(540);
    for (offset, label) in script {
        log.push(Sample::new(start + Duration::seconds(*offset), *label));
    }

    // A 60s cadence needs a matching idle threshold; interval and slack are
    // always configured together.
    let aggregator = Aggregator::new(24, 60, 3, &["loginwindow", "ScreenSaverEngine"]);

    match aggregator.summarize(&log, now) {
        Aggregation::Report(summary) => {
            let mut out = std::io::stdout();
            render::write_summary(&mut out, &summary).expect("stdout is writable");

            println!();
            println!("Summary as JSON:");
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).expect("summary serializes")
            );
        }
        Aggregation::Warmup { samples } => {
            println!("Still warming up ({samples} samples)");
        }
    }
}
