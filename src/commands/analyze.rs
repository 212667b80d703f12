use std::path::{Path, PathBuf};

use crate::charts::{build_dashboard, TrendDistributionChart};
use crate::services::{derive, parse_csv};

pub fn run(file: PathBuf, json: bool) {
    match analyze(&file, json) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn analyze(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(file)?;
    let bars = parse_csv(&bytes)?;
    let series = derive(&bars);

    if json {
        let dashboard = build_dashboard(&series);
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    println!("📊 Stock Analysis Summary\n");
    println!("📄 File:          {}", file.display());
    println!("📈 Rows ingested: {}", bars.len());
    println!("📉 Rows retained: {}", series.len());

    if series.is_empty() {
        println!("\n⚠️  Not enough rows to derive returns (need at least 2). Nothing to render.");
        return Ok(());
    }

    let first = &series[0];
    let last = &series[series.len() - 1];
    println!("📅 Date span:     {} → {}", first.date, last.date);
    println!("💰 Growth of $1:  {:.4}", last.cumulative_return);

    let best = series
        .iter()
        .max_by(|a, b| {
            a.daily_return
                .partial_cmp(&b.daily_return)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("non-empty series");
    let worst = series
        .iter()
        .min_by(|a, b| {
            a.daily_return
                .partial_cmp(&b.daily_return)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("non-empty series");

    println!("🔺 Best day:      {} ({:+.2}%)", best.date, best.daily_return);
    println!("🔻 Worst day:     {} ({:+.2}%)", worst.date, worst.daily_return);

    println!("\n🔖 Trend distribution:");
    for slice in TrendDistributionChart::build(&series).slices {
        println!("   {:<22} {:>5}", slice.label.as_str(), slice.count);
    }

    Ok(())
}
