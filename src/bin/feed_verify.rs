//! Feed Verify Binary - data source contract check
//!
//! Fetches one season of shot events and prints the record count plus the
//! vocabulary actually present in the feed (outcomes, shot types, zones),
//! then runs the classifier over the batch. Useful for confirming endpoint
//! access and spotting vocabulary drift before a real run; writes no
//! artifacts.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin feed_verify
//! ```

use shotflow::chart_core::classify_all;
use shotflow::feed_core::{fetch_shot_events, ChartConfig};
use std::collections::BTreeMap;

fn print_counts(label: &str, values: impl Iterator<Item = String>) {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    println!("{}:", label);
    for (value, count) in &counts {
        println!("  {:<24} {}", value, count);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ChartConfig::from_env()?;
    let snapshot = fetch_shot_events(&config).await?;

    println!(
        "player {} team {} season {} ({})",
        config.player_id, config.team_id, config.season, config.season_type
    );
    println!("records: {} (fetched at unix {})", snapshot.events.len(), snapshot.fetched_at);
    println!();

    print_counts("EVENT_TYPE", snapshot.events.iter().map(|e| e.event_type.clone()));
    print_counts("SHOT_TYPE", snapshot.events.iter().map(|e| e.shot_type.clone()));
    print_counts("SHOT_ZONE_BASIC", snapshot.events.iter().map(|e| e.shot_zone_basic.clone()));

    match classify_all(&snapshot.events) {
        Ok(events) => println!("\n✅ Contract OK: {} events classified", events.len()),
        Err(err) => {
            println!("\n❌ Contract violation: {}", err);
            std::process::exit(1);
        }
    }

    Ok(())
}
