//! Shot Chart Binary - One-Shot Season Pipeline
//!
//! Fetches one player's shot attempts for a season, writes the shooting
//! summary CSV, and renders the made/missed scatter over the half court.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin shotchart
//! ```
//!
//! ## Environment Variables
//!
//! - PLAYER_ID - NBA player id (default: 201939)
//! - TEAM_ID - NBA team id (default: 1610612744)
//! - SEASON - Season label, e.g. 2024-25 (default: 2024-25)
//! - SEASON_TYPE - Regular Season | Pre Season | Playoffs | All Star (default: Regular Season)
//! - SUMMARY_CSV_PATH - Summary table output (default: out/shooting_summary_<season>.csv)
//! - CHART_PNG_PATH - Shot chart image output (default: out/shot_chart_<season>.png)
//! - COURT_COLOR - Court line color as RRGGBB hex (default: 000000)
//! - COURT_LINE_WIDTH - Court line width in pixels (default: 1)
//! - RUST_LOG - Logging level (optional, default: info)

use shotflow::chart_core::{
    classify_all, court_template, partition, summarize, ChartRenderer, CourtStyle, RenderStyle,
    SummaryCsvWriter,
};
use shotflow::feed_core::{fetch_shot_events, ChartConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ChartConfig::from_env()?;

    let snapshot = fetch_shot_events(&config).await?;

    // All-or-nothing: a single contract violation aborts the run here,
    // before either artifact is written.
    let events = classify_all(&snapshot.events)?;

    let rows = summarize(&events);
    log::info!("===== Player {} {} Shooting Summary =====", config.player_id, config.season);
    for row in &rows {
        log::info!(
            "{:<22} att={:<4} made={:<4} fg={:>5.1}%",
            row.zone,
            row.attempts,
            row.made,
            row.fg_pct
        );
    }

    let mut writer = SummaryCsvWriter::create(&config.summary_csv_path)?;
    writer.write_summary(&rows)?;

    let (made, missed) = partition(&events);
    log::info!("✅ {} made / {} missed", made.len(), missed.len());

    let style = CourtStyle { color: config.court_color, line_width: config.court_line_width };
    let renderer = ChartRenderer::new(court_template(style), RenderStyle::default());
    renderer.render_to_file(&made, &missed, &config.chart_png_path)?;

    log::info!("Done: Player {} {} Shot Chart", config.player_id, config.season);
    Ok(())
}
