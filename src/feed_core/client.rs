//! NBA Stats shotchartdetail client
//!
//! Endpoint: https://stats.nba.com/stats/shotchartdetail
//! Returns tabular result sets (`headers` + `rowSet`); columns are resolved
//! by header name because the provider does not guarantee column order.
//!
//! The stats host rejects bare clients, so the request carries the browser
//! headers the provider expects alongside the full query-parameter set
//! (unused filters are sent empty, the endpoint requires their presence).

use super::config::ChartConfig;
use crate::chart_core::RawShotEvent;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const SHOTCHART_URL: &str = "https://stats.nba.com/stats/shotchartdetail";
const SHOT_CHART_RESULT_SET: &str = "Shot_Chart_Detail";
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// All shot events for one player-season, plus when they were fetched.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub events: Vec<RawShotEvent>,
    pub fetched_at: i64,
}

#[derive(Debug)]
pub enum FeedError {
    Http(reqwest::Error),
    Status(u16),
    MalformedResponse(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http(err)
    }
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Http(e) => write!(f, "HTTP error: {}", e),
            FeedError::Status(code) => write!(f, "NBA stats API error: HTTP {}", code),
            FeedError::MalformedResponse(msg) => write!(f, "Malformed feed response: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

#[derive(Debug, Deserialize)]
struct ShotChartResponse {
    #[serde(rename = "resultSets")]
    result_sets: Vec<ResultSet>,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
    name: String,
    headers: Vec<String>,
    #[serde(rename = "rowSet")]
    row_set: Vec<Vec<Value>>,
}

/// Fetch every shot attempt (made and missed) for the configured
/// player/team/season. One synchronous call, no retry: a transient provider
/// failure aborts the run.
pub async fn fetch_shot_events(config: &ChartConfig) -> Result<FeedSnapshot, FeedError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let query = [
        ("PlayerID", config.player_id.to_string()),
        ("TeamID", config.team_id.to_string()),
        ("Season", config.season.clone()),
        ("SeasonType", config.season_type.clone()),
        // FGA = every attempt, not just makes
        ("ContextMeasure", "FGA".to_string()),
        ("LeagueID", "00".to_string()),
        ("Month", "0".to_string()),
        ("OpponentTeamID", "0".to_string()),
        ("Period", "0".to_string()),
        ("LastNGames", "0".to_string()),
        ("GameID", String::new()),
        ("GameSegment", String::new()),
        ("DateFrom", String::new()),
        ("DateTo", String::new()),
        ("Location", String::new()),
        ("Outcome", String::new()),
        ("PlayerPosition", String::new()),
        ("RookieYear", String::new()),
        ("SeasonSegment", String::new()),
        ("VsConference", String::new()),
        ("VsDivision", String::new()),
    ];

    log::info!(
        "🏀 Fetching shot chart: player {} team {} season {} ({})",
        config.player_id,
        config.team_id,
        config.season,
        config.season_type
    );

    let response = client
        .get(SHOTCHART_URL)
        .header("User-Agent", USER_AGENT)
        .header("Referer", "https://www.nba.com/")
        .header("Origin", "https://www.nba.com")
        .header("Accept", "application/json")
        .header("x-nba-stats-origin", "stats")
        .header("x-nba-stats-token", "true")
        .query(&query)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FeedError::Status(response.status().as_u16()));
    }

    let payload: ShotChartResponse = response.json().await?;
    let events = extract_shot_rows(&payload)?;

    log::info!("📊 Fetched {} shot attempts", events.len());

    Ok(FeedSnapshot { events, fetched_at: Utc::now().timestamp() })
}

fn extract_shot_rows(payload: &ShotChartResponse) -> Result<Vec<RawShotEvent>, FeedError> {
    let set = payload
        .result_sets
        .iter()
        .find(|s| s.name == SHOT_CHART_RESULT_SET)
        .ok_or_else(|| {
            FeedError::MalformedResponse(format!("missing result set: {}", SHOT_CHART_RESULT_SET))
        })?;

    parse_shot_rows(set)
}

fn parse_shot_rows(set: &ResultSet) -> Result<Vec<RawShotEvent>, FeedError> {
    let loc_x = column_index(set, "LOC_X")?;
    let loc_y = column_index(set, "LOC_Y")?;
    let event_type = column_index(set, "EVENT_TYPE")?;
    let shot_type = column_index(set, "SHOT_TYPE")?;
    let zone_basic = column_index(set, "SHOT_ZONE_BASIC")?;

    let mut events = Vec::with_capacity(set.row_set.len());
    for (row_idx, row) in set.row_set.iter().enumerate() {
        events.push(RawShotEvent {
            loc_x: number_cell(row, loc_x, row_idx, "LOC_X")?,
            loc_y: number_cell(row, loc_y, row_idx, "LOC_Y")?,
            event_type: string_cell(row, event_type, row_idx, "EVENT_TYPE")?,
            shot_type: string_cell(row, shot_type, row_idx, "SHOT_TYPE")?,
            shot_zone_basic: string_cell(row, zone_basic, row_idx, "SHOT_ZONE_BASIC")?,
        });
    }

    Ok(events)
}

fn column_index(set: &ResultSet, name: &str) -> Result<usize, FeedError> {
    set.headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| FeedError::MalformedResponse(format!("missing column: {}", name)))
}

fn number_cell(row: &[Value], idx: usize, row_idx: usize, name: &str) -> Result<f64, FeedError> {
    row.get(idx).and_then(Value::as_f64).ok_or_else(|| {
        FeedError::MalformedResponse(format!("row {}: non-numeric {}", row_idx, name))
    })
}

/// String cell lookup. A JSON null becomes an empty string so the
/// classification stage reports it as a missing field, while a wrong-typed
/// cell is a feed structure problem and fails here.
fn string_cell(row: &[Value], idx: usize, row_idx: usize, name: &str) -> Result<String, FeedError> {
    match row.get(idx) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) => Ok(String::new()),
        _ => Err(FeedError::MalformedResponse(format!("row {}: non-string {}", row_idx, name))),
    }
}
