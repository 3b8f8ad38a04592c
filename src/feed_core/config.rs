//! Run configuration from environment variables

use image::Rgb;
use std::env;

/// NBA player id for Stephen Curry, the default subject.
const DEFAULT_PLAYER_ID: &str = "201939";
/// Golden State Warriors franchise id.
const DEFAULT_TEAM_ID: &str = "1610612744";
const DEFAULT_SEASON: &str = "2024-25";
const DEFAULT_SEASON_TYPE: &str = "Regular Season";

const ACCEPTED_SEASON_TYPES: [&str; 4] =
    ["Regular Season", "Pre Season", "Playoffs", "All Star"];

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub player_id: u64,
    pub team_id: u64,
    pub season: String,
    pub season_type: String,
    pub summary_csv_path: String,
    pub chart_png_path: String,
    pub court_color: Rgb<u8>,
    pub court_line_width: u32,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVariable(String),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVariable(var) => write!(f, "Missing environment variable: {}", var),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ChartConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let player_id = env::var("PLAYER_ID")
            .unwrap_or_else(|_| DEFAULT_PLAYER_ID.to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue("PLAYER_ID must be a numeric id".to_string()))?;

        let team_id = env::var("TEAM_ID")
            .unwrap_or_else(|_| DEFAULT_TEAM_ID.to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue("TEAM_ID must be a numeric id".to_string()))?;

        let season = env::var("SEASON").unwrap_or_else(|_| DEFAULT_SEASON.to_string());

        let season_type_raw =
            env::var("SEASON_TYPE").unwrap_or_else(|_| DEFAULT_SEASON_TYPE.to_string());
        let season_type = if ACCEPTED_SEASON_TYPES.contains(&season_type_raw.as_str()) {
            season_type_raw
        } else {
            log::warn!(
                "Invalid SEASON_TYPE '{}', defaulting to {}",
                season_type_raw,
                DEFAULT_SEASON_TYPE
            );
            DEFAULT_SEASON_TYPE.to_string()
        };

        let season_tag = season.replace('-', "_");
        let summary_csv_path = env::var("SUMMARY_CSV_PATH")
            .unwrap_or_else(|_| format!("out/shooting_summary_{}.csv", season_tag));
        let chart_png_path = env::var("CHART_PNG_PATH")
            .unwrap_or_else(|_| format!("out/shot_chart_{}.png", season_tag));

        let color_raw = env::var("COURT_COLOR").unwrap_or_else(|_| "000000".to_string());
        let court_color = match parse_hex_color(&color_raw) {
            Some(color) => color,
            None => {
                log::warn!("Invalid COURT_COLOR '{}', defaulting to black", color_raw);
                Rgb([0, 0, 0])
            }
        };

        let court_line_width = env::var("COURT_LINE_WIDTH")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .unwrap_or(1);

        Ok(Self {
            player_id,
            team_id,
            season,
            season_type,
            summary_csv_path,
            chart_png_path,
            court_color,
            court_line_width,
        })
    }
}

/// Parse an `RRGGBB` hex triple, with or without a leading '#'.
fn parse_hex_color(raw: &str) -> Option<Rgb<u8>> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb([r, g, b]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("000000"), Some(Rgb([0, 0, 0])));
        assert_eq!(parse_hex_color("#1e90FF"), Some(Rgb([30, 144, 255])));
        assert_eq!(parse_hex_color("fff"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
        assert_eq!(parse_hex_color(""), None);
    }
}
