//! Feed Core - NBA Stats shot chart ingestion
//!
//! Owns the data-source boundary: run configuration from the environment and
//! the HTTP client for the shotchartdetail endpoint. Everything downstream
//! consumes the raw records it produces.

pub mod client;
pub mod config;

pub use client::{fetch_shot_events, FeedError, FeedSnapshot};
pub use config::{ChartConfig, ConfigError};
