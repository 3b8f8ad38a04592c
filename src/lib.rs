//! shotflow - one player, one season, one shot chart
//!
//! Fetches a single player's shot attempts from the NBA stats feed,
//! classifies every attempt by outcome and value, aggregates shooting
//! percentages by zone, and renders the attempts over a schematic half
//! court. See the `shotchart` binary for the end-to-end run.


pub mod chart_core;
pub mod feed_core;
