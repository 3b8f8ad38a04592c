//! Shooting percentage aggregation over classified shot events

use super::event::ShotEvent;

pub const ZONE_RESTRICTED_AREA: &str = "Restricted Area";
pub const ZONE_PAINT_NON_RA: &str = "In The Paint (Non-RA)";
pub const ZONE_MID_RANGE: &str = "Mid-Range";

/// One line of the shooting report. `fg_pct` is a percentage rounded to one
/// decimal, 0.0 when `attempts == 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub zone: &'static str,
    pub attempts: usize,
    pub made: usize,
    pub fg_pct: f64,
}

/// Count attempts and makes over the events selected by `predicate`.
///
/// Returns `(attempts, made, fg_pct)`. An empty selection is a valid result,
/// not an error.
pub fn aggregate<P>(events: &[ShotEvent], predicate: P) -> (usize, usize, f64)
where
    P: Fn(&ShotEvent) -> bool,
{
    let mut attempts = 0usize;
    let mut made = 0usize;
    for event in events.iter().filter(|e| predicate(e)) {
        attempts += 1;
        if event.is_made() {
            made += 1;
        }
    }
    (attempts, made, fg_percent(made, attempts))
}

fn fg_percent(made: usize, attempts: usize) -> f64 {
    if attempts == 0 {
        return 0.0;
    }
    let pct = made as f64 / attempts as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

fn row(zone: &'static str, counts: (usize, usize, f64)) -> SummaryRow {
    let (attempts, made, fg_pct) = counts;
    SummaryRow { zone, attempts, made, fg_pct }
}

/// Produce the fixed six-row report, every row present even at zero
/// attempts.
///
/// 3PT and 2PT partition Overall exactly. The three zone rows are a curated
/// subset and do not sum to Overall: corner threes, above-the-break threes
/// and backcourt heaves are deliberately left out of the report.
pub fn summarize(events: &[ShotEvent]) -> Vec<SummaryRow> {
    vec![
        row("Overall", aggregate(events, |_| true)),
        row("3PT", aggregate(events, |e| e.is_three())),
        row("2PT", aggregate(events, |e| !e.is_three())),
        row(ZONE_RESTRICTED_AREA, aggregate(events, |e| e.zone == ZONE_RESTRICTED_AREA)),
        row(ZONE_PAINT_NON_RA, aggregate(events, |e| e.zone == ZONE_PAINT_NON_RA)),
        row(ZONE_MID_RANGE, aggregate(events, |e| e.zone == ZONE_MID_RANGE)),
    ]
}

/// Split events into (made, missed), both preserving the original relative
/// order. Every event lands in exactly one half.
pub fn partition(events: &[ShotEvent]) -> (Vec<ShotEvent>, Vec<ShotEvent>) {
    let mut made = Vec::new();
    let mut missed = Vec::new();
    for event in events {
        if event.is_made() {
            made.push(event.clone());
        } else {
            missed.push(event.clone());
        }
    }
    (made, missed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_core::event::{ShotOutcome, ShotValue};

    fn shot(outcome: ShotOutcome, value: ShotValue, zone: &str, x: f64, y: f64) -> ShotEvent {
        ShotEvent { x, y, outcome, value, zone: zone.to_string() }
    }

    fn sample_events() -> Vec<ShotEvent> {
        vec![
            shot(ShotOutcome::Made, ShotValue::ThreePoint, "Above the Break 3", 0.0, 250.0),
            shot(ShotOutcome::Missed, ShotValue::TwoPoint, ZONE_MID_RANGE, 10.0, 150.0),
            shot(ShotOutcome::Made, ShotValue::TwoPoint, ZONE_RESTRICTED_AREA, 0.0, 5.0),
        ]
    }

    #[test]
    fn test_summarize_sample_season() {
        let rows = summarize(&sample_events());
        assert_eq!(rows.len(), 6);

        assert_eq!(rows[0], row("Overall", (3, 2, 66.7)));
        assert_eq!(rows[1], row("3PT", (1, 1, 100.0)));
        assert_eq!(rows[2], row("2PT", (2, 1, 50.0)));
        assert_eq!(rows[3], row(ZONE_RESTRICTED_AREA, (1, 1, 100.0)));
        assert_eq!(rows[4], row(ZONE_PAINT_NON_RA, (0, 0, 0.0)));
        assert_eq!(rows[5], row(ZONE_MID_RANGE, (1, 0, 0.0)));
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let rows = summarize(&[]);
        assert_eq!(rows.len(), 6);
        for row in &rows {
            assert_eq!(row.attempts, 0);
            assert_eq!(row.made, 0);
            assert_eq!(row.fg_pct, 0.0);
        }

        let (made, missed) = partition(&[]);
        assert!(made.is_empty());
        assert!(missed.is_empty());
    }

    #[test]
    fn test_two_three_partition_overall() {
        let events = sample_events();
        let rows = summarize(&events);
        assert_eq!(rows[1].attempts + rows[2].attempts, rows[0].attempts);
        assert_eq!(rows[0].attempts, events.len());
    }

    #[test]
    fn test_partition_preserves_order() {
        let events = sample_events();
        let (made, missed) = partition(&events);
        assert_eq!(made.len() + missed.len(), events.len());
        assert_eq!(made.len(), 2);
        assert_eq!(missed.len(), 1);
        // original relative order within each half
        assert_eq!(made[0].y, 250.0);
        assert_eq!(made[1].y, 5.0);
        assert_eq!(missed[0].y, 150.0);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let events = sample_events();
        assert_eq!(summarize(&events), summarize(&events));
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // 1/3 -> 33.3, 2/3 -> 66.7, 1/7 -> 14.3
        assert_eq!(fg_percent(1, 3), 33.3);
        assert_eq!(fg_percent(2, 3), 66.7);
        assert_eq!(fg_percent(1, 7), 14.3);
        assert_eq!(fg_percent(0, 0), 0.0);
    }

    #[test]
    fn test_made_never_exceeds_attempts() {
        for row in summarize(&sample_events()) {
            assert!(row.made <= row.attempts, "{}: made > attempts", row.zone);
        }
    }
}
