//! Shot event classification from raw feed records to typed events

use serde::{Deserialize, Serialize};

pub const EVENT_TYPE_MADE: &str = "Made Shot";
pub const EVENT_TYPE_MISSED: &str = "Missed Shot";

/// Marker the provider embeds in `shot_type` for three-point attempts
/// ("3PT Field Goal"). Matched case-sensitively, as delivered.
const THREE_POINT_MARKER: &str = "3PT";

/// One shot attempt exactly as the feed row delivers it, strings untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawShotEvent {
    pub loc_x: f64,
    pub loc_y: f64,
    pub event_type: String,
    pub shot_type: String,
    pub shot_zone_basic: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Made,
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotValue {
    TwoPoint,
    ThreePoint,
}

/// A classified shot attempt. Derived once from a [`RawShotEvent`]; the raw
/// record is never mutated.
#[derive(Debug, Clone)]
pub struct ShotEvent {
    pub x: f64,
    pub y: f64,
    pub outcome: ShotOutcome,
    pub value: ShotValue,
    pub zone: String,
}

#[derive(Debug)]
pub enum DataContractError {
    UnknownOutcome(String),
    MissingField(&'static str),
}

impl std::fmt::Display for DataContractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataContractError::UnknownOutcome(label) => write!(
                f,
                "unknown shot outcome '{}' (expected '{}' or '{}')",
                label, EVENT_TYPE_MADE, EVENT_TYPE_MISSED
            ),
            DataContractError::MissingField(field) => {
                write!(f, "missing required field: {}", field)
            }
        }
    }
}

impl std::error::Error for DataContractError {}

impl ShotEvent {
    /// Classify a raw feed record.
    ///
    /// The outcome vocabulary is closed: any label other than the two known
    /// ones rejects the record instead of counting it as a miss, since the
    /// made percentages depend on the {Made, Missed} set being exhaustive.
    /// The shot value is resolved here, once, so nothing downstream has to
    /// re-derive it from the `shot_type` string.
    pub fn classify(raw: &RawShotEvent) -> Result<Self, DataContractError> {
        let outcome = match raw.event_type.as_str() {
            EVENT_TYPE_MADE => ShotOutcome::Made,
            EVENT_TYPE_MISSED => ShotOutcome::Missed,
            "" => return Err(DataContractError::MissingField("event_type")),
            other => return Err(DataContractError::UnknownOutcome(other.to_string())),
        };

        if raw.shot_type.is_empty() {
            return Err(DataContractError::MissingField("shot_type"));
        }
        if raw.shot_zone_basic.is_empty() {
            return Err(DataContractError::MissingField("shot_zone_basic"));
        }

        let value = if raw.shot_type.contains(THREE_POINT_MARKER) {
            ShotValue::ThreePoint
        } else {
            ShotValue::TwoPoint
        };

        Ok(ShotEvent {
            x: raw.loc_x,
            y: raw.loc_y,
            outcome,
            value,
            zone: raw.shot_zone_basic.clone(),
        })
    }

    pub fn is_made(&self) -> bool {
        matches!(self.outcome, ShotOutcome::Made)
    }

    pub fn is_three(&self) -> bool {
        matches!(self.value, ShotValue::ThreePoint)
    }
}

/// Classify every record, failing the whole batch on the first contract
/// violation. Nothing is aggregated from a batch that contains even one
/// malformed event.
pub fn classify_all(raw: &[RawShotEvent]) -> Result<Vec<ShotEvent>, DataContractError> {
    raw.iter().map(ShotEvent::classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(event_type: &str, shot_type: &str, zone: &str) -> RawShotEvent {
        RawShotEvent {
            loc_x: 0.0,
            loc_y: 100.0,
            event_type: event_type.to_string(),
            shot_type: shot_type.to_string(),
            shot_zone_basic: zone.to_string(),
        }
    }

    #[test]
    fn test_classify_made_three() {
        let event = ShotEvent::classify(&raw("Made Shot", "3PT Field Goal", "Above the Break 3"))
            .unwrap();
        assert_eq!(event.outcome, ShotOutcome::Made);
        assert_eq!(event.value, ShotValue::ThreePoint);
        assert!(event.is_made());
        assert!(event.is_three());
        assert_eq!(event.zone, "Above the Break 3");
    }

    #[test]
    fn test_classify_missed_two() {
        let event =
            ShotEvent::classify(&raw("Missed Shot", "2PT Field Goal", "Mid-Range")).unwrap();
        assert_eq!(event.outcome, ShotOutcome::Missed);
        assert_eq!(event.value, ShotValue::TwoPoint);
        assert!(!event.is_made());
        assert!(!event.is_three());
    }

    #[test]
    fn test_missing_three_marker_means_two() {
        // Absence of the marker implies a two-point attempt
        let event =
            ShotEvent::classify(&raw("Made Shot", "Field Goal", "Restricted Area")).unwrap();
        assert_eq!(event.value, ShotValue::TwoPoint);
    }

    #[test]
    fn test_unknown_outcome_rejected() {
        let err = ShotEvent::classify(&raw("Blocked", "2PT Field Goal", "Mid-Range")).unwrap_err();
        match err {
            DataContractError::UnknownOutcome(label) => assert_eq!(label, "Blocked"),
            other => panic!("expected UnknownOutcome, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(matches!(
            ShotEvent::classify(&raw("", "2PT Field Goal", "Mid-Range")),
            Err(DataContractError::MissingField("event_type"))
        ));
        assert!(matches!(
            ShotEvent::classify(&raw("Made Shot", "", "Mid-Range")),
            Err(DataContractError::MissingField("shot_type"))
        ));
        assert!(matches!(
            ShotEvent::classify(&raw("Made Shot", "2PT Field Goal", "")),
            Err(DataContractError::MissingField("shot_zone_basic"))
        ));
    }

    #[test]
    fn test_classify_all_fails_fast() {
        let batch = vec![
            raw("Made Shot", "2PT Field Goal", "Restricted Area"),
            raw("Blocked", "2PT Field Goal", "Mid-Range"),
            raw("Missed Shot", "3PT Field Goal", "Above the Break 3"),
        ];
        assert!(classify_all(&batch).is_err(), "one bad record must reject the whole batch");
    }
}
