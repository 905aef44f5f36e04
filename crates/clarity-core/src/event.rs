//! Analysis timeline events

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// What kind of marker an analysis event is.
///
/// Wire keys are the screaming forms (`VERSION`, `QUALITY_GATE`, ...).
/// Anything unrecognized collapses to [`EventCategory::Other`] so the
/// renderer only ever sees a known tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    Version,
    QualityGate,
    QualityProfile,
    Other,
}

impl<'de> Deserialize<'de> for EventCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key))
    }
}

impl EventCategory {
    /// Wire key for this category
    pub fn key(&self) -> &'static str {
        match self {
            Self::Version => "VERSION",
            Self::QualityGate => "QUALITY_GATE",
            Self::QualityProfile => "QUALITY_PROFILE",
            Self::Other => "OTHER",
        }
    }

    /// Parse a wire key, collapsing unknown keys to `Other`
    pub fn from_key(key: &str) -> Self {
        match key {
            "VERSION" => Self::Version,
            "QUALITY_GATE" => Self::QualityGate,
            "QUALITY_PROFILE" => Self::QualityProfile,
            _ => Self::Other,
        }
    }
}

/// A timestamped marker on a project's analysis timeline.
///
/// Events are read-only to everything downstream of the analysis that
/// produced them; renderers are pure functions of the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisEvent {
    pub category: EventCategory,
    /// Display label, e.g. a version string or gate transition
    pub name: String,
    /// Optional explanatory text shown on hover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

impl AnalysisEvent {
    pub fn new(category: EventCategory, name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            category,
            name: name.into(),
            description: None,
            date,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Create a version marker event
    pub fn version(name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self::new(EventCategory::Version, name, date)
    }

    /// True if the event carries a non-empty description
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Timeline ordering: version markers ahead of other events on the
    /// same analysis, newest analyses first.
    pub fn timeline_cmp(&self, other: &Self) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then_with(|| {
                let rank = |c: &EventCategory| match c {
                    EventCategory::Version => 0,
                    _ => 1,
                };
                rank(&self.category).cmp(&rank(&other.category))
            })
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Sort events into timeline display order
pub fn sort_timeline(events: &mut [AnalysisEvent]) {
    events.sort_by(AnalysisEvent::timeline_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_category_keys_round() {
        assert_eq!(EventCategory::Version.key(), "VERSION");
        assert_eq!(EventCategory::from_key("QUALITY_GATE"), EventCategory::QualityGate);
        assert_eq!(EventCategory::from_key("QUALITY_PROFILE"), EventCategory::QualityProfile);
    }

    #[test]
    fn test_unknown_category_collapses_to_other() {
        assert_eq!(EventCategory::from_key("SOMETHING_NEW"), EventCategory::Other);

        let json = r#"{"category":"SOMETHING_NEW","name":"x","date":"2026-01-10T00:00:00Z"}"#;
        let event: AnalysisEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.category, EventCategory::Other);
    }

    #[test]
    fn test_has_description_treats_empty_as_absent() {
        let event = AnalysisEvent::version("6.3", at(0));
        assert!(!event.has_description());

        let event = event.with_description("");
        assert!(!event.has_description());

        let event = AnalysisEvent::new(EventCategory::QualityGate, "Gate A", at(0))
            .with_description("Passed");
        assert!(event.has_description());
    }

    #[test]
    fn test_timeline_order_versions_first_newest_first() {
        let mut events = vec![
            AnalysisEvent::new(EventCategory::QualityGate, "Failed (was Passed)", at(100)),
            AnalysisEvent::version("6.3", at(100)),
            AnalysisEvent::version("6.2", at(50)),
        ];
        sort_timeline(&mut events);

        assert_eq!(events[0].name, "6.3");
        assert_eq!(events[1].name, "Failed (was Passed)");
        assert_eq!(events[2].name, "6.2");
    }
}
