//! Project snapshot loaded at startup

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use clarity_core::{
    AnalysisEvent, Condition, EventCategory, GateOperator, InMemoryMeasures, Measure, QualityGate,
};

/// Env var naming a snapshot JSON file to load instead of the sample
pub const SNAPSHOT_ENV: &str = "CLARITY_SNAPSHOT";

/// Errors that can occur while loading a snapshot file
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One measure shown on the overview, with its display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureEntry {
    pub metric_key: String,
    pub label: String,
    pub measure: Measure,
}

impl MeasureEntry {
    pub fn new(metric_key: impl Into<String>, label: impl Into<String>, measure: Measure) -> Self {
        Self {
            metric_key: metric_key.into(),
            label: label.into(),
            measure,
        }
    }

    /// Value as shown on a measure card
    pub fn display_value(&self) -> String {
        if let Some(s) = &self.measure.string_value {
            return s.clone();
        }
        match self.measure.value {
            Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
            Some(v) => format!("{:.1}", v),
            None => "–".to_string(),
        }
    }
}

/// Everything the overview renders for one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub name: String,
    pub current_version: String,
    pub analyzed_at: DateTime<Utc>,
    pub measures: Vec<MeasureEntry>,
    pub gate: QualityGate,
    pub events: Vec<AnalysisEvent>,
}

impl ProjectSnapshot {
    /// Load the snapshot named by [`SNAPSHOT_ENV`], falling back to the
    /// built-in sample when the var is unset or the file cannot be loaded.
    pub fn load() -> Self {
        match std::env::var(SNAPSHOT_ENV) {
            Ok(path) => match Self::from_file(&path) {
                Ok(snapshot) => {
                    info!(path = %path, project = %snapshot.name, "loaded snapshot");
                    snapshot
                }
                Err(e) => {
                    warn!(path = %path, "failed to load snapshot ({e}), showing sample data");
                    Self::sample()
                }
            },
            Err(_) => Self::sample(),
        }
    }

    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Measures keyed for gate evaluation
    pub fn measure_provider(&self) -> InMemoryMeasures {
        let mut measures = InMemoryMeasures::new();
        for entry in &self.measures {
            measures.insert(entry.metric_key.clone(), entry.measure.clone());
        }
        measures
    }

    /// Built-in demo project
    pub fn sample() -> Self {
        let analyzed_at = Utc::now();
        let previous = analyzed_at - Duration::days(12);

        let gate = QualityGate::new("Sonar way")
            .condition(
                Condition::new("bugs", GateOperator::GreaterThan)
                    .warning("1")
                    .error("2"),
            )
            .condition(
                Condition::new("coverage", GateOperator::LessThan)
                    .warning("80")
                    .error("50"),
            )
            .condition(
                Condition::new("new_vulnerabilities", GateOperator::GreaterThan)
                    .error("0")
                    .over_leak_period(),
            );

        let events = vec![
            AnalysisEvent::version("6.3", analyzed_at),
            AnalysisEvent::new(
                EventCategory::QualityGate,
                "Warning (was Passed)",
                analyzed_at,
            )
            .with_description("bugs GT 1 (actual 2), coverage LT 80 (actual 68.7)"),
            AnalysisEvent::version("6.2", previous),
            AnalysisEvent::new(EventCategory::QualityProfile, "Sonar way (Java)", previous),
            AnalysisEvent::new(EventCategory::Other, "Infrastructure migration", previous),
        ];

        Self {
            name: "Clarity".to_string(),
            current_version: "6.3".to_string(),
            analyzed_at,
            measures: vec![
                MeasureEntry::new("bugs", "Bugs", Measure::of(2.0)),
                MeasureEntry::new("coverage", "Coverage", Measure::of(68.7).with_leak(54.2)),
                MeasureEntry::new("code_smells", "Code Smells", Measure::of(147.0)),
                MeasureEntry::new(
                    "new_vulnerabilities",
                    "New Vulnerabilities",
                    Measure::default().with_leak(0.0),
                ),
                MeasureEntry::new("new_lines", "New Lines", Measure::of(640.0)),
            ],
            gate,
            events,
        }
    }
}
