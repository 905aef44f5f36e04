//! Quality gate evaluation
//!
//! A gate is a set of threshold conditions over project metrics. Evaluating
//! a gate against the project's measures yields a per-condition level and an
//! overall status (worst condition wins), plus a JSON details payload for
//! persistence alongside the analysis.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::event::{AnalysisEvent, EventCategory};

/// Metric key for the changeset-size circuit breaker
pub const NEW_LINES_KEY: &str = "new_lines";

/// Leak-period conditions are ignored when the changeset is smaller than this
pub const SMALL_CHANGESET_LINES: f64 = 20.0;

/// Comparison operator of a gate condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateOperator {
    #[serde(rename = "GT")]
    GreaterThan,
    #[serde(rename = "LT")]
    LessThan,
}

impl GateOperator {
    /// Wire key ("GT" / "LT")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GreaterThan => "GT",
            Self::LessThan => "LT",
        }
    }

    /// Parse a wire key
    pub fn from_key(key: &str) -> CoreResult<Self> {
        match key {
            "GT" => Ok(Self::GreaterThan),
            "LT" => Ok(Self::LessThan),
            other => Err(CoreError::UnknownOperator(other.to_string())),
        }
    }

    /// True if `actual` breaches `threshold` under this operator
    pub fn breaches(&self, actual: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterThan => actual > threshold,
            Self::LessThan => actual < threshold,
        }
    }
}

/// Level of an evaluated condition, and overall gate status.
///
/// Ordered by severity so the gate status is the max over conditions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateStatus {
    #[default]
    Ok,
    Warn,
    Error,
}

impl GateStatus {
    /// Wire key ("OK" / "WARN" / "ERROR")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Display name for event labels
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ok => "Passed",
            Self::Warn => "Warning",
            Self::Error => "Failed",
        }
    }
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One threshold condition of a quality gate.
///
/// Thresholds stay strings in the model (they are strings on the wire and
/// in the details payload) and are parsed at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub metric_key: String,
    pub operator: GateOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_threshold: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_threshold: Option<String>,
    /// Evaluate against the leak-period value instead of the absolute value
    #[serde(default)]
    pub over_leak_period: bool,
}

impl Condition {
    pub fn new(metric_key: impl Into<String>, operator: GateOperator) -> Self {
        Self {
            metric_key: metric_key.into(),
            operator,
            warning_threshold: None,
            error_threshold: None,
            over_leak_period: false,
        }
    }

    pub fn warning(mut self, threshold: impl Into<String>) -> Self {
        self.warning_threshold = Some(threshold.into());
        self
    }

    pub fn error(mut self, threshold: impl Into<String>) -> Self {
        self.error_threshold = Some(threshold.into());
        self
    }

    pub fn over_leak_period(mut self) -> Self {
        self.over_leak_period = true;
        self
    }

    fn parse_threshold(&self, raw: &str) -> CoreResult<f64> {
        raw.parse::<f64>().map_err(|_| CoreError::InvalidThreshold {
            metric: self.metric_key.clone(),
            value: raw.to_string(),
        })
    }
}

/// A named quality gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityGate {
    pub name: String,
    pub conditions: Vec<Condition>,
}

impl QualityGate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conditions: Vec::new(),
        }
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Keys of the metrics involved in computing the gate status.
    ///
    /// Includes `new_lines` when any condition runs over the leak period,
    /// for the circuit breaker on small changesets.
    pub fn metric_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.conditions.iter().map(|c| c.metric_key.as_str()).collect();
        if self.conditions.iter().any(|c| c.over_leak_period)
            && !keys.contains(&NEW_LINES_KEY)
        {
            keys.push(NEW_LINES_KEY);
        }
        keys
    }
}

/// A measured value for one metric
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Measure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    /// Value over the leak period (new code)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leak_value: Option<f64>,
}

impl Measure {
    pub fn of(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn with_leak(mut self, leak: f64) -> Self {
        self.leak_value = Some(leak);
        self
    }
}

/// Source of measures during evaluation
pub trait MeasureProvider {
    fn get(&self, metric_key: &str) -> Option<&Measure>;
}

/// In-memory measures keyed by metric
#[derive(Debug, Clone, Default)]
pub struct InMemoryMeasures {
    measures: HashMap<String, Measure>,
}

impl InMemoryMeasures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric_key: impl Into<String>, measure: Measure) -> &mut Self {
        self.measures.insert(metric_key.into(), measure);
        self
    }
}

impl MeasureProvider for InMemoryMeasures {
    fn get(&self, metric_key: &str) -> Option<&Measure> {
        self.measures.get(metric_key)
    }
}

/// Outcome of one condition
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedCondition {
    pub condition: Condition,
    pub level: GateStatus,
    /// Actual measured value, empty when the measure was absent
    pub actual_value: String,
}

/// Outcome of a full gate evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedGate {
    pub status: GateStatus,
    pub conditions: Vec<EvaluatedCondition>,
    /// True when leak-period conditions were skipped on a small changeset
    pub ignored_conditions: bool,
}

#[derive(Serialize)]
struct ConditionDetails<'a> {
    metric: &'a str,
    op: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    actual: &'a str,
    level: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GateDetails<'a> {
    level: &'a str,
    conditions: Vec<ConditionDetails<'a>>,
    ignored_conditions: bool,
}

impl EvaluatedGate {
    /// JSON details payload stored alongside the analysis
    pub fn details_json(&self) -> String {
        let details = GateDetails {
            level: self.status.as_str(),
            conditions: self
                .conditions
                .iter()
                .map(|ec| ConditionDetails {
                    metric: &ec.condition.metric_key,
                    op: ec.condition.operator.as_str(),
                    warning: ec.condition.warning_threshold.as_deref(),
                    error: ec.condition.error_threshold.as_deref(),
                    actual: &ec.actual_value,
                    level: ec.level.as_str(),
                })
                .collect(),
            ignored_conditions: self.ignored_conditions,
        };
        // Serialization of string/bool fields cannot fail
        serde_json::to_string(&details).unwrap_or_default()
    }

    /// Human-readable summary of the failing conditions
    pub fn failing_summary(&self) -> Option<String> {
        let failing: Vec<String> = self
            .conditions
            .iter()
            .filter(|ec| ec.level > GateStatus::Ok)
            .map(|ec| {
                format!(
                    "{} {} {} (actual {})",
                    ec.condition.metric_key,
                    ec.condition.operator.as_str(),
                    threshold_for_level(&ec.condition, ec.level).unwrap_or(""),
                    ec.actual_value
                )
            })
            .collect();
        if failing.is_empty() {
            None
        } else {
            Some(failing.join(", "))
        }
    }

    /// Timeline event for a gate status transition, or `None` when the
    /// status did not change.
    pub fn change_event(&self, previous: GateStatus, date: DateTime<Utc>) -> Option<AnalysisEvent> {
        if self.status == previous {
            return None;
        }
        let name = format!(
            "{} (was {})",
            self.status.display_name(),
            previous.display_name()
        );
        let mut event = AnalysisEvent::new(EventCategory::QualityGate, name, date);
        if let Some(summary) = self.failing_summary() {
            event = event.with_description(summary);
        }
        Some(event)
    }
}

fn threshold_for_level(condition: &Condition, level: GateStatus) -> Option<&str> {
    match level {
        GateStatus::Error => condition.error_threshold.as_deref(),
        GateStatus::Warn => condition.warning_threshold.as_deref(),
        GateStatus::Ok => None,
    }
}

/// Format an actual value the way thresholds are written: integral values
/// without a fractional part.
fn format_actual(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Evaluate a gate against the project's measures.
///
/// The gate status is the worst condition level. Conditions over the leak
/// period are skipped (and the result flagged) when the changeset is below
/// [`SMALL_CHANGESET_LINES`].
pub fn evaluate(gate: &QualityGate, measures: &impl MeasureProvider) -> CoreResult<EvaluatedGate> {
    let small_changeset = gate.conditions.iter().any(|c| c.over_leak_period)
        && measures
            .get(NEW_LINES_KEY)
            .and_then(|m| m.value)
            .is_some_and(|lines| lines < SMALL_CHANGESET_LINES);

    let mut ignored_conditions = false;
    let mut conditions = Vec::with_capacity(gate.conditions.len());

    for condition in &gate.conditions {
        if condition.over_leak_period && small_changeset {
            ignored_conditions = true;
            conditions.push(EvaluatedCondition {
                condition: condition.clone(),
                level: GateStatus::Ok,
                actual_value: String::new(),
            });
            continue;
        }
        conditions.push(evaluate_condition(condition, measures)?);
    }

    let status = conditions
        .iter()
        .map(|ec| ec.level)
        .max()
        .unwrap_or(GateStatus::Ok);

    debug!(
        gate = %gate.name,
        status = %status,
        conditions = conditions.len(),
        ignored = ignored_conditions,
        "evaluated quality gate"
    );

    Ok(EvaluatedGate {
        status,
        conditions,
        ignored_conditions,
    })
}

/// Evaluate one condition. A condition whose measure is absent or carries
/// no numeric value passes with an empty actual value.
pub fn evaluate_condition(
    condition: &Condition,
    measures: &impl MeasureProvider,
) -> CoreResult<EvaluatedCondition> {
    let measure = measures.get(&condition.metric_key);
    let actual = measure.and_then(|m| {
        if condition.over_leak_period {
            m.leak_value
        } else {
            m.value
        }
    });

    let Some(actual) = actual else {
        return Ok(EvaluatedCondition {
            condition: condition.clone(),
            level: GateStatus::Ok,
            actual_value: String::new(),
        });
    };

    let mut level = GateStatus::Ok;
    if let Some(raw) = &condition.error_threshold {
        if condition.operator.breaches(actual, condition.parse_threshold(raw)?) {
            level = GateStatus::Error;
        }
    }
    if level == GateStatus::Ok {
        if let Some(raw) = &condition.warning_threshold {
            if condition.operator.breaches(actual, condition.parse_threshold(raw)?) {
                level = GateStatus::Warn;
            }
        }
    }

    Ok(EvaluatedCondition {
        condition: condition.clone(),
        level,
        actual_value: format_actual(actual),
    })
}
