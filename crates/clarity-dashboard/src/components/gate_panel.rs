//! Quality gate panel

use clarity_core::{Condition, EvaluatedGate, GateOperator, GateStatus};
use clarity_l10n::{translate, translate2};
use dioxus::prelude::*;

/// CSS class suffix for a status pill
fn status_class(status: GateStatus) -> &'static str {
    match status {
        GateStatus::Ok => "ok",
        GateStatus::Warn => "warn",
        GateStatus::Error => "error",
    }
}

/// Threshold cell text, e.g. "> 2"
fn threshold_text(condition: &Condition, threshold: Option<&str>) -> String {
    let Some(threshold) = threshold else {
        return "–".to_string();
    };
    let symbol = match condition.operator {
        GateOperator::GreaterThan => ">",
        GateOperator::LessThan => "<",
    };
    format!("{symbol} {threshold}")
}

/// Gate status with one row per condition
#[component]
pub fn GatePanel(evaluated: EvaluatedGate, gate_name: String) -> Element {
    let title = translate("overview.quality_gate");
    let status_label = translate2("gate.status", evaluated.status.as_str());
    let pill_class = format!("status-pill {}", status_class(evaluated.status));
    let ignored_note = translate("overview.quality_gate.ignored_conditions");

    let actual_header = translate("condition.actual");
    let warning_header = translate("condition.warning");
    let error_header = translate("condition.error");

    rsx! {
        section {
            class: "gate-panel",
            div {
                class: "gate-header",
                div { class: "panel-title", "{title}" }
                span { class: "gate-name note", "{gate_name}" }
                span { class: "{pill_class}", "{status_label}" }
            }
            if evaluated.ignored_conditions {
                div { class: "gate-ignored note", "{ignored_note}" }
            }
            table {
                class: "gate-conditions",
                thead {
                    tr {
                        th { "Metric" }
                        th { "{actual_header}" }
                        th { "{warning_header}" }
                        th { "{error_header}" }
                        th {}
                    }
                }
                tbody {
                    for ec in evaluated.conditions.iter() {
                        {
                            let row_pill = format!("status-pill {}", status_class(ec.level));
                            let row_status = translate2("gate.status", ec.level.as_str());
                            let actual = if ec.actual_value.is_empty() {
                                "–".to_string()
                            } else {
                                ec.actual_value.clone()
                            };
                            let warning =
                                threshold_text(&ec.condition, ec.condition.warning_threshold.as_deref());
                            let error =
                                threshold_text(&ec.condition, ec.condition.error_threshold.as_deref());
                            rsx! {
                                tr {
                                    td { class: "gate-metric", "{ec.condition.metric_key}" }
                                    td { "{actual}" }
                                    td { "{warning}" }
                                    td { "{error}" }
                                    td {
                                        span { class: "{row_pill}", "{row_status}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(status_class(GateStatus::Ok), "ok");
        assert_eq!(status_class(GateStatus::Warn), "warn");
        assert_eq!(status_class(GateStatus::Error), "error");
    }

    #[test]
    fn test_threshold_text() {
        let condition = Condition::new("bugs", GateOperator::GreaterThan).error("2");
        assert_eq!(
            threshold_text(&condition, condition.error_threshold.as_deref()),
            "> 2"
        );
        assert_eq!(
            threshold_text(&condition, condition.warning_threshold.as_deref()),
            "–"
        );

        let condition = Condition::new("coverage", GateOperator::LessThan).warning("80");
        assert_eq!(
            threshold_text(&condition, condition.warning_threshold.as_deref()),
            "< 80"
        );
    }
}
