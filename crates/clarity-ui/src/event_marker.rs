//! Single analysis-event marker.
//!
//! Version markers render as a compact badge; every other category renders
//! as a localized label followed by the event name, with the description
//! (when present) revealed on hover.

use clarity_core::{AnalysisEvent, EventCategory};
use clarity_l10n::{default_bundle, MessageBundle};
use dioxus::prelude::*;

use crate::tooltip::{Tooltip, TooltipPlacement};

/// Hover-intent delay for event tooltips, in seconds
pub const HOVER_INTENT_DELAY: f32 = 0.5;

/// Resolved display form of one event, selected once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDisplay {
    /// Compact badge with a "<version label> <name>" hover overlay
    VersionBadge { name: String, tooltip: String },
    /// "<category label>: <name>", with the description as overlay when present
    Labeled {
        label: String,
        name: String,
        tooltip: Option<String>,
    },
}

/// Map an event to its display form. Pure: the same event and bundle always
/// give the same display.
pub fn event_display(event: &AnalysisEvent, bundle: &MessageBundle) -> EventDisplay {
    match event.category {
        EventCategory::Version => EventDisplay::VersionBadge {
            name: event.name.clone(),
            tooltip: format!("{} {}", bundle.translate("version"), event.name),
        },
        category => EventDisplay::Labeled {
            label: bundle.translate2("event.category", category.key()),
            name: event.name.clone(),
            tooltip: event.description.clone().filter(|d| !d.is_empty()),
        },
    }
}

/// Renders one timeline-event marker
#[component]
pub fn EventMarker(event: AnalysisEvent) -> Element {
    match event_display(&event, default_bundle()) {
        EventDisplay::VersionBadge { name, tooltip } => rsx! {
            Tooltip {
                overlay: tooltip,
                mouse_enter_delay: HOVER_INTENT_DELAY,
                span { class: "analysis-event badge", "{name}" }
            }
        },
        EventDisplay::Labeled {
            label,
            name,
            tooltip: Some(tooltip),
        } => rsx! {
            div {
                class: "analysis-event",
                span { class: "note", "{label}:" }
                " "
                Tooltip {
                    overlay: tooltip,
                    placement: TooltipPlacement::Left,
                    mouse_enter_delay: HOVER_INTENT_DELAY,
                    strong { "{name}" }
                }
            }
        },
        EventDisplay::Labeled {
            label,
            name,
            tooltip: None,
        } => rsx! {
            div {
                class: "analysis-event",
                span { class: "note", "{label}:" }
                " "
                strong { "{name}" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use clarity_core::EventCategory;

    fn version_event(name: &str) -> AnalysisEvent {
        AnalysisEvent::version(name, Utc::now())
    }

    #[test]
    fn test_version_event_becomes_badge_with_tooltip() {
        let display = event_display(&version_event("6.3"), default_bundle());
        assert_eq!(
            display,
            EventDisplay::VersionBadge {
                name: "6.3".to_string(),
                tooltip: "Version 6.3".to_string(),
            }
        );
    }

    #[test]
    fn test_described_event_gets_label_and_tooltip() {
        let event = AnalysisEvent::new(EventCategory::QualityGate, "Gate A", Utc::now())
            .with_description("Passed");
        let display = event_display(&event, default_bundle());
        assert_eq!(
            display,
            EventDisplay::Labeled {
                label: "Quality Gate".to_string(),
                name: "Gate A".to_string(),
                tooltip: Some("Passed".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_description_means_no_tooltip() {
        let event =
            AnalysisEvent::new(EventCategory::Other, "x", Utc::now()).with_description("");
        let display = event_display(&event, default_bundle());
        assert_eq!(
            display,
            EventDisplay::Labeled {
                label: "Other".to_string(),
                name: "x".to_string(),
                tooltip: None,
            }
        );
    }

    #[test]
    fn test_absent_description_means_no_tooltip() {
        let event = AnalysisEvent::new(EventCategory::QualityProfile, "Sonar way", Utc::now());
        let display = event_display(&event, default_bundle());
        assert_eq!(
            display,
            EventDisplay::Labeled {
                label: "Quality Profile".to_string(),
                name: "Sonar way".to_string(),
                tooltip: None,
            }
        );
    }

    #[test]
    fn test_display_is_idempotent() {
        let event = AnalysisEvent::new(EventCategory::QualityGate, "Gate A", Utc::now())
            .with_description("2 conditions failed");
        let first = event_display(&event, default_bundle());
        let second = event_display(&event, default_bundle());
        assert_eq!(first, second);
    }

    #[test]
    fn test_sparse_bundle_echoes_label_key() {
        let event = AnalysisEvent::new(EventCategory::Other, "x", Utc::now());
        let display = event_display(&event, &MessageBundle::empty());
        assert_eq!(
            display,
            EventDisplay::Labeled {
                label: "event.category.OTHER".to_string(),
                name: "x".to_string(),
                tooltip: None,
            }
        );
    }
}
