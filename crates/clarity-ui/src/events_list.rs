//! Analysis-event timeline list

use clarity_core::{sort_timeline, AnalysisEvent};
use clarity_l10n::translate;
use dioxus::prelude::*;

use crate::event_marker::EventMarker;

/// Renders a project's analysis events in timeline order: version markers
/// ahead of other events for the same analysis, newest analyses first.
#[component]
pub fn EventsList(events: Vec<AnalysisEvent>) -> Element {
    let mut ordered = events;
    sort_timeline(&mut ordered);

    let empty_label = translate("overview.events.empty");

    rsx! {
        div {
            class: "analysis-events",
            if ordered.is_empty() {
                div { class: "analysis-events-empty", "{empty_label}" }
            }
            for event in ordered.iter() {
                EventMarker { event: event.clone() }
            }
        }
    }
}
