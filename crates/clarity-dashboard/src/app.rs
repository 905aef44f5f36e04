use clarity_core::evaluate;
use clarity_l10n::translate;
use clarity_ui::{EventsList, ThemedRoot};
use dioxus::prelude::*;

use crate::components::{GatePanel, MeasureCards, OverviewHeader};
use crate::state::ProjectSnapshot;

/// Root App component for the clarity project overview.
///
/// Composes the header (project identity, version badge, theme switcher),
/// the quality-gate panel, the measure cards, and the analysis-event
/// timeline sidebar.
#[component]
pub fn App() -> Element {
    let snapshot = use_signal(ProjectSnapshot::load);
    let snap = snapshot.read().clone();

    let events_title = translate("overview.events");

    // A gate with malformed thresholds renders as an inline error instead
    // of taking the whole overview down
    let gate_section = match evaluate(&snap.gate, &snap.measure_provider()) {
        Ok(evaluated) => rsx! {
            GatePanel {
                evaluated,
                gate_name: snap.gate.name.clone(),
            }
        },
        Err(e) => {
            let message = format!("{e}");
            rsx! {
                div { class: "gate-error", "{message}" }
            }
        }
    };

    rsx! {
        ThemedRoot {
            div {
                class: "overview-page",
                OverviewHeader { snapshot: snap.clone() }
                div {
                    class: "overview-body",
                    div {
                        class: "overview-main",
                        {gate_section}
                        MeasureCards { measures: snap.measures.clone() }
                    }
                    aside {
                        class: "overview-sidebar",
                        div { class: "panel-title", "{events_title}" }
                        EventsList { events: snap.events.clone() }
                    }
                }
            }
        }
    }
}
