//! Header and measure cards for the overview page

use clarity_core::AnalysisEvent;
use clarity_l10n::translate;
use clarity_ui::{EventMarker, ThemeSwitcher};
use dioxus::prelude::*;

use crate::state::{MeasureEntry, ProjectSnapshot};

/// Project identity bar: name, current version badge, analysis date,
/// theme switcher.
#[component]
pub fn OverviewHeader(snapshot: ProjectSnapshot) -> Element {
    let version_marker =
        AnalysisEvent::version(snapshot.current_version.clone(), snapshot.analyzed_at);
    let analyzed_label = translate("overview.analyzed_at");
    let analyzed_at = snapshot.analyzed_at.format("%Y-%m-%d %H:%M");

    rsx! {
        header {
            class: "overview-header",
            div {
                class: "overview-identity",
                h1 { class: "overview-project", "{snapshot.name}" }
                EventMarker { event: version_marker }
            }
            div {
                class: "overview-meta",
                span { class: "note", "{analyzed_label}: {analyzed_at}" }
                ThemeSwitcher {}
            }
        }
    }
}

/// Measure cards grid
#[component]
pub fn MeasureCards(measures: Vec<MeasureEntry>) -> Element {
    let title = translate("overview.measures");

    rsx! {
        section {
            class: "measures-panel",
            div { class: "panel-title", "{title}" }
            div {
                class: "measures-grid",
                for entry in measures.iter() {
                    div {
                        class: "measure-card",
                        div { class: "measure-label", "{entry.label}" }
                        div { class: "measure-value", "{entry.display_value()}" }
                    }
                }
            }
        }
    }
}
