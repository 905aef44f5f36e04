//! Overview panels

mod gate_panel;
mod overview;

pub use gate_panel::GatePanel;
pub use overview::{MeasureCards, OverviewHeader};
