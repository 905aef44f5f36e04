//! Shared UI components for the clarity dashboard.
//!
//! Provides the theme system, the tooltip widget, and the analysis-event
//! marker and timeline components shared between clarity apps.

pub mod event_marker;
pub mod events_list;
pub mod theme;
pub mod tooltip;

pub use event_marker::{event_display, EventDisplay, EventMarker, HOVER_INTENT_DELAY};
pub use events_list::EventsList;
pub use theme::{Theme, ThemeSwitcher, ThemedRoot, CURRENT_THEME};
pub use tooltip::{Tooltip, TooltipPlacement};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
