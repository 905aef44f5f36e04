//! Hover tooltip widget.
//!
//! The overlay is rendered next to its trigger and revealed by CSS after a
//! hover-intent delay, so transient mouse movement never flashes a tooltip.

use dioxus::prelude::*;

/// Where the overlay sits relative to the trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPlacement {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

impl TooltipPlacement {
    /// CSS class suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Wraps a child element and reveals `overlay` after `mouse_enter_delay`
/// seconds of continuous hover.
#[component]
pub fn Tooltip(
    /// Text shown in the overlay
    overlay: String,
    #[props(default)]
    placement: TooltipPlacement,
    /// Hover-intent delay in seconds before the overlay appears
    #[props(default = 0.0)]
    mouse_enter_delay: f32,
    children: Element,
) -> Element {
    rsx! {
        span {
            class: "tooltip-trigger",
            style: "--tooltip-delay: {mouse_enter_delay}s",
            {children}
            span {
                class: "tooltip-overlay tooltip-{placement.as_str()}",
                role: "tooltip",
                "{overlay}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_class_suffixes() {
        assert_eq!(TooltipPlacement::Bottom.as_str(), "bottom");
        assert_eq!(TooltipPlacement::Left.as_str(), "left");
        assert_eq!(TooltipPlacement::Top.as_str(), "top");
        assert_eq!(TooltipPlacement::Right.as_str(), "right");
        assert_eq!(TooltipPlacement::default(), TooltipPlacement::Bottom);
    }
}
