// Theme system for the desktop dashboard
//
// Uses a wrapper div with data-theme attribute instead of web_sys
// since this is a desktop application.

use dioxus::prelude::*;

/// Available themes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// CSS data-theme attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// All available themes
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }
}

/// Global theme signal - use this throughout your app
pub static CURRENT_THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

/// Theme switcher component - toggles between light and dark
#[component]
pub fn ThemeSwitcher() -> Element {
    let current_theme = *CURRENT_THEME.read();
    let next_theme = match current_theme {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };

    rsx! {
        button {
            class: "theme-switcher",
            title: "Switch to {next_theme.display_name()}",
            onclick: move |_| {
                *CURRENT_THEME.write() = next_theme;
            },
            "{current_theme.display_name()}"
        }
    }
}

/// Themed wrapper component - wraps children with data-theme attribute
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            "data-theme": theme.as_str(),
            style: "min-height: 100vh; width: 100%;",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_attribute_values() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::all().len(), 2);
    }
}
