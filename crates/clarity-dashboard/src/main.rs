use dioxus::prelude::*;

mod app;
mod components;
mod state;

/// Component CSS (loaded from assets/style.css at compile time)
const STYLE_CSS: &str = include_str!("../assets/style.css");

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Launch Dioxus desktop app with custom CSS
    LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title("Clarity Project Overview")
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 760.0)),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    clarity_ui::SHARED_CSS,
                    STYLE_CSS
                )),
        )
        .launch(app::App);
}
