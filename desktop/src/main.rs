#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_nav, AppFooter, AppNavbar, NavBuilder};
use ui::context::use_preferences_provider;
use ui::core::submit::Submitter;
use ui::views::{Home, SignIn, SignUp};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/signup")]
    SignUp {},
    #[route("/signin")]
    SignIn {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("CareMatch – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 820.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    LaunchBuilder::server().launch(App);
}

fn nav_home(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Home {}, "{label}" })
}
fn nav_signup(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::SignUp {}, "{label}" })
}
fn nav_signin(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::SignIn {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    register_nav(NavBuilder {
        home: nav_home,
        signup: nav_signup,
        signin: nav_signin,
    });

    // Saved locale + color mode, shared with every view through context.
    let preferences = use_preferences_provider();
    // No server attached to the desktop build: payloads are logged locally.
    use_context_provider(Submitter::logging);

    let prefs = preferences();

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            class: "app",
            lang: prefs.locale.code(),
            "data-theme": prefs.color_mode.data_theme(),
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific layout around the shared navbar and footer
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }
        main { class: "app__main", Outlet::<Route> {} }
        AppFooter { }
    }
}
