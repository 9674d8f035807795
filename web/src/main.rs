use dioxus::prelude::*;

use ui::components::{register_nav, AppFooter, AppNavbar, NavBuilder};
use ui::context::use_preferences_provider;
use ui::core::submit::Submitter;
use ui::views::{Home, SignIn, SignUp};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/signup")]
    SignUp {},
    #[route("/signin")]
    SignIn {},
}

fn nav_home(class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_signup(class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::SignUp {},
        "{label}"
    })
}
fn nav_signin(class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::SignIn {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            signup: nav_signup,
            signin: nav_signin,
        });
    }

    let preferences = use_preferences_provider();
    // Registrations go to the fullstack server function.
    use_context_provider(Submitter::server);

    let prefs = preferences();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div {
            class: "app",
            lang: prefs.locale.code(),
            "data-theme": prefs.color_mode.data_theme(),
            Router::<Route> {}
        }
    }
}

/// A web-specific layout around the shared navbar and footer
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        main { class: "app__main", Outlet::<Route> {} }
        AppFooter {}
    }
}
