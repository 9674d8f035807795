use crate::context::{switch_locale, toggle_color_mode, use_preferences};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Builds a router link for one destination. Receives the CSS class and the
/// already localized label, which must become the link's only child.
pub type NavLinkFn = fn(class: &str, label: &str) -> Element;

/// Platform shells register one of these so `ui` can render `Link`s without
/// knowing each platform's `Route` enum.
///
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |class, label| rsx!( Link { class: "{class}", to: Route::Home {}, "{label}" } ),
///     signup: |class, label| rsx!( Link { class: "{class}", to: Route::SignUp {}, "{label}" } ),
///     signin: |class, label| rsx!( Link { class: "{class}", to: Route::SignIn {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: NavLinkFn,
    pub signup: NavLinkFn,
    pub signin: NavLinkFn,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    SignUp,
    SignIn,
}

impl NavTarget {
    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::SignUp => "/signup",
            NavTarget::SignIn => "/signin",
        }
    }
}

/// Link to `target` through the registered builder, or a plain anchor when no
/// shell registered one (e.g. component previews).
pub fn nav_link(target: NavTarget, class: &str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => {
            let build = match target {
                NavTarget::Home => builder.home,
                NavTarget::SignUp => builder.signup,
                NavTarget::SignIn => builder.signin,
            };
            build(class, label)
        }
        None => rsx! {
            a { class: "{class}", href: target.path(), "{label}" }
        },
    }
}

#[component]
pub fn AppNavbar() -> Element {
    let preferences = use_preferences();
    let current = preferences();

    tracing::debug!("[i18n] AppNavbar render lang={}", current.locale.code());

    let next_locale = current.locale.toggled();
    let theme_label = i18n::tr(current.color_mode.toggle_label_key());
    let language_label = t!("nav-language-label");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {nav_link(NavTarget::Home, "navbar__brand-link", &t!("brand-title"))}
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links",
                    {nav_link(NavTarget::Home, "navbar__link", &t!("nav-home"))}
                    {nav_link(NavTarget::SignUp, "navbar__link", &t!("nav-signup"))}
                    {nav_link(NavTarget::SignIn, "navbar__link navbar__link--cta", &t!("nav-signin"))}
                }

                div { class: "navbar__controls",
                    button {
                        r#type: "button",
                        class: "navbar__toggle",
                        aria_label: "{theme_label}",
                        title: "{theme_label}",
                        onclick: move |_| toggle_color_mode(preferences),
                        span { aria_hidden: "true", "{current.color_mode.icon()}" }
                    }
                    button {
                        r#type: "button",
                        class: "navbar__locale",
                        aria_label: "{language_label}",
                        lang: next_locale.code(),
                        onclick: move |_| switch_locale(preferences, next_locale),
                        "{current.locale.switch_caption()}"
                    }
                }
            }
        }
    }
}
