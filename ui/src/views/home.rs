use dioxus::prelude::*;

use crate::components::{nav_link, NavTarget};
use crate::context::use_locale;
use crate::t;

#[component]
pub fn Home() -> Element {
    // Subscribing to the locale re-renders the page after a language switch.
    let locale = use_locale();
    tracing::debug!("[i18n] Home render lang={}", locale.code());

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                p { class: "hero__brand", {t!("brand-title")} }
                h1 { class: "hero__title", {t!("home-hero-title")} }
                p { class: "hero__subtitle", {t!("home-hero-subtitle")} }
                div { class: "hero__actions",
                    {nav_link(NavTarget::SignUp, "button button--primary", &t!("home-post-need"))}
                    {nav_link(NavTarget::SignUp, "button button--accent", &t!("home-join-volunteer"))}
                }
            }

            div { class: "welcome",
                h2 { class: "welcome__title", {t!("home-welcome-title")} }
                ul { class: "welcome__points",
                    li { class: "welcome__point",
                        h3 { {t!("home-point-seeker-title")} }
                        p { {t!("home-point-seeker-body")} }
                    }
                    li { class: "welcome__point",
                        h3 { {t!("home-point-giver-title")} }
                        p { {t!("home-point-giver-body")} }
                    }
                    li { class: "welcome__point",
                        h3 { {t!("home-point-safety-title")} }
                        p { {t!("home-point-safety-body")} }
                    }
                }
            }
        }
    }
}
