use dioxus::prelude::*;

use crate::components::{nav_link, NavTarget};
use crate::context::use_locale;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Provider {
    Line,
    Google,
}

impl Provider {
    fn class(self) -> &'static str {
        match self {
            Provider::Line => "button signin__provider signin__provider--line",
            Provider::Google => "button signin__provider signin__provider--google",
        }
    }
}

/// Provider buttons only. Sign-in itself happens in the provider's own flow,
/// which is not wired into this front end yet.
#[component]
pub fn SignIn() -> Element {
    let _locale = use_locale();
    let mut pending = use_signal(|| Option::<Provider>::None);

    let providers = [
        (Provider::Line, t!("signin-line")),
        (Provider::Google, t!("signin-google")),
    ];

    rsx! {
        section { class: "page page-signin",
            div { class: "signin",
                h1 { class: "signin__title", {t!("signin-title")} }
                p { class: "signin__lead", {t!("signin-lead")} }

                div { class: "signin__providers",
                    for (provider, label) in providers {
                        button {
                            key: "{label}",
                            r#type: "button",
                            class: provider.class(),
                            onclick: move |_| {
                                tracing::info!("sign-in requested via {provider:?}");
                                pending.set(Some(provider));
                            },
                            "{label}"
                        }
                    }
                }

                if pending().is_some() {
                    p { class: "signin__status", role: "status", {t!("signin-unavailable")} }
                }

                p { class: "signin__signup",
                    span { {t!("signin-no-account")} " " }
                    {nav_link(NavTarget::SignUp, "signin__signup-link", &t!("nav-signup"))}
                }
            }
        }
    }
}
