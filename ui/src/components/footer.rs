use dioxus::prelude::*;
use time::OffsetDateTime;

use super::app_navbar::{nav_link, NavTarget};
use crate::context::use_locale;
use crate::t;

#[component]
pub fn AppFooter() -> Element {
    let _locale = use_locale();
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", {t!("brand-title")} }
                    p { class: "footer__about", {t!("footer-about")} }
                }
                nav { class: "footer__links",
                    {nav_link(NavTarget::Home, "footer__link", &t!("nav-home"))}
                    {nav_link(NavTarget::SignUp, "footer__link", &t!("nav-signup"))}
                    {nav_link(NavTarget::SignIn, "footer__link", &t!("nav-signin"))}
                }
                p { class: "footer__copyright", {t!("footer-copyright", year = year)} }
            }
        }
    }
}
