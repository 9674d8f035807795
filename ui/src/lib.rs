//! Shared UI crate for CareMatch. Registration state, i18n and every view live
//! here; the platform crates only add routing, preferences and a submission boundary.

use dioxus::prelude::*;

/// Shared light/dark theme stylesheet.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod context;
pub mod core;
pub mod i18n;
pub mod signup;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::{nav_link, register_nav, AppNavbar, NavBuilder, NavLinkFn, NavTarget};

    mod footer;
    pub use footer::AppFooter;
}
