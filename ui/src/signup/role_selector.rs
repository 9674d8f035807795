use dioxus::prelude::*;

use crate::context::use_locale;
use crate::core::registration::RegistrationForm;
use crate::core::role::{Role, RoleSelection};
use crate::i18n;
use crate::t;

/// Role `<select>` (seeker / giver / both) and the tab strip for the chosen roles.
#[component]
pub fn RoleSelector(form: Signal<RegistrationForm>) -> Element {
    let _locale = use_locale();
    let mut form = form;
    let (selection, active, tabs): (RoleSelection, Option<Role>, Vec<Role>) = {
        let current = form.read();
        (current.role_selection(), current.active_tab(), current.tabs().to_vec())
    };

    rsx! {
        div { class: "signup-roles",
            label { class: "signup-field",
                span { class: "signup-field__label", {t!("signup-role-label")} }
                select {
                    class: "signup-field__input",
                    name: "role",
                    value: selection.value(),
                    onchange: move |evt: FormEvent| {
                        let selection = RoleSelection::from_value(&evt.value());
                        form.with_mut(|f| f.select_roles(selection));
                    },
                    option {
                        value: RoleSelection::None.value(),
                        selected: selection == RoleSelection::None,
                        {i18n::tr(RoleSelection::None.label_key())}
                    }
                    for option in RoleSelection::OPTIONS {
                        option {
                            key: "{option.value()}",
                            value: option.value(),
                            selected: selection == option,
                            {i18n::tr(option.label_key())}
                        }
                    }
                }
            }

            if tabs.is_empty() {
                p { class: "signup-roles__hint", {t!("signup-role-hint")} }
            } else {
                div { class: "signup-tabs", role: "tablist",
                    for role in tabs {
                        button {
                            key: "{role.value()}",
                            r#type: "button",
                            role: "tab",
                            class: if active == Some(role) { "signup-tabs__tab signup-tabs__tab--active" } else { "signup-tabs__tab" },
                            aria_selected: active == Some(role),
                            onclick: move |_| {
                                form.with_mut(|f| f.activate_tab(role));
                            },
                            {i18n::tr(role.label_key())}
                        }
                    }
                }
                if let Some(role) = active {
                    p { class: "signup-tabs__description", {i18n::tr(role.description_key())} }
                }
            }
        }
    }
}
