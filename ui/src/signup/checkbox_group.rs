use dioxus::prelude::*;

use crate::core::catalog::{CatalogOption, MultiSelect};
use crate::core::registration::RegistrationForm;
use crate::i18n;

/// One checkbox per catalog option, labelled through the active locale.
///
/// `apply` writes a single check/uncheck into the form; the group itself holds
/// no state.
pub fn checkbox_group<T: CatalogOption>(
    name: &'static str,
    legend: String,
    selected: &MultiSelect<T>,
    mut form: Signal<RegistrationForm>,
    apply: fn(&mut RegistrationForm, T, bool),
) -> Element {
    rsx! {
        fieldset { class: "signup-checkboxes",
            legend { class: "signup-checkboxes__legend", "{legend}" }
            div { class: "signup-checkboxes__grid",
                for option in T::ALL.iter().copied() {
                    label {
                        key: "{name}-{option.value()}",
                        class: "signup-checkbox",
                        input {
                            r#type: "checkbox",
                            name: name,
                            value: option.value(),
                            checked: selected.contains(option),
                            onchange: move |evt: FormEvent| {
                                let checked = evt.checked();
                                form.with_mut(|f| apply(f, option, checked));
                            },
                        }
                        span { {i18n::tr(option.label_key())} }
                    }
                }
            }
        }
    }
}
