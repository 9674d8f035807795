use dioxus::prelude::*;

use super::checkbox_group::checkbox_group;
use crate::context::use_locale;
use crate::core::giver::ServiceRadiusKm;
use crate::core::registration::RegistrationForm;
use crate::t;

#[component]
pub fn GiverForm(form: Signal<RegistrationForm>) -> Element {
    let _locale = use_locale();
    let mut form = form;
    let profile = form.read().giver_profile.clone();

    rsx! {
        section { class: "signup-panel signup-panel--giver",
            h3 { class: "signup-panel__title", {t!("giver-title")} }

            label { class: "signup-field",
                span { class: "signup-field__label", {t!("giver-radius-label")} }
                input {
                    class: "signup-field__input",
                    r#type: "number",
                    name: "service_radius_km",
                    min: "{ServiceRadiusKm::MIN}",
                    max: "{ServiceRadiusKm::MAX}",
                    value: "{profile.service_radius_km.get()}",
                    oninput: move |evt: FormEvent| {
                        form.with_mut(|f| f.giver_profile.set_service_radius_input(&evt.value()));
                    },
                }
            }

            {checkbox_group(
                "skills",
                t!("giver-skills-label"),
                &profile.skills,
                form,
                |f, skill, checked| f.giver_profile.set_skill(skill, checked),
            )}

            {checkbox_group(
                "availability",
                t!("giver-availability-label"),
                &profile.availability,
                form,
                |f, slot, checked| f.giver_profile.set_availability(slot, checked),
            )}

            label { class: "signup-field",
                span { class: "signup-field__label", {t!("giver-intro-label")} }
                textarea {
                    class: "signup-field__input signup-field__input--multiline",
                    name: "intro",
                    rows: "4",
                    placeholder: t!("giver-intro-placeholder"),
                    value: "{profile.intro}",
                    oninput: move |evt: FormEvent| {
                        form.with_mut(|f| f.giver_profile.set_intro(evt.value()));
                    },
                }
            }

            label { class: "signup-consent",
                input {
                    r#type: "checkbox",
                    name: "is_vetted_helper",
                    checked: profile.is_vetted_helper,
                    onchange: move |evt: FormEvent| {
                        form.with_mut(|f| f.giver_profile.set_vetted_helper(evt.checked()));
                    },
                }
                span { {t!("giver-vetted-label")} }
            }
        }
    }
}
