use dioxus::prelude::*;

use super::checkbox_group::checkbox_group;
use crate::context::use_locale;
use crate::core::registration::RegistrationForm;
use crate::core::seeker::ContactField;
use crate::t;

#[component]
pub fn SeekerForm(form: Signal<RegistrationForm>) -> Element {
    let _locale = use_locale();
    let mut form = form;
    let profile = form.read().seeker_profile.clone();

    rsx! {
        section { class: "signup-panel signup-panel--seeker",
            h3 { class: "signup-panel__title", {t!("seeker-title")} }

            label { class: "signup-field",
                span { class: "signup-field__label", {t!("seeker-address-label")} }
                input {
                    class: "signup-field__input",
                    r#type: "text",
                    name: "address_text",
                    placeholder: t!("seeker-address-placeholder"),
                    value: "{profile.address_text}",
                    oninput: move |evt: FormEvent| {
                        form.with_mut(|f| f.seeker_profile.set_address_text(evt.value()));
                    },
                }
            }

            div { class: "signup-row",
                label { class: "signup-field",
                    span { class: "signup-field__label", {t!("seeker-longitude-label")} }
                    input {
                        class: "signup-field__input",
                        r#type: "number",
                        name: "longitude",
                        step: "any",
                        min: "-180",
                        max: "180",
                        value: "{profile.geo.longitude()}",
                        oninput: move |evt: FormEvent| {
                            form.with_mut(|f| f.seeker_profile.set_longitude_input(&evt.value()));
                        },
                    }
                }
                label { class: "signup-field",
                    span { class: "signup-field__label", {t!("seeker-latitude-label")} }
                    input {
                        class: "signup-field__input",
                        r#type: "number",
                        name: "latitude",
                        step: "any",
                        min: "-90",
                        max: "90",
                        value: "{profile.geo.latitude()}",
                        oninput: move |evt: FormEvent| {
                            form.with_mut(|f| f.seeker_profile.set_latitude_input(&evt.value()));
                        },
                    }
                }
            }

            {checkbox_group(
                "needs_categories",
                t!("seeker-needs-label"),
                &profile.needs_categories,
                form,
                |f, category, checked| f.seeker_profile.set_need(category, checked),
            )}

            fieldset { class: "signup-contacts",
                legend { class: "signup-checkboxes__legend", {t!("seeker-contacts-label")} }
                if profile.emergency_contacts.is_empty() {
                    p { class: "signup-contacts__empty", {t!("seeker-contacts-empty")} }
                }
                for (index, contact) in profile.emergency_contacts.iter().enumerate() {
                    div {
                        key: "contact-{index}",
                        class: "signup-contacts__row",
                        input {
                            class: "signup-field__input",
                            r#type: "text",
                            placeholder: t!("seeker-contact-name"),
                            value: "{contact.name}",
                            oninput: move |evt: FormEvent| {
                                form.with_mut(|f| f.seeker_profile.update_contact(index, ContactField::Name, evt.value()));
                            },
                        }
                        input {
                            class: "signup-field__input",
                            r#type: "tel",
                            placeholder: t!("seeker-contact-phone"),
                            value: "{contact.phone}",
                            oninput: move |evt: FormEvent| {
                                form.with_mut(|f| f.seeker_profile.update_contact(index, ContactField::Phone, evt.value()));
                            },
                        }
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| {
                                form.with_mut(|f| f.seeker_profile.remove_contact(index));
                            },
                            {t!("seeker-contact-remove")}
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--accent",
                    onclick: move |_| form.with_mut(|f| f.seeker_profile.add_contact()),
                    {t!("seeker-contact-add")}
                }
            }
        }
    }
}
