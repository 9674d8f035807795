use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::context::{use_locale, use_preferences, use_submitter};
use crate::core::registration::{BaseField, RegistrationForm};
use crate::core::role::Role;
use crate::core::submit::{Notice, NoticeBody};
use crate::i18n;
use crate::signup::{GiverForm, RoleSelector, SeekerForm};
use crate::t;

/// Registration page: base identity, role selection, the active role's
/// sub-form, terms consent and the guarded submit.
#[component]
pub fn SignUp() -> Element {
    let preferences = use_preferences();
    let locale = preferences().locale;
    let submitter = use_submitter();

    let mut form = use_signal(|| RegistrationForm::new(locale));
    let mut notice = use_signal(|| Option::<Notice>::None);

    tracing::debug!("[i18n] SignUp render lang={}", locale.code());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let locale = preferences.peek().locale;
        let started = form.with_mut(|f| {
            f.set_locale(locale);
            f.begin_submit(OffsetDateTime::now_utc())
        });

        match started {
            Ok(payload) => {
                notice.set(None);
                let submitter = submitter.clone();
                // Owned by this scope: leaving the page drops the task and its response.
                spawn(async move {
                    let outcome = submitter.submit(payload).await;
                    let result = form.with_mut(|f| f.finish_submit(outcome));
                    notice.set(Some(result));
                });
            }
            Err(reason) => {
                tracing::debug!("submit blocked: {reason}");
                if let Some(blocked) = Notice::blocked(reason) {
                    notice.set(Some(blocked));
                }
            }
        }
    };

    let (base, terms_accepted, submitting, active_tab, external_user_id) = {
        let current = form.read();
        (
            current.base_profile.clone(),
            current.terms_accepted(),
            current.is_submitting(),
            current.active_tab(),
            current.external_user_id.clone(),
        )
    };
    let consent_preview = serde_json::to_string_pretty(
        &form.read().consent_preview(OffsetDateTime::now_utc()),
    )
    .unwrap_or_else(|_| "[]".to_string());

    rsx! {
        section { class: "page page-signup",
            header { class: "page-signup__header",
                h1 { {t!("signup-title")} }
                p { class: "page-signup__lead", {t!("signup-lead")} }
            }

            if let Some(current) = notice() {
                NoticeBanner { notice: current, on_dismiss: move |_| notice.set(None) }
            }

            form { class: "signup-form", onsubmit: on_submit,
                fieldset { class: "signup-section",
                    legend { class: "signup-section__title", {t!("signup-base-title")} }
                    {base_field(form, BaseField::Name, t!("signup-name-label"), "text", "name", &base.name, true)}
                    {base_field(form, BaseField::Phone, t!("signup-phone-label"), "tel", "tel", &base.phone, true)}
                    {base_field(form, BaseField::Email, t!("signup-email-label"), "email", "email", &base.email, false)}
                    label { class: "signup-field",
                        span { class: "signup-field__label", {t!("signup-external-id-label")} }
                        input {
                            class: "signup-field__input",
                            r#type: "text",
                            name: "external_user_id",
                            value: "{external_user_id}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.set_external_user_id(evt.value())),
                        }
                        span { class: "signup-field__hint", {t!("signup-external-id-hint")} }
                    }
                }

                fieldset { class: "signup-section",
                    legend { class: "signup-section__title", {t!("signup-role-title")} }
                    RoleSelector { form }
                    if active_tab == Some(Role::Seeker) {
                        SeekerForm { form }
                    }
                    if active_tab == Some(Role::Giver) {
                        GiverForm { form }
                    }
                }

                fieldset { class: "signup-section",
                    legend { class: "signup-section__title", {t!("signup-consent-title")} }
                    label { class: "signup-consent",
                        input {
                            r#type: "checkbox",
                            name: "terms",
                            checked: terms_accepted,
                            onchange: move |evt: FormEvent| form.with_mut(|f| f.set_terms_accepted(evt.checked())),
                        }
                        span { {t!("signup-terms-label")} }
                    }
                    label { class: "signup-field",
                        span { class: "signup-field__label", {t!("signup-consent-preview-label")} }
                        textarea {
                            class: "signup-field__input signup-field__input--code",
                            readonly: true,
                            rows: "5",
                            value: "{consent_preview}",
                        }
                    }
                }

                div { class: "signup-actions",
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled: submitting,
                        if submitting {
                            {t!("signup-submitting")}
                        } else {
                            {t!("signup-submit")}
                        }
                    }
                }
            }
        }
    }
}

fn base_field(
    mut form: Signal<RegistrationForm>,
    field: BaseField,
    label: String,
    input_type: &'static str,
    autocomplete: &'static str,
    value: &str,
    required: bool,
) -> Element {
    rsx! {
        label { class: "signup-field",
            span { class: "signup-field__label",
                "{label}"
                if required {
                    span { class: "signup-field__required", aria_hidden: "true", " *" }
                }
            }
            input {
                class: "signup-field__input",
                r#type: input_type,
                autocomplete: autocomplete,
                required: required,
                value: "{value}",
                oninput: move |evt: FormEvent| form.with_mut(|f| f.set_base_field(field, evt.value())),
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<MouseEvent>) -> Element {
    let _locale = use_locale();
    let body = match &notice.body {
        NoticeBody::Localized(key) => i18n::tr(key),
        NoticeBody::Text(text) => text.clone(),
    };

    rsx! {
        div {
            class: "notice {notice.kind.css_class()}",
            role: "status",
            aria_live: "polite",
            div { class: "notice__content",
                strong { class: "notice__title", {i18n::tr(notice.title_key)} }
                p { class: "notice__body", "{body}" }
            }
            button {
                r#type: "button",
                class: "notice__dismiss",
                aria_label: t!("notice-dismiss"),
                onclick: move |evt| on_dismiss.call(evt),
                "×"
            }
        }
    }
}
