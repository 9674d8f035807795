//! Registration aggregate: base identity, role selection, both role sub-forms,
//! the terms checkbox, and the guarded submit that turns it all into one payload.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::giver::GiverProfile;
use super::preferences::Locale;
use super::role::{Role, RoleSelection, RoleSelector, RoleSet};
use super::seeker::SeekerProfile;
use super::submit::{Notice, SubmitBlocked, SubmitError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseProfile {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseField {
    Name,
    Phone,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consent {
    pub key: String,
    #[serde(with = "time::serde::rfc3339")]
    pub granted_at: OffsetDateTime,
}

impl Consent {
    pub const TERMS: &'static str = "terms";

    pub fn terms(granted_at: OffsetDateTime) -> Self {
        Self {
            key: Self::TERMS.to_string(),
            granted_at,
        }
    }
}

/// Immutable snapshot handed to the submission boundary.
///
/// Base profile fields are flattened to the top level; a role's sub-profile is
/// only present when that role is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub external_user_id: String,
    pub locale: Locale,
    pub roles: RoleSet,
    #[serde(flatten)]
    pub base_profile: BaseProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeker_profile: Option<SeekerProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub giver_profile: Option<GiverProfile>,
    pub consents: Vec<Consent>,
}

/// State of one editing session on the registration page.
///
/// Both sub-profiles exist for the whole session; switching roles or tabs only
/// changes which one is shown and submitted, never their contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub external_user_id: String,
    locale: Locale,
    selector: RoleSelector,
    pub base_profile: BaseProfile,
    pub seeker_profile: SeekerProfile,
    pub giver_profile: GiverProfile,
    terms_accepted: bool,
    submitting: bool,
}

impl RegistrationForm {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn set_external_user_id(&mut self, value: impl Into<String>) {
        self.external_user_id = value.into();
    }

    pub fn set_base_field(&mut self, field: BaseField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BaseField::Name => self.base_profile.name = value,
            BaseField::Phone => self.base_profile.phone = value,
            BaseField::Email => self.base_profile.email = value,
        }
    }

    pub fn select_roles(&mut self, selection: RoleSelection) {
        self.selector.select(selection);
    }

    pub fn activate_tab(&mut self, role: Role) -> bool {
        self.selector.activate(role)
    }

    pub fn roles(&self) -> &RoleSet {
        self.selector.roles()
    }

    pub fn role_selection(&self) -> RoleSelection {
        self.selector.selection()
    }

    pub fn tabs(&self) -> &[Role] {
        self.selector.tabs()
    }

    pub fn active_tab(&self) -> Option<Role> {
        self.selector.active()
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Consents that would be attached if the form were submitted at `now`.
    pub fn consent_preview(&self, now: OffsetDateTime) -> Vec<Consent> {
        if self.terms_accepted {
            vec![Consent::terms(now)]
        } else {
            Vec::new()
        }
    }

    /// Payload for the current state, stamped at `now`. Does not check the guards.
    pub fn snapshot(&self, now: OffsetDateTime) -> RegistrationPayload {
        let roles = self.roles().clone();
        RegistrationPayload {
            external_user_id: self.external_user_id.clone(),
            locale: self.locale,
            seeker_profile: roles
                .contains(Role::Seeker)
                .then(|| self.seeker_profile.clone()),
            giver_profile: roles
                .contains(Role::Giver)
                .then(|| self.giver_profile.clone()),
            roles,
            base_profile: self.base_profile.clone(),
            consents: self.consent_preview(now),
        }
    }

    /// Run the submit guards and, when they pass, mark the form as in flight and
    /// return the payload to send. The form's own data is left untouched.
    pub fn begin_submit(
        &mut self,
        now: OffsetDateTime,
    ) -> Result<RegistrationPayload, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        if self.roles().is_empty() {
            return Err(SubmitBlocked::NoRoleSelected);
        }
        if !self.terms_accepted {
            return Err(SubmitBlocked::TermsNotAccepted);
        }

        self.submitting = true;
        Ok(self.snapshot(now))
    }

    /// Apply the boundary's answer. Success resets the session (keeping the
    /// locale); failure leaves every field as it was and re-enables submit.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> Notice {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                *self = Self::new(self.locale);
                Notice::success()
            }
            Err(err) => {
                tracing::warn!("registration submit failed: {err}");
                Notice::failure(&err)
            }
        }
    }
}
