//! End-to-end registration flows driven the way the sign-up page drives them:
//! guard, hand the snapshot to the boundary, apply the outcome.

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use futures::future::{FutureExt, LocalBoxFuture};
use time::macros::datetime;
use time::OffsetDateTime;

use ui::core::catalog::{NeedCategory, Skill};
use ui::core::preferences::Locale;
use ui::core::registration::{BaseField, Consent, RegistrationForm, RegistrationPayload};
use ui::core::role::{Role, RoleSelection};
use ui::core::seeker::ContactField;
use ui::core::submit::{
    Notice, NoticeBody, NoticeKind, SubmissionBoundary, SubmitBlocked, SubmitError, Submitter,
};

const NOW: OffsetDateTime = datetime!(2025-10-01 09:30:00 UTC);

/// Records every payload and answers with a fixed outcome.
#[derive(Clone)]
struct RecordingBoundary {
    calls: Rc<RefCell<Vec<RegistrationPayload>>>,
    outcome: Result<(), SubmitError>,
}

impl RecordingBoundary {
    fn answering(outcome: Result<(), SubmitError>) -> Self {
        Self {
            calls: Rc::default(),
            outcome,
        }
    }

    fn calls(&self) -> Vec<RegistrationPayload> {
        self.calls.borrow().clone()
    }
}

impl SubmissionBoundary for RecordingBoundary {
    fn submit(
        &self,
        payload: RegistrationPayload,
    ) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.calls.borrow_mut().push(payload);
        futures::future::ready(self.outcome.clone()).boxed_local()
    }
}

/// What the page does on submit; `Err` carries the guard notice, if any.
fn submit(form: &mut RegistrationForm, submitter: &Submitter) -> Result<Notice, Option<Notice>> {
    match form.begin_submit(NOW) {
        Ok(payload) => {
            let outcome = block_on(submitter.submit(payload));
            Ok(form.finish_submit(outcome))
        }
        Err(reason) => Err(Notice::blocked(reason)),
    }
}

fn filled_seeker_form() -> RegistrationForm {
    let mut form = RegistrationForm::new(Locale::Ja);
    form.set_base_field(BaseField::Name, "Tanaka Hanako");
    form.select_roles(RoleSelection::Seeker);
    form.seeker_profile.set_address_text("Koto-ku Monzennakacho area");
    form.seeker_profile.set_need(NeedCategory::Shopping, true);
    form.seeker_profile.add_contact();
    form.seeker_profile.update_contact(0, ContactField::Name, "Tanaka");
    form.seeker_profile.update_contact(0, ContactField::Phone, "+81-90-0000-0000");
    form
}

#[test]
fn empty_role_set_never_reaches_the_boundary() {
    let boundary = RecordingBoundary::answering(Ok(()));
    let submitter = Submitter::new(boundary.clone());
    let mut form = RegistrationForm::new(Locale::Ja);
    form.set_terms_accepted(true);

    let notice = submit(&mut form, &submitter).unwrap_err().unwrap();
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert_eq!(notice.title_key, "signup-warning-role-title");
    assert!(boundary.calls().is_empty());
}

#[test]
fn unchecked_terms_never_reach_the_boundary() {
    let boundary = RecordingBoundary::answering(Ok(()));
    let submitter = Submitter::new(boundary.clone());
    let mut form = filled_seeker_form();

    let notice = submit(&mut form, &submitter).unwrap_err().unwrap();
    assert_eq!(notice.title_key, "signup-warning-terms-title");
    assert!(boundary.calls().is_empty());
    assert!(!form.is_submitting());
}

#[test]
fn clearing_roles_after_a_selection_warns_without_reaching_the_boundary() {
    let boundary = RecordingBoundary::answering(Ok(()));
    let submitter = Submitter::new(boundary.clone());
    let mut form = filled_seeker_form();
    form.set_terms_accepted(true);
    assert_eq!(form.active_tab(), Some(Role::Seeker));

    // The placeholder option of the role select carries the empty value.
    form.select_roles(RoleSelection::from_value(""));
    assert!(form.roles().is_empty());
    assert_eq!(form.role_selection(), RoleSelection::None);
    assert_eq!(form.active_tab(), None);

    let notice = submit(&mut form, &submitter).unwrap_err().unwrap();
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert_eq!(notice.title_key, "signup-warning-role-title");
    assert!(boundary.calls().is_empty());
    assert!(!form.is_submitting());

    // Hidden seeker data survives and goes out once a role is picked again.
    form.select_roles(RoleSelection::Seeker);
    assert!(submit(&mut form, &submitter).is_ok());
    let calls = boundary.calls();
    assert_eq!(calls.len(), 1);
    let seeker = calls[0].seeker_profile.as_ref().unwrap();
    assert_eq!(seeker.address_text, "Koto-ku Monzennakacho area");
}

#[test]
fn seeker_registration_sends_one_snapshot_with_terms_consent() {
    let boundary = RecordingBoundary::answering(Ok(()));
    let submitter = Submitter::new(boundary.clone());
    let mut form = filled_seeker_form();
    form.set_terms_accepted(true);

    let notice = submit(&mut form, &submitter).unwrap();
    assert_eq!(notice, Notice::success());

    let calls = boundary.calls();
    assert_eq!(calls.len(), 1);
    let payload = &calls[0];
    assert_eq!(payload.roles.as_slice(), &[Role::Seeker]);
    assert_eq!(payload.consents, vec![Consent::terms(NOW)]);
    assert!(payload.giver_profile.is_none());

    let seeker = payload.seeker_profile.as_ref().unwrap();
    assert_eq!(seeker.address_text, "Koto-ku Monzennakacho area");
    assert_eq!(seeker.needs_categories.as_slice(), &[NeedCategory::Shopping]);
    assert_eq!(seeker.emergency_contacts.len(), 1);
    assert_eq!(seeker.emergency_contacts[0].name, "Tanaka");
    assert_eq!(seeker.emergency_contacts[0].phone, "+81-90-0000-0000");

    let json = serde_json::to_value(payload).unwrap();
    assert_eq!(json["roles"], serde_json::json!(["seeker"]));
    assert_eq!(json["name"], "Tanaka Hanako");
    assert_eq!(json["locale"], "ja");

    // Success starts a fresh session in the same language.
    assert_eq!(form, RegistrationForm::new(Locale::Ja));
}

#[test]
fn both_roles_show_two_tabs_and_switching_keeps_hidden_data() {
    let mut form = RegistrationForm::new(Locale::En);
    form.select_roles(RoleSelection::Both);
    assert_eq!(form.tabs(), &[Role::Seeker, Role::Giver]);
    assert_eq!(form.active_tab(), Some(Role::Seeker));

    form.seeker_profile.set_address_text("Sumida-ku");
    assert!(form.activate_tab(Role::Giver));
    form.giver_profile.set_skill(Skill::Walk, true);
    form.giver_profile.set_service_radius_input("5");

    let seeker_before = form.seeker_profile.clone();
    let giver_before = form.giver_profile.clone();
    for role in [Role::Seeker, Role::Giver, Role::Seeker] {
        assert!(form.activate_tab(role));
    }
    assert_eq!(form.seeker_profile, seeker_before);
    assert_eq!(form.giver_profile, giver_before);

    form.set_terms_accepted(true);
    let payload = form.begin_submit(NOW).unwrap();
    assert!(payload.seeker_profile.is_some());
    assert_eq!(payload.giver_profile, Some(giver_before));
}

#[test]
fn boundary_failure_keeps_the_form_and_reenables_submit() {
    let boundary =
        RecordingBoundary::answering(Err(SubmitError::Rejected("Failed to save profile".into())));
    let submitter = Submitter::new(boundary.clone());
    let mut form = filled_seeker_form();
    form.set_terms_accepted(true);
    let before = form.clone();

    let notice = submit(&mut form, &submitter).unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.body, NoticeBody::Text("Failed to save profile".into()));
    assert_eq!(form, before);
    assert!(!form.is_submitting());

    // A retry goes through again.
    assert!(submit(&mut form, &submitter).is_ok());
    assert_eq!(boundary.calls().len(), 2);
}

#[test]
fn second_submit_while_in_flight_is_ignored_silently() {
    let mut form = filled_seeker_form();
    form.set_terms_accepted(true);

    assert!(form.begin_submit(NOW).is_ok());
    let second = form.begin_submit(NOW);
    assert_eq!(second, Err(SubmitBlocked::AlreadySubmitting));
    assert_eq!(Notice::blocked(SubmitBlocked::AlreadySubmitting), None);
}

#[test]
fn logging_boundary_accepts_any_payload() {
    let submitter = Submitter::logging();
    let mut form = RegistrationForm::new(Locale::En);
    form.select_roles(RoleSelection::Giver);
    form.set_terms_accepted(true);

    let notice = submit(&mut form, &submitter).unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
}
