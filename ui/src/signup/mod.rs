//! Building blocks of the registration page.

mod checkbox_group;
mod giver_form;
mod role_selector;
mod seeker_form;

pub use checkbox_group::checkbox_group;
pub use giver_form::GiverForm;
pub use role_selector::RoleSelector;
pub use seeker_form::SeekerForm;
