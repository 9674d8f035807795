//! Platform-agnostic state behind the views: option catalogs, the registration
//! aggregate and its sub-forms, the submission seam, and user preferences.

pub mod catalog;
pub mod giver;
pub mod preferences;
pub mod registration;
pub mod role;
pub mod seeker;
pub mod storage;
pub mod submit;
pub mod theme;
