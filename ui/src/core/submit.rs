//! Submission boundary and the notices a submit attempt produces.
//!
//! The registration page never talks to the network directly: it hands a
//! [`RegistrationPayload`] to whatever [`SubmissionBoundary`] the platform shell
//! provided (see [`Submitter`]) and turns the outcome into a [`Notice`].

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use thiserror::Error;

use super::registration::RegistrationPayload;

/// Reasons a submit attempt is stopped before it reaches the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("no role selected")]
    NoRoleSelected,
    #[error("terms not accepted")]
    TermsNotAccepted,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

/// Failure reported by a submission boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The receiving side refused the registration and said why.
    #[error("{0}")]
    Rejected(String),
    /// Transport failure or a response that could not be understood.
    #[error("unexpected submission failure: {0}")]
    Unexpected(String),
}

impl From<api::ServerFnError> for SubmitError {
    fn from(err: api::ServerFnError) -> Self {
        match err {
            api::ServerFnError::ServerError(message) => SubmitError::Rejected(message),
            other => SubmitError::Unexpected(other.to_string()),
        }
    }
}

/// The one asynchronous seam of the registration flow.
pub trait SubmissionBoundary {
    fn submit(&self, payload: RegistrationPayload)
        -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Context handle for the boundary chosen by the platform shell.
#[derive(Clone)]
pub struct Submitter(Rc<dyn SubmissionBoundary>);

impl Submitter {
    pub fn new(boundary: impl SubmissionBoundary + 'static) -> Self {
        Self(Rc::new(boundary))
    }

    pub fn logging() -> Self {
        Self::new(LoggingBoundary)
    }

    pub fn server() -> Self {
        Self::new(ServerBoundary)
    }

    pub fn submit(
        &self,
        payload: RegistrationPayload,
    ) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.0.submit(payload)
    }
}

/// Sends the payload to the fullstack server function in the `api` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerBoundary;

impl SubmissionBoundary for ServerBoundary {
    fn submit(
        &self,
        payload: RegistrationPayload,
    ) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        async move {
            let body = serde_json::to_string(&payload)
                .map_err(|err| SubmitError::Unexpected(err.to_string()))?;
            api::submit_registration(body).await?;
            Ok(())
        }
        .boxed_local()
    }
}

/// Logs the payload and reports success. Used when no server is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBoundary;

impl SubmissionBoundary for LoggingBoundary {
    fn submit(
        &self,
        payload: RegistrationPayload,
    ) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let outcome = serde_json::to_string_pretty(&payload)
            .map(|json| tracing::info!(roles = ?payload.roles, "sign-up payload\n{json}"))
            .map_err(|err| SubmitError::Unexpected(err.to_string()));
        futures::future::ready(outcome).boxed_local()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice--success",
            NoticeKind::Warning => "notice--warning",
            NoticeKind::Error => "notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeBody {
    /// Fluent message id.
    Localized(&'static str),
    /// Verbatim text, e.g. a message returned by the server.
    Text(String),
}

/// User-visible outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title_key: &'static str,
    pub body: NoticeBody,
}

impl Notice {
    pub fn success() -> Self {
        Self {
            kind: NoticeKind::Success,
            title_key: "signup-success-title",
            body: NoticeBody::Localized("signup-success-body"),
        }
    }

    pub fn failure(err: &SubmitError) -> Self {
        let body = match err {
            SubmitError::Rejected(message) if !message.trim().is_empty() => {
                NoticeBody::Text(message.clone())
            }
            _ => NoticeBody::Localized("signup-error-unexpected"),
        };
        Self {
            kind: NoticeKind::Error,
            title_key: "signup-error-title",
            body,
        }
    }

    /// `None` for guards that have no message of their own (a double click while in flight).
    pub fn blocked(reason: SubmitBlocked) -> Option<Self> {
        let (title_key, body_key) = match reason {
            SubmitBlocked::NoRoleSelected => {
                ("signup-warning-role-title", "signup-warning-role-body")
            }
            SubmitBlocked::TermsNotAccepted => {
                ("signup-warning-terms-title", "signup-warning-terms-body")
            }
            SubmitBlocked::AlreadySubmitting => return None,
        };
        Some(Self {
            kind: NoticeKind::Warning,
            title_key,
            body: NoticeBody::Localized(body_key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_is_shown_verbatim() {
        let notice = Notice::failure(&SubmitError::Rejected("Failed to save profile".into()));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.body, NoticeBody::Text("Failed to save profile".into()));
    }

    #[test]
    fn unexpected_failures_use_generic_message() {
        let notice = Notice::failure(&SubmitError::Unexpected("EOF while parsing".into()));
        assert_eq!(
            notice.body,
            NoticeBody::Localized("signup-error-unexpected")
        );

        let blank = Notice::failure(&SubmitError::Rejected("  ".into()));
        assert_eq!(blank.body, NoticeBody::Localized("signup-error-unexpected"));
    }

    #[test]
    fn server_errors_map_to_rejections() {
        let rejected: SubmitError =
            api::ServerFnError::ServerError("Failed to save profile".into()).into();
        assert_eq!(rejected, SubmitError::Rejected("Failed to save profile".into()));

        let transport: SubmitError =
            api::ServerFnError::Request("connection refused".into()).into();
        assert!(matches!(transport, SubmitError::Unexpected(_)));
    }

    #[test]
    fn guard_notices_are_warnings() {
        for reason in [SubmitBlocked::NoRoleSelected, SubmitBlocked::TermsNotAccepted] {
            let notice = Notice::blocked(reason).unwrap();
            assert_eq!(notice.kind, NoticeKind::Warning);
        }
        assert!(Notice::blocked(SubmitBlocked::AlreadySubmitting).is_none());
    }
}
