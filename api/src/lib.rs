//! This crate contains all shared fullstack server functions.
use dioxus::prelude::*;
use serde_json::Value;
use thiserror::Error;

pub use dioxus::prelude::ServerFnError;

/// Why the server refused a registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationRejection {
    #[error("payload is not valid JSON: {0}")]
    Malformed(String),
    #[error("at least one role is required")]
    NoRoles,
    #[error("unknown role `{0}`")]
    UnknownRole(String),
    #[error("consent to the terms is required")]
    MissingTermsConsent,
}

const ROLES: [&str; 2] = ["seeker", "giver"];
const TERMS_CONSENT: &str = "terms";

/// Checks the parts of a registration the server relies on: a non-empty role
/// list of known roles and a `terms` consent entry.
pub fn validate_registration(payload: &Value) -> Result<(), RegistrationRejection> {
    let roles = payload
        .get("roles")
        .and_then(Value::as_array)
        .filter(|roles| !roles.is_empty())
        .ok_or(RegistrationRejection::NoRoles)?;
    for role in roles {
        let name = role.as_str().unwrap_or_default();
        if !ROLES.contains(&name) {
            return Err(RegistrationRejection::UnknownRole(role.to_string()));
        }
    }

    let has_terms = payload
        .get("consents")
        .and_then(Value::as_array)
        .is_some_and(|consents| {
            consents
                .iter()
                .any(|c| c.get("key").and_then(Value::as_str) == Some(TERMS_CONSENT))
        });
    if !has_terms {
        return Err(RegistrationRejection::MissingTermsConsent);
    }

    Ok(())
}

fn parse_registration(payload: &str) -> Result<Value, RegistrationRejection> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|err| RegistrationRejection::Malformed(err.to_string()))?;
    validate_registration(&value)?;
    Ok(value)
}

/// Receive one registration as a JSON document.
#[server(SubmitRegistration)]
pub async fn submit_registration(payload: String) -> Result<(), ServerFnError> {
    match parse_registration(&payload) {
        Ok(value) => {
            tracing::info!(
                roles = %value["roles"],
                locale = %value["locale"],
                "registration accepted"
            );
            Ok(())
        }
        Err(rejection) => {
            tracing::warn!("registration rejected: {rejection}");
            Err(ServerFnError::new(rejection.to_string()))
        }
    }
}
