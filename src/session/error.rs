//! Session error taxonomy
//!
//! Every variant is recoverable: the intent that raised it leaves the session
//! exactly as it was, and the front-end reports the reason in place.

use super::gate::GateStage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Credential collaborator rejected the login
    #[allow(dead_code)] // Reserved for real credential backends
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Geolocation collaborator could not resolve a position
    #[error("current location is unavailable")]
    LocationUnavailable,

    /// A required draft field is empty or malformed
    #[error("{field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// The intent belongs to a screen the gate has not reached (or has left)
    #[error("{intent} is not available while {stage}")]
    NotAvailable {
        intent: &'static str,
        stage: GateStage,
    },
}

impl SessionError {
    pub fn required(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "required".to_string(),
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
