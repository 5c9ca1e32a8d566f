//! Error types for the helpdesk domain.
//!
//! Each concern gets its own enum: [`FlowError`] for the verification state
//! machine, [`DraftError`] for ticket form validation and [`StoreError`] for
//! key-value persistence. None of them is fatal; callers render them inline or
//! as a toast and leave the user's input in place.

use thiserror::Error;

use crate::verification::FlowState;

/// Errors raised by [`crate::VerificationFlow`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid password. Please try again or reset your password.")]
    InvalidPassword,

    #[error("Invalid OTP. Please try again.")]
    InvalidCode,

    #[error("A request is already in progress")]
    Busy,

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: FlowState,
    },
}

impl FlowError {
    /// Whether the UI should offer a link to the password reset page.
    pub fn suggests_reset(&self) -> bool {
        matches!(self, FlowError::InvalidPassword)
    }
}

/// Validation errors for a [`crate::TicketDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Errors from a [`crate::KeyValueStore`] or the stores built on top of it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("malformed stored data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] DraftError),
}

/// Returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}
