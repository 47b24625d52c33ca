//! Error types for the AgreementKit domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Configuration errors are programmer mistakes in the integrating
//! application; a user declining an agreement is never an error.

use crate::outcome::ConsentOutcome;
use thiserror::Error;

/// The top-level error type for consent flow operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsentError {
    // --- Configuration errors ---
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    // --- Flow misuse ---
    #[error("Consent flow already started")]
    AlreadyStarted,

    #[error("Consent flow has not been started")]
    NotStarted,

    #[error("Consent flow already resolved as {0}")]
    AlreadyResolved(ConsentOutcome),

    #[error("No surface is currently presented")]
    NotPresenting,
}

/// Result type alias using our ConsentError.
pub type Result<T> = std::result::Result<T, ConsentError>;

/// Malformed configuration. Fatal and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("agreement title cannot be empty")]
    MissingTitle,

    #[error("agreement requires secondary confirmation but no secondary agreement was supplied")]
    MissingSecondaryAgreement,

    #[error("link section '{label}' has no target URL")]
    LinkWithoutTarget { label: String },

    #[error("section index {index} out of range ({count} sections)")]
    UnknownSection { index: usize, count: usize },
}
