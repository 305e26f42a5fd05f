//! Submission failure taxonomy

use crate::state::ErrorMap;
use thiserror::Error;

/// Result of one submission: the confirmation message, or why it failed
pub type SubmissionOutcome = Result<String, SubmitError>;

/// Every way a submission can fail. `Display` is the user-facing detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The endpoint rejected individual fields (HTTP 422)
    #[error("Please correct the highlighted fields.")]
    Validation(ErrorMap),

    #[error("Server error. Please try again later.")]
    Server { status: u16 },

    /// Any other non-2xx status; `message` comes from the body when present
    #[error("{message}")]
    Client { status: u16, message: String },

    #[error("Request timed out. Please check your connection and try again.")]
    Timeout,

    #[error("Network error. Please check your connection and try again.")]
    Network { cause: String },
}

/// Failure kind without its payload, used for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Server,
    Client,
    Timeout,
    Network,
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Server => "server",
            Self::Client => "client",
            Self::Timeout => "timeout",
            Self::Network => "network",
        }
    }
}

impl SubmitError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::Server { .. } => FailureKind::Server,
            Self::Client { .. } => FailureKind::Client,
            Self::Timeout => FailureKind::Timeout,
            Self::Network { .. } => FailureKind::Network,
        }
    }

    /// HTTP status the endpoint answered with, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation(_) => Some(422),
            Self::Server { status } | Self::Client { status, .. } => Some(*status),
            Self::Timeout | Self::Network { .. } => None,
        }
    }

    /// Transport-level cause, for logs only
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Network { cause } => Some(cause.as_str()),
            _ => None,
        }
    }

    /// Whether resending the same message unchanged may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Server { .. } | Self::Timeout | Self::Network { .. }
        )
    }
}
