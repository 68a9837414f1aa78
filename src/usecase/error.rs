use thiserror::Error;

/// Failure reported by a use-case call.
///
/// Cloneable so it can travel inside failure actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UseCaseError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Request rejected: {reason}")]
    Rejected { reason: String },

    #[error("Session expired")]
    Unauthorized,
}

impl UseCaseError {
    /// Short message suitable for a toast.
    pub fn user_message(&self) -> &'static str {
        match self {
            UseCaseError::Network { .. } => "Check your connection and try again.",
            UseCaseError::Storage { .. } => "Couldn't save on this device.",
            UseCaseError::Rejected { .. } => "The request was rejected.",
            UseCaseError::Unauthorized => "Please sign in again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_details() {
        let err = UseCaseError::Network {
            message: "timeout".to_string(),
        };
        assert_eq!(err.to_string(), "Network error: timeout");
        assert_eq!(err.user_message(), "Check your connection and try again.");
    }

    #[test]
    fn unauthorized_has_fixed_message() {
        assert_eq!(UseCaseError::Unauthorized.to_string(), "Session expired");
    }
}
