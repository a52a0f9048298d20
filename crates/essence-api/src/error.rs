//! API error taxonomy.

use essence_data::FetchError;
use thiserror::Error;

/// Errors from the remote backend boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A mutating call was attempted without a valid session.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The backend rejected the request; the message is surfaced verbatim.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The request could not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The response body could not be decoded.
    #[error("Invalid response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether retrying the same request later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Timeout)
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Http { status: 401, .. } => ApiError::Unauthenticated,
            FetchError::Http { status, message } => ApiError::Remote { status, message },
            FetchError::Timeout => ApiError::Timeout,
            FetchError::Transport(msg) | FetchError::InvalidRequest(msg) => {
                ApiError::Network(msg)
            }
            FetchError::Parse(msg) | FetchError::Json(msg) => ApiError::Decode(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_session_maps_to_unauthenticated() {
        let err: ApiError = FetchError::Http {
            status: 401,
            message: "token expired".into(),
        }
        .into();
        assert_eq!(err, ApiError::Unauthenticated);
    }

    #[test]
    fn test_rejection_message_surfaced_verbatim() {
        let err: ApiError = FetchError::Http {
            status: 409,
            message: "Stock insuficiente".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Stock insuficiente");
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Timeout.is_transient());
        assert!(ApiError::Network("refused".into()).is_transient());
        assert!(!ApiError::Unauthenticated.is_transient());
    }
}
