use contracts::shared::paging::PageDecodeError;
use contracts::shared::validation::ValidationErrors;
use serde_json::Value;

/// Failure of a backend call, as surfaced to list views and forms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No token in the session; nothing was sent.
    #[error("You are not signed in")]
    Unauthenticated,
    /// The backend rejected the token (401).
    #[error("Your session has expired, please sign in again")]
    Unauthorized,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// Client-side validation rejected the input before any request.
    #[error("{0}")]
    Validation(ValidationErrors),
}

impl ApiError {
    /// Maps a non-2xx response. A server `message` field is shown verbatim.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = server_message(body)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// Failures worth one more attempt on an idempotent request.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout(_) => true,
            ApiError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The session is no longer usable and the user must sign in again.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthenticated | ApiError::Unauthorized)
    }
}

/// Non-blank `message` field of a JSON error body.
pub fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    })
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<PageDecodeError> for ApiError {
    fn from(err: PageDecodeError) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_verbatim() {
        let err = ApiError::from_response(400, r#"{"message":"UnitPrice must be positive"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "UnitPrice must be positive".into()
            }
        );
        assert_eq!(err.to_string(), "UnitPrice must be positive");
    }

    #[test]
    fn test_generic_message_without_body() {
        let err = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(err.to_string(), "Request failed with status 500");
        assert!(err.is_transient());
    }

    #[test]
    fn test_blank_message_falls_back() {
        let err = ApiError::from_response(404, r#"{"message":"  "}"#);
        assert_eq!(err.to_string(), "Request failed with status 404");
    }

    #[test]
    fn test_401_is_auth_error() {
        let err = ApiError::from_response(401, r#"{"message":"expired"}"#);
        assert_eq!(err, ApiError::Unauthorized);
        assert!(err.is_auth());
        assert!(!err.is_transient());
    }

    #[test]
    fn test_client_errors_not_transient() {
        assert!(!ApiError::from_response(400, "").is_transient());
        assert!(ApiError::Timeout(15_000).is_transient());
        assert!(ApiError::Network("offline".into()).is_transient());
    }
}
