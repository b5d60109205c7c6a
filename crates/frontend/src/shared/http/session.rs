use contracts::system::auth::SessionUser;

use super::error::ApiError;

/// Credentials of the signed-in administrator.
///
/// Passed explicitly into every [`super::ApiClient`]; requests never look the
/// token up on their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn new(token: String, user: SessionUser) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// `Authorization` header value, or `Unauthenticated` without a token.
    pub fn bearer(&self) -> Result<String, ApiError> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(format!("Bearer {}", token)),
            _ => Err(ApiError::Unauthenticated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_requires_token() {
        assert_eq!(Session::default().bearer(), Err(ApiError::Unauthenticated));
        let blank = Session {
            token: Some(String::new()),
            user: None,
        };
        assert!(!blank.is_signed_in());
        assert_eq!(blank.bearer(), Err(ApiError::Unauthenticated));

        let session = Session {
            token: Some("abc".into()),
            user: None,
        };
        assert_eq!(session.bearer().unwrap(), "Bearer abc");
    }
}
