use serde::{Deserialize, Serialize};

use crate::domain::a004_user::aggregate::{Role, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Signed-in account, persisted next to the token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(alias = "id")]
    pub user_id: UserId,
    #[serde(default, alias = "username")]
    pub user_name: Option<String>,
    pub email: String,
    pub role_id: i64,
    pub user_status: bool,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(&self.email)
    }
}

/// Why a successfully authenticated account may still not enter the admin app
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    #[error("Account is locked.")]
    Locked,
    #[error("Your account does not have access permissions.")]
    NotAdmin,
}

/// Only active administrators may use the admin app.
pub fn check_admission(user: &SessionUser) -> Result<(), AdmissionError> {
    if !user.user_status {
        return Err(AdmissionError::Locked);
    }
    if Role::from_role_id(user.role_id) != Role::Admin {
        return Err(AdmissionError::NotAdmin);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(role_id: i64, active: bool) -> SessionUser {
        SessionUser {
            user_id: UserId(1),
            user_name: None,
            email: "admin@example.com".into(),
            role_id,
            user_status: active,
        }
    }

    #[test]
    fn test_admission() {
        assert_eq!(check_admission(&user(1, true)), Ok(()));
        assert_eq!(check_admission(&user(1, false)), Err(AdmissionError::Locked));
        assert_eq!(check_admission(&user(2, true)), Err(AdmissionError::NotAdmin));
        assert_eq!(
            AdmissionError::NotAdmin.to_string(),
            "Your account does not have access permissions."
        );
    }

    #[test]
    fn test_login_response_decodes() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "abc",
            "user": {"userId": 1, "email": "admin@example.com", "roleId": 1, "userStatus": true}
        }))
        .unwrap();
        assert_eq!(response.user.display_name(), "admin@example.com");
    }
}
