use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::validation::{is_valid_email, required, ValidationErrors};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Role
// ============================================================================

pub const ADMIN_ROLE_ID: i64 = 1;
pub const USER_ROLE_ID: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn from_role_id(role_id: i64) -> Self {
        if role_id == ADMIN_ROLE_ID {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn role_id(self) -> i64 {
        match self {
            Role::Admin => ADMIN_ROLE_ID,
            Role::User => USER_ROLE_ID,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            l if l.eq_ignore_ascii_case("admin") => Some(Role::Admin),
            l if l.eq_ignore_ascii_case("user") => Some(Role::User),
            _ => None,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Account as listed by `GET /api/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "id")]
    pub user_id: UserId,
    #[serde(alias = "username")]
    pub user_name: String,
    pub email: String,
    pub role_id: i64,
    /// `true` while the account is active, `false` once banned
    pub user_status: bool,
}

impl User {
    pub fn role(&self) -> Role {
        Role::from_role_id(self.role_id)
    }

    pub fn is_banned(&self) -> bool {
        !self.user_status
    }

    /// Only regular accounts can be banned or unbanned.
    pub fn can_toggle_ban(&self) -> bool {
        self.role() == Role::User
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_banned() {
            "Banned"
        } else {
            "Active"
        }
    }
}

/// Status filter of the user list, sent as `status`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatusFilter {
    #[default]
    All,
    Active,
    Banned,
}

impl UserStatusFilter {
    pub const ALL: [UserStatusFilter; 3] = [
        UserStatusFilter::All,
        UserStatusFilter::Active,
        UserStatusFilter::Banned,
    ];

    pub fn key(self) -> &'static str {
        match self {
            UserStatusFilter::All => "all",
            UserStatusFilter::Active => "active",
            UserStatusFilter::Banned => "banned",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserStatusFilter::All => "All",
            UserStatusFilter::Active => "Active",
            UserStatusFilter::Banned => "Ban",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "is_all")]
    pub status: UserStatusFilter,
}

fn is_all(status: &UserStatusFilter) -> bool {
    *status == UserStatusFilter::All
}

// ============================================================================
// Form / Draft
// ============================================================================

pub const PASSWORD_MIN_LEN: usize = 6;

/// Raw user form input
#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub banned: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            role: Role::User.label().to_string(),
            password: String::new(),
            banned: false,
        }
    }
}

impl UserForm {
    pub fn from_record(user: &User) -> Self {
        Self {
            username: user.user_name.clone(),
            email: user.email.clone(),
            role: user.role().label().to_string(),
            password: String::new(),
            banned: user.is_banned(),
        }
    }

    /// `creating` makes the password mandatory; on edit a blank password keeps
    /// the stored one.
    pub fn validate(&self, creating: bool) -> Result<UserDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let user_name = required(&mut errors, "username", "Username", &self.username);

        let email = required(&mut errors, "email", "Email", &self.email);
        if !email.is_empty() && !is_valid_email(&email) {
            errors.push("email", "Invalid email format");
        }

        let role = if self.role.trim().is_empty() {
            errors.push("role", "Role is required");
            None
        } else {
            let role = Role::parse(&self.role);
            if role.is_none() {
                errors.push("role", "Role must be Admin or User");
            }
            role
        };

        let password = if creating || !self.password.is_empty() {
            if self.password.is_empty() {
                errors.push("password", "Password is required");
            } else if self.password.chars().count() < PASSWORD_MIN_LEN {
                errors.push(
                    "password",
                    format!("Password must be at least {} characters", PASSWORD_MIN_LEN),
                );
            }
            Some(self.password.clone())
        } else {
            None
        };

        match role {
            Some(role) if errors.is_empty() => Ok(UserDraft {
                user_name,
                email,
                role_id: role.role_id(),
                password,
                user_status: !self.banned,
            }),
            _ => Err(errors),
        }
    }
}

/// Body of `POST /api/users` and `PUT /api/users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub user_name: String,
    pub email: String,
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub user_status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> UserForm {
        UserForm {
            username: "reader".into(),
            email: "reader@example.com".into(),
            role: "User".into(),
            password: "secret1".into(),
            banned: false,
        }
    }

    #[test]
    fn test_create_requires_password() {
        let errors = UserForm {
            password: String::new(),
            ..form()
        }
        .validate(true)
        .unwrap_err();
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_short_password() {
        let errors = UserForm {
            password: "abc".into(),
            ..form()
        }
        .validate(true)
        .unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_edit_blank_password_kept() {
        let draft = UserForm {
            password: String::new(),
            ..form()
        }
        .validate(false)
        .unwrap();
        assert_eq!(draft.password, None);
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("password").is_none());
    }

    #[test]
    fn test_bad_email_and_role() {
        let errors = UserForm {
            email: "not-an-email".into(),
            role: "Owner".into(),
            ..form()
        }
        .validate(true)
        .unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email format"));
        assert_eq!(errors.get("role"), Some("Role must be Admin or User"));
    }

    #[test]
    fn test_ban_rules() {
        let user: User = serde_json::from_value(json!({
            "userId": 4, "userName": "User 4", "email": "user4@example.com",
            "roleId": 2, "userStatus": false
        }))
        .unwrap();
        assert!(user.is_banned());
        assert!(user.can_toggle_ban());
        assert_eq!(user.status_label(), "Banned");

        let admin = User {
            role_id: ADMIN_ROLE_ID,
            ..user
        };
        assert!(!admin.can_toggle_ban());
    }

    #[test]
    fn test_status_filter_serialization() {
        let filter = UserFilter {
            search: String::new(),
            status: UserStatusFilter::Banned,
        };
        assert_eq!(serde_json::to_value(&filter).unwrap(), json!({"status": "banned"}));
        assert_eq!(
            serde_json::to_value(UserFilter::default()).unwrap(),
            json!({})
        );
    }
}
