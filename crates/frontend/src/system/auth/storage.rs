use contracts::system::auth::{check_admission, SessionUser};
use web_sys::window;

use crate::shared::http::Session;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist token and signed-in user after a successful login
pub fn save_session(token: &str, user: &SessionUser) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => {
                let _ = storage.set_item(USER_KEY, &json);
            }
            Err(e) => log::warn!("failed to persist user: {}", e),
        }
    }
}

/// Session persisted by a previous login, if any
pub fn load_session() -> Session {
    let Some(storage) = get_local_storage() else {
        return Session::default();
    };
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user = storage.get_item(USER_KEY).ok().flatten();
    let session = restore_session(token, user);
    if !session.is_signed_in() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
    session
}

/// Clear token and user
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// Rebuilds a session from stored values. A token without a readable user is
/// treated as signed out, and so is a user who would no longer be admitted.
pub fn restore_session(token: Option<String>, user_json: Option<String>) -> Session {
    let token = token.filter(|t| !t.trim().is_empty());
    let user = user_json.and_then(|json| serde_json::from_str::<SessionUser>(&json).ok());
    match (token, user) {
        (Some(token), Some(user)) => match check_admission(&user) {
            Ok(()) => Session::new(token, user),
            Err(reason) => {
                log::warn!("stored session for {} refused: {}", user.email, reason);
                Session::default()
            }
        },
        _ => Session::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str =
        r#"{"userId":1,"userName":"admin","email":"admin@example.com","roleId":1,"userStatus":true}"#;

    #[test]
    fn test_restore_full_session() {
        let session = restore_session(Some("abc".into()), Some(USER.into()));
        assert!(session.is_signed_in());
        assert_eq!(session.user.map(|u| u.email), Some("admin@example.com".to_string()));
    }

    #[test]
    fn test_restore_requires_user() {
        assert_eq!(restore_session(Some("abc".into()), None), Session::default());
        assert_eq!(
            restore_session(Some("abc".into()), Some("not json".into())),
            Session::default()
        );
    }

    #[test]
    fn test_restore_refuses_locked_account() {
        let locked = USER.replace(r#""userStatus":true"#, r#""userStatus":false"#);
        assert_eq!(restore_session(Some("abc".into()), Some(locked)), Session::default());
    }

    #[test]
    fn test_restore_refuses_non_admin() {
        let customer = USER.replace(r#""roleId":1"#, r#""roleId":2"#);
        assert_eq!(restore_session(Some("abc".into()), Some(customer)), Session::default());
    }

    #[test]
    fn test_restore_requires_token() {
        assert_eq!(restore_session(Some("  ".into()), Some(USER.into())), Session::default());
        assert_eq!(restore_session(None, Some(USER.into())), Session::default());
    }
}
