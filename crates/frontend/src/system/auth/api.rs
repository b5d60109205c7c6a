use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;
use leptos::logging::log;

use crate::shared::api_utils::api_url;
use crate::shared::config::AppConfig;
use crate::shared::http::client::with_timeout;
use crate::shared::http::error::server_message;
use crate::shared::http::ApiError;

pub const LOGIN_PATH: &str = "/api/auth/login";

/// Login with email and password
pub async fn login(
    config: &AppConfig,
    email: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    log!("➡️ POST {}", LOGIN_PATH);

    let prepared = Request::post(&api_url(&config.api_base, LOGIN_PATH, ""))
        .json(&request)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?;

    let response = with_timeout(prepared.send(), config.request_timeout_ms)
        .await?
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !(200..300).contains(&status) {
        let err = login_error(status, &body);
        log::warn!("login failed: {}", err);
        return Err(err);
    }

    Ok(serde_json::from_str::<LoginResponse>(&body)?)
}

/// Rejected credentials are not an expired session; keep the server's words.
fn login_error(status: u16, body: &str) -> ApiError {
    match ApiError::from_response(status, body) {
        ApiError::Unauthorized => ApiError::Http {
            status,
            message: server_message(body).unwrap_or_else(|| "Invalid email or password".to_string()),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_credentials_message() {
        assert_eq!(
            login_error(401, "").to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            login_error(401, r#"{"message":"Wrong password"}"#).to_string(),
            "Wrong password"
        );
        assert_eq!(
            login_error(500, "").to_string(),
            "Request failed with status 500"
        );
    }
}
