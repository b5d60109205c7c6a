//! Runtime configuration of the admin app.
//!
//! Resolved once in [`crate::app::App`] and provided through Leptos context.

/// Port the REST backend listens on when served next to the frontend.
pub const DEFAULT_BACKEND_PORT: u16 = 5000;
/// Rows per page; the backend paginates with this size unless told otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 5;
/// Upper bound for a single request before it is reported as timed out.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without trailing slash, e.g. `http://localhost:5000`
    pub api_base: String,
    pub page_size: u32,
    pub request_timeout_ms: u32,
}

impl AppConfig {
    /// Reads the build-time `ADMIN_API_BASE` override, falling back to the
    /// window origin.
    pub fn load() -> Self {
        let location = web_sys::window().map(|w| {
            let location = w.location();
            let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
            let hostname = location
                .hostname()
                .unwrap_or_else(|_| "127.0.0.1".to_string());
            (protocol, hostname)
        });
        Self::resolve(option_env!("ADMIN_API_BASE"), location)
    }

    pub fn resolve(env_base: Option<&str>, location: Option<(String, String)>) -> Self {
        let api_base = match env_base.map(str::trim).filter(|b| !b.is_empty()) {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => match location {
                Some((protocol, hostname)) => {
                    format!("{}//{}:{}", protocol, hostname, DEFAULT_BACKEND_PORT)
                }
                None => String::new(),
            },
        };
        Self {
            api_base,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

pub fn use_config() -> AppConfig {
    leptos::prelude::use_context::<AppConfig>().expect("AppConfig context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let config = AppConfig::resolve(
            Some("https://api.example.com/"),
            Some(("http:".into(), "localhost".into())),
        );
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_falls_back_to_window_origin() {
        let config = AppConfig::resolve(Some("  "), Some(("https:".into(), "shop.local".into())));
        assert_eq!(config.api_base, "https://shop.local:5000");
    }

    #[test]
    fn test_no_window() {
        assert_eq!(AppConfig::resolve(None, None).api_base, "");
    }
}
