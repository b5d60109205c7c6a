use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    pub fn is_idempotent_read(self) -> bool {
        self == Method::Get
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
}

/// One backend call, independent of the transport that executes it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: String::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Raw, already encoded query string without the leading `?`.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// `"GET /api/books?pageIndex=1"`, used in logs.
    pub fn describe(&self) -> String {
        if self.query.is_empty() {
            format!("{} {}", self.method.as_str(), self.path)
        } else {
            format!("{} {}?{}", self.method.as_str(), self.path, self.query)
        }
    }
}

/// Retry rule: a single extra attempt, reads only, transient failures only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 1 }
    }
}

impl RetryPolicy {
    /// `attempt` counts from 0 for the first try.
    pub fn should_retry(&self, method: Method, attempt: u32, err: &ApiError) -> bool {
        method.is_idempotent_read() && attempt < self.max_retries && err.is_transient()
    }
}

/// Decodes a response body; an empty body is JSON `null`.
pub fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe() {
        let req = ApiRequest::get("/api/categories").with_query("pageIndex=1&pageSize=5");
        assert_eq!(req.describe(), "GET /api/categories?pageIndex=1&pageSize=5");
        assert_eq!(ApiRequest::delete("/api/categories/1").describe(), "DELETE /api/categories/1");
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Body {
            name: &'static str,
        }
        let req = ApiRequest::post("/api/categories")
            .with_json(&Body { name: "Fiction" })
            .unwrap();
        assert_eq!(req.body, RequestBody::Json(json!({"name": "Fiction"})));
    }

    #[test]
    fn test_retry_only_reads_once() {
        let policy = RetryPolicy::default();
        let timeout = ApiError::Timeout(1000);
        assert!(policy.should_retry(Method::Get, 0, &timeout));
        assert!(!policy.should_retry(Method::Get, 1, &timeout));
        assert!(!policy.should_retry(Method::Put, 0, &timeout));
        assert!(!policy.should_retry(Method::Delete, 0, &timeout));
        assert!(!policy.should_retry(Method::Get, 0, &ApiError::from_response(400, "")));
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body("{\"ok\":true}").unwrap(), json!({"ok": true}));
        assert!(matches!(parse_body("not json"), Err(ApiError::Decode(_))));
    }
}
