use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::request::{parse_body, ApiRequest, Method, RequestBody, RetryPolicy};
use super::session::Session;
use crate::shared::api_utils::api_url;
use crate::shared::config::AppConfig;

/// Authenticated JSON client bound to one session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    session: Session,
    timeout_ms: u32,
    retry: RetryPolicy,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self {
            base: config.api_base.clone(),
            session,
            timeout_ms: config.request_timeout_ms,
            retry: RetryPolicy::default(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs `request`, retrying a failed GET once when the failure is transient.
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let bearer = self.session.bearer()?;
        let mut attempt = 0;
        loop {
            log!("➡️ {}", request.describe());
            match self.send_once(&request, &bearer).await {
                Ok(value) => return Ok(value),
                Err(err) if self.retry.should_retry(request.method, attempt, &err) => {
                    log::warn!("{} failed ({}), retrying", request.describe(), err);
                    attempt += 1;
                }
                Err(err) => {
                    log::warn!("{} failed: {}", request.describe(), err);
                    return Err(err);
                }
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.execute(ApiRequest::get(path)).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_with_query(&self, path: &str, query: &str) -> Result<Value, ApiError> {
        self.execute(ApiRequest::get(path).with_query(query)).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.execute(ApiRequest::post(path).with_json(body)?).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.execute(ApiRequest::put(path).with_json(body)?).await
    }

    /// PUT without a body, for state transitions addressed by URL alone.
    pub async fn put_empty(&self, path: &str, query: &str) -> Result<Value, ApiError> {
        self.execute(ApiRequest::put(path).with_query(query)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(path)).await.map(|_| ())
    }

    async fn send_once(&self, request: &ApiRequest, bearer: &str) -> Result<Value, ApiError> {
        let url = api_url(&self.base, &request.path, &request.query);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let prepared = prepare(builder.header("Authorization", bearer), &request.body)?;

        // Deadline covers the body read, not just the headers.
        let exchange = async {
            let response = prepared
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok::<_, ApiError>((status, text))
        };
        let (status, text) = with_timeout(exchange, self.timeout_ms).await??;

        if !(200..300).contains(&status) {
            return Err(ApiError::from_response(status, &text));
        }
        parse_body(&text)
    }
}

fn prepare(builder: RequestBuilder, body: &RequestBody) -> Result<Request, ApiError> {
    let prepared = match body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(value) => builder.json(value),
    };
    prepared.map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))
}

/// Resolves to `Timeout` when `fut` does not finish within `ms`.
pub async fn with_timeout<F: Future>(fut: F, ms: u32) -> Result<F::Output, ApiError> {
    race_deadline(fut, TimeoutFuture::new(ms), ms).await
}

async fn race_deadline<F, D>(fut: F, deadline: D, ms: u32) -> Result<F::Output, ApiError>
where
    F: Future,
    D: Future,
{
    match select(Box::pin(fut), Box::pin(deadline)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::Timeout(ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn test_finished_exchange_wins() {
        let result = block_on(race_deadline(ready(7), pending::<()>(), 100));
        assert_eq!(result.ok(), Some(7));
    }

    #[test]
    fn test_stalled_body_read_times_out() {
        let exchange = async {
            let status = ready(200u16).await;
            let text = pending::<String>().await;
            Ok::<_, ApiError>((status, text))
        };
        let result = block_on(race_deadline(exchange, ready(()), 2500));
        assert!(matches!(result, Err(ApiError::Timeout(2500))));
    }
}
