//! Multipart uploads with progress reporting.
//!
//! `fetch` cannot observe request-body progress, so uploads go through
//! `XMLHttpRequest` and report `upload.onprogress` as a 0–100 percentage.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use super::client::ApiClient;
use super::error::ApiError;
use super::request::{parse_body, Method};
use crate::shared::api_utils::api_url;

/// Whole percent of `loaded` out of `total`, clamped to 0..=100.
pub fn progress_percent(loaded: f64, total: f64) -> u8 {
    if !(total > 0.0) || !loaded.is_finite() {
        return 0;
    }
    let pct = (loaded / total * 100.0).floor();
    pct.clamp(0.0, 100.0) as u8
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Builds a multipart body from scalar fields and attached files.
pub fn build_form_data(
    fields: &[(&'static str, String)],
    files_field: &str,
    files: &[File],
) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    for file in files {
        form.append_with_blob_and_filename(files_field, file, &file.name())
            .map_err(js_error)?;
    }
    Ok(form)
}

impl ApiClient {
    /// Sends `form` as `multipart/form-data`. `on_progress` receives the
    /// upload percentage; completion does not wait on it.
    pub async fn upload<P>(
        &self,
        method: Method,
        path: &str,
        form: &FormData,
        on_progress: P,
    ) -> Result<Value, ApiError>
    where
        P: Fn(u8) + 'static,
    {
        let bearer = self.session().bearer()?;
        let url = api_url(self.base(), path, "");
        leptos::logging::log!("⬆️ {} {} (multipart)", method.as_str(), path);

        let xhr = XmlHttpRequest::new().map_err(js_error)?;
        xhr.open_with_async(method.as_str(), &url, true)
            .map_err(js_error)?;
        xhr.set_request_header("Authorization", &bearer)
            .map_err(js_error)?;

        let progress = Closure::wrap(Box::new(move |event: ProgressEvent| {
            if event.length_computable() {
                on_progress(progress_percent(event.loaded(), event.total()));
            }
        }) as Box<dyn FnMut(ProgressEvent)>);
        xhr.upload()
            .map_err(js_error)?
            .set_onprogress(Some(progress.as_ref().unchecked_ref()));

        let (tx, rx) = oneshot::channel::<Result<(u16, String), ApiError>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let onload = {
            let tx = tx.clone();
            let xhr = xhr.clone();
            Closure::wrap(Box::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let status = xhr.status().unwrap_or(0);
                    let body = xhr.response_text().ok().flatten().unwrap_or_default();
                    let _ = tx.send(Ok((status, body)));
                }
            }) as Box<dyn FnMut()>)
        };
        xhr.set_onload(Some(onload.as_ref().unchecked_ref()));

        let onerror = {
            let tx = tx.clone();
            Closure::wrap(Box::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Err(ApiError::Network("Upload failed".to_string())));
                }
            }) as Box<dyn FnMut()>)
        };
        xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        xhr.send_with_opt_form_data(Some(form)).map_err(js_error)?;

        let outcome = rx
            .await
            .map_err(|_| ApiError::Network("Upload was interrupted".to_string()))?;

        // Handlers must outlive the request.
        drop(progress);
        drop(onload);
        drop(onerror);

        let (status, body) = outcome?;
        if !(200..300).contains(&status) {
            let err = ApiError::from_response(status, &body);
            log::warn!("{} {} failed: {}", method.as_str(), path, err);
            return Err(err);
        }
        parse_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0.0, 200.0), 0);
        assert_eq!(progress_percent(50.0, 200.0), 25);
        assert_eq!(progress_percent(199.0, 200.0), 99);
        assert_eq!(progress_percent(200.0, 200.0), 100);
        assert_eq!(progress_percent(300.0, 200.0), 100);
    }

    #[test]
    fn test_progress_unknown_total() {
        assert_eq!(progress_percent(10.0, 0.0), 0);
        assert_eq!(progress_percent(10.0, f64::NAN), 0);
    }
}
