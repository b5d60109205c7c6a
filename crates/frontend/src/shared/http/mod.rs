//! HTTP client adapter for the bookstore REST backend.
//!
//! [`ApiClient`] attaches the bearer token of an explicit [`Session`], applies
//! a bounded timeout, retries idempotent reads once and maps every failure to
//! [`ApiError`]. Multipart uploads with progress live in [`upload`].

pub mod client;
pub mod error;
pub mod request;
pub mod session;
pub mod upload;

pub use client::ApiClient;
pub use error::ApiError;
pub use request::{ApiRequest, Method};
pub use session::Session;
