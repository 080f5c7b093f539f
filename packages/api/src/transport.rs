//! # Transport seam
//!
//! [`ApiClient`](crate::ApiClient) never talks to the network directly. It
//! builds an [`ApiRequest`] and hands it to a [`Transport`], which returns the
//! status code and the body parsed as JSON.
//!
//! | Implementation | Purpose |
//! |----------------|---------|
//! | [`HttpTransport`](crate::http::HttpTransport) | `reqwest` over `fetch` (WASM) or hyper (native). |
//! | [`StubTransport`](crate::stub::StubTransport) | Records requests and replays queued responses for tests. |
//!
//! The trait futures carry no `Send` bound: in the browser everything runs on
//! one thread and `fetch` futures are not `Send`.

use std::future::Future;

use serde_json::Value;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One part of a `multipart/form-data` body.
#[derive(Clone, Debug, PartialEq)]
pub enum FormField {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl FormField {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        FormField::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormField::Text { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Payload {
    #[default]
    Empty,
    Json(Value),
    Multipart(Vec<FormField>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub payload: Payload,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON, `Value::String` for a non-JSON body, `Value::Null` when empty.
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single request.
pub trait Transport {
    fn execute(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}
