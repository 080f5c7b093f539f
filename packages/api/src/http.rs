use serde_json::Value;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, FormField, Method, Payload, Transport};

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    fn multipart(fields: Vec<FormField>) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new();
        for field in fields {
            form = match field {
                FormField::Text { name, value } => form.text(name, value),
                FormField::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => {
                    let mut part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                    if let Some(mime) = content_type {
                        part = part
                            .mime_str(&mime)
                            .map_err(|e| ApiError::Invalid(format!("bad content type {mime}: {e}")))?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let ApiRequest {
            method,
            url,
            bearer,
            payload,
        } = request;

        let mut builder = match method {
            Method::Get => self.http_client.get(&url),
            Method::Post => self.http_client.post(&url),
            Method::Put => self.http_client.put(&url),
            Method::Delete => self.http_client.delete(&url),
        }
        .header(reqwest::header::ACCEPT, "application/json");

        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match payload {
            Payload::Empty => builder,
            Payload::Json(body) => builder.json(&body),
            Payload::Multipart(fields) => builder.multipart(Self::multipart(fields)?),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!("{} {} -> {}", method.as_str(), url, status);

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok(ApiResponse { status, body })
    }
}
