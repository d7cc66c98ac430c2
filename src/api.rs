//! JSON request helper for talking to the backend.
//!
//! `api_request(url, method, data)` is the one interface other page scripts
//! use to reach the server. It sends JSON, parses the JSON reply and turns
//! any non-2xx status into an error carrying the server's `message`.
//!
//! Client-side (hydrate): requests go out through `gloo-net` and the helper
//! is exported to JavaScript as `apiRequest`, returning a `Promise`.
//! Tests drive the same logic through a scripted [`Transport`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure (network, unparseable body, error status) is logged once
//! and returned to the caller, who decides what the user sees. There are no
//! retries, timeouts or backoff.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde_json::Value;

/// Message used when an error response has no non-empty string `message`.
pub const FALLBACK_MESSAGE: &str = "Request failed";

/// Content type sent with every request.
pub const CONTENT_TYPE: &str = "application/json";

/// HTTP methods the helper accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Parse a method name, ignoring case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        [Self::Get, Self::Post, Self::Put, Self::Patch, Self::Delete]
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    /// Only `POST` and `PUT` carry the JSON payload.
    #[must_use]
    pub fn sends_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

/// Error returned by [`api_request`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status. Displays as the
    /// message alone so callers can show it verbatim.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not JSON.
    #[error("invalid JSON response: {0}")]
    Decode(String),
    /// The payload could not be serialised.
    #[error("could not encode request body: {0}")]
    Encode(String),
    /// A caller passed a method name the helper does not know.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// A prepared request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub method: Method,
    /// Serialised JSON payload; only ever set for `POST`/`PUT`.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Build a request, serialising `data` when the method carries a body.
    /// Payloads passed with other methods are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `data` cannot be serialised.
    pub fn new(url: &str, method: Method, data: Option<&Value>) -> Result<Self, ApiError> {
        let body = match data {
            Some(data) if method.sends_body() => {
                Some(serde_json::to_string(data).map_err(|err| ApiError::Encode(err.to_string()))?)
            }
            _ => None,
        };
        Ok(Self { url: url.to_owned(), method, body })
    }
}

/// What came back from the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// `fetch`'s `response.ok`: any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a prepared request and returns the raw response.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// The server's `message` field, or [`FALLBACK_MESSAGE`] when it is missing,
/// empty, or not a string.
#[must_use]
pub fn error_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_owned()
}

/// Parse the body and check the status. The body is parsed first, so an
/// error status with a non-JSON body reports the parse failure.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] for a non-JSON body and
/// [`ApiError::Status`] for a non-2xx status.
pub fn interpret(response: ApiResponse) -> Result<Value, ApiError> {
    let body: Value = serde_json::from_str(&response.body).map_err(|err| ApiError::Decode(err.to_string()))?;
    if !response.is_success() {
        return Err(ApiError::Status { status: response.status, message: error_message(&body) });
    }
    Ok(body)
}

/// Send a JSON request and return the parsed JSON reply.
///
/// # Errors
///
/// Returns whatever [`ApiRequest::new`], the transport, or [`interpret`]
/// report; each failure is logged before it is returned.
pub async fn api_request<T: Transport>(
    transport: &T,
    url: &str,
    method: Method,
    data: Option<&Value>,
) -> Result<Value, ApiError> {
    let result = send_json(transport, url, method, data).await;
    if let Err(err) = &result {
        log::error!("API request {} {url} failed: {err}", method.as_str());
    }
    result
}

async fn send_json<T: Transport>(
    transport: &T,
    url: &str,
    method: Method,
    data: Option<&Value>,
) -> Result<Value, ApiError> {
    let request = ApiRequest::new(url, method, data)?;
    let response = transport.send(&request).await?;
    interpret(response)
}

#[cfg(feature = "hydrate")]
pub use browser::{FetchTransport, api_request_js};

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::Request;
    use wasm_bindgen::prelude::*;

    use super::{ApiError, ApiRequest, ApiResponse, CONTENT_TYPE, Method, Transport, api_request};
    use crate::dom;

    /// [`Transport`] over the browser's `fetch`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct FetchTransport;

    fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    impl Transport for FetchTransport {
        async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
            let url = request.url.as_str();
            let builder = match request.method {
                Method::Get => Request::get(url),
                Method::Post => Request::post(url),
                Method::Put => Request::put(url),
                Method::Patch => Request::patch(url),
                Method::Delete => Request::delete(url),
            }
            .header("Content-Type", CONTENT_TYPE);
            let prepared = match &request.body {
                Some(body) => builder.body(body.clone()),
                None => builder.build(),
            }
            .map_err(network)?;
            let response = prepared.send().await.map_err(network)?;
            let status = response.status();
            let body = response.text().await.map_err(network)?;
            Ok(ApiResponse { status, body })
        }
    }

    fn payload(data: &JsValue) -> Result<Option<serde_json::Value>, ApiError> {
        if data.is_undefined() || data.is_null() {
            return Ok(None);
        }
        let text = js_sys::JSON::stringify(data).map_err(|err| ApiError::Encode(dom::describe(&err)))?;
        let value = serde_json::from_str(&String::from(text)).map_err(|err| ApiError::Encode(err.to_string()))?;
        Ok(Some(value))
    }

    /// JavaScript entry point: `apiRequest(url, method = "GET", data)`.
    ///
    /// Resolves to the parsed response body; rejects with an `Error` whose
    /// message is the server's `message` field or the fallback.
    ///
    /// # Errors
    ///
    /// Rejects with a JS `Error` for any [`ApiError`].
    #[wasm_bindgen(js_name = apiRequest)]
    pub async fn api_request_js(url: String, method: Option<String>, data: JsValue) -> Result<JsValue, JsValue> {
        let reject = |err: ApiError| JsValue::from(js_sys::Error::new(&err.to_string()));
        let method = match method.as_deref() {
            None => Method::default(),
            Some(raw) => match Method::parse(raw) {
                Some(method) => method,
                None => {
                    let err = ApiError::UnsupportedMethod(raw.to_owned());
                    log::error!("API request {url} failed: {err}");
                    return Err(reject(err));
                }
            },
        };
        let data = payload(&data).map_err(reject)?;
        let body = api_request(&FetchTransport, &url, method, data.as_ref()).await.map_err(reject)?;
        js_sys::JSON::parse(&body.to_string())
    }
}
