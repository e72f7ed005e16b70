//! Backend Requests
//!
//! Frontend bindings to the HTTP API, organized by domain.

mod task;
mod column;
mod role;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

// Re-export all public items
pub use task::*;
pub use column::*;
pub use role::*;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("no browser window")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered {0}")]
    Status(u16),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the server answered but refused the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status(_))
    }
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// HTTP client bound to the page's CSRF token
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpClient {
    csrf_token: String,
}

impl HttpClient {
    pub fn new(csrf_token: impl Into<String>) -> Self {
        Self { csrf_token: csrf_token.into() }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.send("GET", url, None).await?;
        read_json(response).await
    }

    /// Send a JSON body with the CSRF header; the response body is not read
    pub async fn send_json<B: Serialize>(&self, method: &str, url: &str, body: &B) -> Result<Response, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(method, url, Some(body)).await
    }

    async fn send(&self, method: &str, url: &str, body: Option<String>) -> Result<Response, ApiError> {
        let init = RequestInit::new();
        init.set_method(method);
        init.set_credentials(RequestCredentials::SameOrigin);
        if let Some(body) = &body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
        if body.is_some() {
            let headers = request.headers();
            headers.set("Content-Type", "application/json").map_err(js_error)?;
            headers.set("X-CSRFToken", &self.csrf_token).map_err(js_error)?;
        }

        let window = web_sys::window().ok_or(ApiError::NoWindow)?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
