//! Server API Client
//!
//! `fetch` wrappers for the jobs and reports HTTP API, organized by domain.

pub mod endpoints;
mod jobs;
mod preset_dirs;

use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, Request, RequestInit, Response};

use crate::error::ApiError;
use endpoints::encode_component;

// Re-export all public items
pub use jobs::*;
pub use preset_dirs::*;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP method
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Methods that need the CSRF header
    fn is_unsafe(self) -> bool {
        !matches!(self, Method::Get)
    }
}

/// `application/x-www-form-urlencoded` body
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    /// Absent ids are sent as an empty value
    pub fn optional_id(self, name: &str, value: Option<u32>) -> Self {
        self.field(name, value.map(|id| id.to_string()).unwrap_or_default())
    }

    #[cfg(test)]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| format!("{}={}", form_component(key), form_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn form_component(text: &str) -> String {
    encode_component(text).replace("%20", "+")
}

/// Send one request; non-2xx statuses become [`ApiError::Status`]
pub(crate) async fn send(method: Method, url: &str, body: Option<&FormBody>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body.encode()));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(ApiError::from_js)?;
    let headers = request.headers();
    headers.set("X-Requested-With", "XMLHttpRequest").map_err(ApiError::from_js)?;
    if body.is_some() {
        headers.set("Content-Type", FORM_CONTENT_TYPE).map_err(ApiError::from_js)?;
    }
    if method.is_unsafe() {
        if let Some(token) = csrf_token() {
            headers.set(CSRF_HEADER, &token).map_err(ApiError::from_js)?;
        }
    }

    log::debug!("[API] {} {}", method.as_str(), url);
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    let response: Response = value.dyn_into().map_err(ApiError::from_js)?;

    if !response.ok() {
        let text = read_text(&response).await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            message: error_message(&text),
        });
    }
    Ok(response)
}

/// Send and decode a JSON response body
pub(crate) async fn send_json<T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: Option<&FormBody>,
) -> Result<T, ApiError> {
    let response = send(method, url, body).await?;
    let promise = response.json().map_err(ApiError::from_js)?;
    let value = JsFuture::from(promise).await.map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_text(response: &Response) -> Option<String> {
    let promise = response.text().ok()?;
    JsFuture::from(promise).await.ok()?.as_string()
}

/// Human readable message out of an error response body.
///
/// Understands `{"detail": ..}`, `{"error": ..}` and field error maps
/// (`{"name": ["This field is required."]}`).
pub(crate) fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return String::new();
    };
    let Some(object) = value.as_object() else {
        return value.as_str().map(str::to_string).unwrap_or_default();
    };
    for key in ["detail", "error"] {
        if let Some(text) = object.get(key).and_then(|v| v.as_str()) {
            return text.to_string();
        }
    }
    object
        .iter()
        .filter_map(|(field, errors)| {
            let first = errors.as_array()?.first()?.as_str()?;
            Some(format!("{}: {}", field, first))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let document: HtmlDocument = document.dyn_into().ok()?;
    cookie_value(&document.cookie().ok()?, CSRF_COOKIE)
}

/// Value of cookie `name` in a `document.cookie` string
pub(crate) fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| percent_decode_str(value).decode_utf8_lossy().into_owned())
    })
}
