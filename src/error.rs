// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the search widget.
//!
//! None of these ever reach the results panel. Initialization and load
//! failures are logged and the widget carries on (inert, or with an empty
//! index). Malformed records are not errors at all: they decode to
//! non-matching values in `types`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    /// A required host element is not on the page.
    #[error("search element #{id} not found")]
    MissingElement { id: String },

    /// Running outside a browser window (or in a worker).
    #[error("no window/document available")]
    NoDocument,

    /// `fetch` rejected or the body could not be read.
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The index responded, but not with a 2xx.
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The index body is not a usable JSON object.
    #[error("malformed search index: {0}")]
    Parse(#[from] serde_json::Error),

    /// Any other JavaScript exception surfaced through wasm-bindgen.
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, WidgetError>;

impl WidgetError {
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// True for failures that leave the widget inert rather than just empty.
    pub fn is_initialization(&self) -> bool {
        matches!(self, Self::MissingElement { .. } | Self::NoDocument)
    }
}

/// Best-effort text for a thrown JS value.
#[cfg(feature = "wasm")]
pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(js_message(&value))
    }
}

#[cfg(feature = "wasm")]
impl From<WidgetError> for wasm_bindgen::JsValue {
    fn from(err: WidgetError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
