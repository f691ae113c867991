// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting the index into memory.
//!
//! One fetch, one parse, one write. Until the write happens every query runs
//! against the empty index and comes back empty, which is indistinguishable
//! (to the user) from a search with no hits. If the fetch fails we log and
//! stay empty; a page reload is the retry.

use std::cell::OnceCell;
use std::rc::Rc;

use log::{info, warn};
use serde::de::Error as _;

use crate::error::{Result, WidgetError};
use crate::types::SearchIndex;

static EMPTY_INDEX: SearchIndex = SearchIndex::empty();

/// Decode an index body.
///
/// The top level must be a JSON object; everything inside it is decoded
/// leniently (see `types`).
pub fn parse_index(text: &str) -> Result<SearchIndex> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(WidgetError::Parse(serde_json::Error::custom(
            "expected an object with businesses, categories and tags",
        )));
    }
    Ok(serde_json::from_value(value)?)
}

/// Shared handle to the widget's index: empty until loaded, then frozen.
///
/// Clones share the same cell. The loader holds one clone, the widget
/// another; the first `install` wins and later ones are refused.
#[derive(Debug, Clone, Default)]
pub struct IndexSlot(Rc<OnceCell<SearchIndex>>);

impl IndexSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A slot that starts out loaded.
    pub fn loaded(index: SearchIndex) -> Self {
        let slot = Self::empty();
        slot.install(index);
        slot
    }

    /// Store the loaded index. Returns `false` if one was already installed.
    pub fn install(&self, index: SearchIndex) -> bool {
        let counts = (
            index.businesses.len(),
            index.categories.len(),
            index.tags.len(),
        );
        match self.0.set(index) {
            Ok(()) => {
                info!(
                    "Search data loaded: {} businesses, {} categories, {} tags",
                    counts.0, counts.1, counts.2
                );
                true
            }
            Err(_) => {
                warn!("Search index already loaded; ignoring second install");
                false
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.0.get().is_some()
    }

    /// The loaded index, or the empty one.
    pub fn current(&self) -> &SearchIndex {
        self.0.get().unwrap_or(&EMPTY_INDEX)
    }
}

#[cfg(feature = "wasm")]
mod fetch {
    use super::{parse_index, IndexSlot};
    use crate::error::{js_message, Result, WidgetError};
    use crate::types::SearchIndex;
    use log::error;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    /// `GET url` and parse the body.
    pub async fn load_index(url: &str) -> Result<SearchIndex> {
        let window = web_sys::window().ok_or(WidgetError::NoDocument)?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| WidgetError::fetch(url, js_message(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| WidgetError::fetch(url, "fetch did not resolve to a Response"))?;

        if !response.ok() {
            return Err(WidgetError::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response
            .text()
            .map_err(|e| WidgetError::fetch(url, js_message(&e)))?;
        let text = JsFuture::from(body)
            .await
            .map_err(|e| WidgetError::fetch(url, js_message(&e)))?
            .as_string()
            .ok_or_else(|| WidgetError::fetch(url, "response body is not text"))?;

        parse_index(&text)
    }

    /// Load in the background and install into `slot`. Never retries.
    pub fn spawn_load(slot: IndexSlot, url: String) {
        wasm_bindgen_futures::spawn_local(async move {
            match load_index(&url).await {
                Ok(index) => {
                    slot.install(index);
                }
                Err(err) => error!("Error loading search index: {}", err),
            }
        });
    }
}

#[cfg(feature = "wasm")]
pub use fetch::{load_index, spawn_load};
