// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Every field has a default matching the stock directory theme, so the
//! common case is no configuration at all. From JavaScript:
//!
//! ```js
//! mount({ inputId: "q", debounceMs: 150 });
//! ```

use serde::Deserialize;
use std::time::Duration;

/// Default quiet period before a keystroke burst is evaluated.
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Where the index lives unless told otherwise.
pub const DEFAULT_INDEX_URL: &str = "/index.json";

pub const DEFAULT_INPUT_ID: &str = "search-input";
pub const DEFAULT_RESULTS_ID: &str = "search-results";

/// Options passed from JavaScript (all optional).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// `id` of the text input (default: "search-input")
    pub input_id: String,
    /// `id` of the results container (default: "search-results")
    pub results_id: String,
    /// URL of the JSON index (default: "/index.json")
    pub index_url: String,
    /// Debounce window in milliseconds (default: 300)
    pub debounce_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            input_id: DEFAULT_INPUT_ID.to_string(),
            results_id: DEFAULT_RESULTS_ID.to_string(),
            index_url: DEFAULT_INDEX_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl WidgetConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }
}
