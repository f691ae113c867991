// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data a directory search works with.
//!
//! The index is produced by the site generator, not by us, so decoding is
//! deliberately forgiving: a record with a number where a string should be
//! is a record that simply doesn't match, never a reason to throw away the
//! whole index.
//!
//! # Invariants
//!
//! - **ResultSet**: `businesses.len() <= 5 ∧ tags.len() <= 5`. Categories are
//!   uncapped. Enforced by `query::filter`, checked by `contracts`.
//! - **Business**: optional members are `None` when absent *or* mistyped. Code
//!   that matches or renders must treat `None` as "no match" / "nothing to show".
//!
//! # Decoding rules
//!
//! | JSON                                  | Decodes to                          |
//! |---------------------------------------|-------------------------------------|
//! | missing `businesses`/`categories`/`tags` | empty list                       |
//! | `categories: "x"` (not an array)      | parse error                         |
//! | non-string entry in `categories`      | dropped                             |
//! | non-object entry in `businesses`      | dropped                             |
//! | `content: 42`, `image: null`          | `None`                              |
//! | `title` missing or not a string       | `""` (never matches)                |

use serde::{Deserialize, Serialize};

// =============================================================================
// INDEX TYPES
// =============================================================================

/// Everything the widget can find, as served from `/index.json`.
///
/// Loaded once per page and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    #[serde(default, deserialize_with = "lenient::records")]
    pub businesses: Vec<Business>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub tags: Vec<String>,
}

impl SearchIndex {
    /// The index before anything has been loaded.
    pub const fn empty() -> Self {
        SearchIndex {
            businesses: Vec::new(),
            categories: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty() && self.categories.is_empty() && self.tags.is_empty()
    }
}

/// A directory listing.
///
/// `permalink` is emitted verbatim as the result link. Everything else is
/// display or match material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_string"
    )]
    pub content: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_strings"
    )]
    pub categories: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_strings"
    )]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub permalink: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_string"
    )]
    pub image: Option<String>,
}

impl Business {
    /// Create a listing with only the required fields set.
    pub fn new(title: impl Into<String>, permalink: impl Into<String>) -> Self {
        Business {
            title: title.into(),
            permalink: permalink.into(),
            ..Business::default()
        }
    }

    /// Categories, or an empty slice when the record has none.
    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }

    /// Tags, or an empty slice when the record has none.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Image URL, treating an empty string the same as a missing one.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// The three filtered collections produced by one query evaluation.
///
/// Recomputed from scratch for every query; nothing carries over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub categories: Vec<String>,
    pub businesses: Vec<Business>,
    pub tags: Vec<String>,
}

impl ResultSet {
    /// True when all three collections are empty (the "No results found" case).
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.businesses.is_empty() && self.tags.is_empty()
    }
}

// =============================================================================
// LENIENT DECODING
// =============================================================================

mod lenient {
    use super::Business;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn strings_of(values: Vec<Value>) -> Vec<String> {
        values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// A list that must be an array, keeping only its string elements.
    pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Value>::deserialize(deserializer).map(strings_of)
    }

    /// A list that must be an array, keeping only its object elements.
    pub fn records<'de, D>(deserializer: D) -> Result<Vec<Business>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<Value>::deserialize(deserializer)?;
        Ok(values
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect())
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional_string(deserializer)?.unwrap_or_default())
    }

    pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Some(s)),
            _ => Ok(None),
        }
    }

    pub fn optional_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(values) => Ok(Some(strings_of(values))),
            _ => Ok(None),
        }
    }
}
