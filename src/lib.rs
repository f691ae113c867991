//! Instant search for static business directories.
//!
//! A site generator writes one `/index.json` (businesses, categories, tags);
//! this crate loads it in the browser and filters it as the visitor types,
//! rendering a categorized dropdown under the search box.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  loader.rs  │────▶│   query.rs   │────▶│  render.rs   │
//! │ (IndexSlot, │     │ (Query,      │     │ (ResultView, │
//! │ parse_index)│     │  filter)     │     │  render_html)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   ▲                    │
//!        │            ┌──────────────┐            │
//!        └───────────▶│  widget.rs   │◀───────────┘
//!                     │ (SearchWidget│
//!                     │  + Debouncer │
//!                     │  + Visibility│
//!                     └──────────────┘
//!                            │
//!                            ▼
//!                   wasm.rs (DOM, setTimeout, fetch)
//! ```
//!
//! # Modules
//!
//! | Module       | Responsibility                                  |
//! |--------------|-------------------------------------------------|
//! | `types`      | Index records, lenient decoding, `ResultSet`    |
//! | `query`      | Query normalization and the filter              |
//! | `slug`       | Category/tag names to URL paths                 |
//! | `render`     | View model and escaped markup                   |
//! | `visibility` | Shown/hidden state machine                      |
//! | `debounce`   | `Timer` trait and `Debouncer`                   |
//! | `loader`     | Index parsing and the write-once `IndexSlot`    |
//! | `widget`     | The controller tying it all together            |
//! | `contracts`  | Debug-build invariant checks                    |
//!
//! # Usage
//!
//! ```
//! use sift::{render_html, search, ResultView, SearchIndex};
//!
//! let index: SearchIndex = sift::parse_index(
//!     r#"{"businesses": [], "categories": ["Home Services"], "tags": []}"#,
//! ).unwrap();
//!
//! let results = search("home", &index).unwrap();
//! let html = render_html(&ResultView::build(&results));
//! assert!(html.contains("/categories/home-services/"));
//! ```
//!
//! In the browser, build with `--features wasm`; the module mounts itself on
//! `#search-input` / `#search-results` when loaded.

// Module declarations
pub mod config;
pub mod contracts;
pub mod debounce;
mod error;
mod loader;
mod query;
mod render;
mod slug;
mod types;
mod utils;
pub mod visibility;
mod widget;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::WidgetConfig;
pub use debounce::{Debouncer, Task, Timer};
pub use error::{Result, WidgetError};
pub use loader::{parse_index, IndexSlot};
pub use query::{filter, search, Query, MAX_BUSINESS_RESULTS, MAX_TAG_RESULTS};
pub use render::{
    loading_html, render_html, BusinessRow, LinkRow, ResultView, Section, LOADING_TEXT,
    MAX_ROW_TAGS, NO_RESULTS_TEXT,
};
pub use slug::{category_url, tag_url, transform_for_url};
pub use types::{Business, ResultSet, SearchIndex};
pub use utils::normalize;
pub use visibility::{ClickTarget, UiEvent, Visibility};
pub use widget::{ResultsSurface, SearchWidget};

#[cfg(feature = "wasm")]
pub use loader::{load_index, spawn_load};
#[cfg(feature = "wasm")]
pub use wasm::{mount, BrowserTimer, DomSurface};
