//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sift::testing::{ManualTimer, RecordingSurface};
use sift::{parse_index, IndexSlot, SearchIndex, SearchWidget};
use std::fs;
use std::sync::LazyLock;
use std::time::Duration;

// Re-export canonical test utilities from sift::testing
pub use sift::testing::{joes_pizza_index, make_business, make_tagged_business};

/// Path to the directory fixture.
pub const FIXTURE_INDEX: &str = "fixtures/index.json";

/// The stock debounce window.
pub const WINDOW: Duration = Duration::from_millis(300);

static FIXTURE_TEXT: LazyLock<String> = LazyLock::new(|| {
    fs::read_to_string(FIXTURE_INDEX).expect("Failed to read fixture index")
});

// ============================================================================
// INDEXES
// ============================================================================

/// The fixture directory, decoded.
pub fn fixture_index() -> SearchIndex {
    parse_index(&FIXTURE_TEXT).expect("Fixture index should parse")
}

/// An index of `count` businesses titled "Shop 0", "Shop 1", ... all tagged
/// "shop".
pub fn shops(count: usize) -> SearchIndex {
    SearchIndex {
        businesses: (0..count)
            .map(|i| make_tagged_business(&format!("Shop {}", i), &format!("/s/{}", i), &[], &["shop"]))
            .collect(),
        categories: Vec::new(),
        tags: (0..count).map(|i| format!("shop-{}", i)).collect(),
    }
}

// ============================================================================
// WIDGETS
// ============================================================================

pub type TestWidget = SearchWidget<ManualTimer, RecordingSurface>;

/// A widget on a virtual clock with the stock debounce window.
pub fn widget_with(slot: IndexSlot) -> (TestWidget, ManualTimer, RecordingSurface) {
    let timer = ManualTimer::new();
    let surface = RecordingSurface::new();
    let widget = SearchWidget::new(slot, surface.clone(), timer.clone(), WINDOW);
    (widget, timer, surface)
}

/// Type `text` one character at a time, `gap` apart, like a person would.
pub fn type_slowly(widget: &mut TestWidget, timer: &ManualTimer, text: &str, gap: Duration) {
    let mut typed = String::new();
    for c in text.chars() {
        typed.push(c);
        widget.on_input(&typed);
        timer.advance(gap);
    }
}
