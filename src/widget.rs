// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The widget controller: input → debounce → filter → render → panel.
//!
//! `SearchWidget` owns no DOM. It talks to the page through `ResultsSurface`
//! (set the panel's HTML, show or hide it) and to the clock through `Timer`,
//! so the whole interaction loop runs natively in tests with a
//! `ManualTimer` and a `RecordingSurface`. The `wasm` module plugs in the
//! real container element and `setTimeout`.
//!
//! # Event handling
//!
//! | Browser event               | Method                          |
//! |-----------------------------|---------------------------------|
//! | `input` on the text box     | `on_input(value)` (debounced)   |
//! | `focus` on the text box     | `on_focus(value)`               |
//! | `click` on the document     | `on_click(Input / Outside)`     |
//! | `click` on the panel        | `on_click(Results)`, propagation stopped |
//!
//! An evaluation with an empty query hides the panel. Otherwise it shows the
//! loading placeholder and the panel, filters, and swaps in the results, all
//! within the same tick.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::debug;

use crate::debounce::{Debouncer, Timer};
use crate::loader::IndexSlot;
use crate::query::{filter, Query};
use crate::render::{loading_html, render_html, ResultView};
use crate::visibility::{ClickTarget, UiEvent, Visibility};

/// The results container as the controller sees it.
pub trait ResultsSurface {
    /// Replace the container's contents.
    fn set_html(&self, html: &str);

    /// Show or hide the container.
    fn set_visibility(&self, visibility: Visibility);
}

/// Panel state shared between the widget and its pending evaluation.
struct Panel<S> {
    surface: S,
    visibility: Visibility,
    evaluations: usize,
}

impl<S: ResultsSurface> Panel<S> {
    fn transition(&mut self, event: UiEvent) {
        let next = self.visibility.apply(event);
        if next != self.visibility {
            debug!("Search panel {:?} -> {:?} on {:?}", self.visibility, next, event);
        }
        self.visibility = next;
        self.surface.set_visibility(next);
    }

    fn evaluate(&mut self, raw: &str, index: &IndexSlot) {
        self.evaluations += 1;

        let Some(query) = Query::parse(raw) else {
            self.transition(UiEvent::InputChanged { non_empty: false });
            return;
        };

        self.surface.set_html(&loading_html());
        self.transition(UiEvent::InputChanged { non_empty: true });

        let results = filter(&query, index.current());
        debug!(
            "Query '{}': {} categories, {} businesses, {} tags",
            query,
            results.categories.len(),
            results.businesses.len(),
            results.tags.len()
        );

        let view = ResultView::build(&results);
        self.surface.set_html(&render_html(&view));
    }
}

/// One search box and its results panel.
pub struct SearchWidget<T: Timer, S> {
    index: IndexSlot,
    panel: Rc<RefCell<Panel<S>>>,
    debouncer: Debouncer<T>,
}

impl<T, S> SearchWidget<T, S>
where
    T: Timer,
    S: ResultsSurface + 'static,
{
    /// Wire a widget to its index, panel and clock. The panel starts hidden.
    pub fn new(index: IndexSlot, surface: S, timer: T, debounce: Duration) -> Self {
        surface.set_visibility(Visibility::Hidden);
        Self {
            index,
            panel: Rc::new(RefCell::new(Panel {
                surface,
                visibility: Visibility::Hidden,
                evaluations: 0,
            })),
            debouncer: Debouncer::new(timer, debounce),
        }
    }

    /// The input's value changed. Evaluation happens once typing pauses.
    pub fn on_input(&mut self, value: &str) {
        let value = value.to_string();
        let index = self.index.clone();
        let panel = Rc::clone(&self.panel);
        self.debouncer
            .schedule(move || panel.borrow_mut().evaluate(&value, &index));
    }

    /// The input gained focus; reopen the panel if there is something typed.
    pub fn on_focus(&self, value: &str) {
        let input_non_empty = Query::parse(value).is_some();
        self.panel
            .borrow_mut()
            .transition(UiEvent::Focused { input_non_empty });
    }

    pub fn on_click(&self, target: ClickTarget) {
        self.panel.borrow_mut().transition(UiEvent::Clicked(target));
    }

    /// Evaluate `value` right away, skipping the debounce window.
    pub fn evaluate_now(&mut self, value: &str) {
        self.debouncer.cancel();
        self.panel.borrow_mut().evaluate(value, &self.index);
    }

    pub fn visibility(&self) -> Visibility {
        self.panel.borrow().visibility
    }

    /// Filter/render passes run so far (debounced calls that never fired
    /// don't count).
    pub fn evaluations(&self) -> usize {
        self.panel.borrow().evaluations
    }

    pub fn index(&self) -> &IndexSlot {
        &self.index
    }

    pub fn debounce(&self) -> Duration {
        self.debouncer.delay()
    }
}
