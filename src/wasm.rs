// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings: mounts the widget on a live page.
//!
//! Exposes two entry points:
//! - the module start hook, which mounts with default options once the DOM is
//!   ready (unless `<html data-sift-manual>` is set)
//! - `mount(options?)`, for pages that want their own ids, URL or timing

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::{error, info, warn};
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentReadyState, Event, HtmlElement, HtmlInputElement, Node, Window};

use crate::config::WidgetConfig;
use crate::debounce::{Task, Timer};
use crate::error::{js_message, Result, WidgetError};
use crate::loader::{spawn_load, IndexSlot};
use crate::visibility::{ClickTarget, Visibility};
use crate::widget::{ResultsSurface, SearchWidget};

/// Attribute on `<html>` that disables the automatic mount.
const MANUAL_MOUNT_ATTR: &str = "data-sift-manual";

type DomWidget = SearchWidget<BrowserTimer, DomSurface>;

// =============================================================================
// ENTRY POINTS
// =============================================================================

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Another module on the page already installed a logger.
        warn!("console logger already initialized");
    }

    if let Err(err) = auto_mount() {
        error!("Search widget not mounted: {}", err);
    }
}

/// Mount the widget with a custom configuration.
///
/// `options` is `{ inputId, resultsId, indexUrl, debounceMs }`, every key
/// optional. A malformed options object is returned as an error; a missing
/// element or a failed index load is only logged.
#[wasm_bindgen]
pub fn mount(options: JsValue) -> std::result::Result<(), JsValue> {
    let config: WidgetConfig = if options.is_undefined() || options.is_null() {
        WidgetConfig::default()
    } else {
        from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    if let Err(err) = try_mount(&config) {
        error!("Search widget not mounted: {}", err);
    }
    Ok(())
}

fn auto_mount() -> Result<()> {
    let document = document()?;
    let manual = document
        .document_element()
        .is_some_and(|root| root.has_attribute(MANUAL_MOUNT_ATTR));
    if manual {
        info!("Automatic mount disabled by {}", MANUAL_MOUNT_ATTR);
        return Ok(());
    }

    if document.ready_state() != DocumentReadyState::Loading {
        return try_mount(&WidgetConfig::default());
    }

    let on_ready = Closure::once_into_js(|| {
        if let Err(err) = try_mount(&WidgetConfig::default()) {
            error!("Search widget not mounted: {}", err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(WidgetError::NoDocument)
}

/// Find the elements, start the index load and attach listeners.
///
/// Element lookup happens first: if either is missing, nothing is fetched and
/// nothing is attached.
fn try_mount(config: &WidgetConfig) -> Result<()> {
    let window = web_sys::window().ok_or(WidgetError::NoDocument)?;
    let document = window.document().ok_or(WidgetError::NoDocument)?;

    let input: HtmlInputElement = element_by_id(&document, &config.input_id)?;
    let results: HtmlElement = element_by_id(&document, &config.results_id)?;

    let index = IndexSlot::empty();
    spawn_load(index.clone(), config.index_url.clone());

    let surface = DomSurface::new(results.clone());
    let widget = Rc::new(RefCell::new(SearchWidget::new(
        index,
        surface,
        BrowserTimer::new(window),
        config.debounce(),
    )));

    attach_listeners(&document, &input, &results, &widget)?;
    info!(
        "Search widget mounted on #{} / #{} ({} ms debounce)",
        config.input_id, config.results_id, config.debounce_ms
    );
    Ok(())
}

fn element_by_id<E: JsCast>(document: &Document, id: &str) -> Result<E> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<E>().ok())
        .ok_or_else(|| WidgetError::missing_element(id))
}

/// Listeners live as long as the page, so their closures are leaked.
fn attach_listeners(
    document: &Document,
    input: &HtmlInputElement,
    results: &HtmlElement,
    widget: &Rc<RefCell<DomWidget>>,
) -> Result<()> {
    {
        let widget = Rc::clone(widget);
        let field = input.clone();
        let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            widget.borrow_mut().on_input(&field.value());
        });
        input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
    }

    {
        let widget = Rc::clone(widget);
        let field = input.clone();
        let on_focus = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            widget.borrow().on_focus(&field.value());
        });
        input.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref())?;
        on_focus.forget();
    }

    {
        let widget = Rc::clone(widget);
        let field: Node = input.clone().into();
        let panel: Node = results.clone().into();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let target = target.as_ref();
            let hit = if field.contains(target) {
                ClickTarget::Input
            } else if panel.contains(target) {
                ClickTarget::Results
            } else {
                ClickTarget::Outside
            };
            widget.borrow().on_click(hit);
        });
        document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    {
        let widget = Rc::clone(widget);
        let on_panel_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.stop_propagation();
            widget.borrow().on_click(ClickTarget::Results);
        });
        results
            .add_event_listener_with_callback("click", on_panel_click.as_ref().unchecked_ref())?;
        on_panel_click.forget();
    }

    Ok(())
}

// =============================================================================
// HOST ADAPTERS
// =============================================================================

/// The results container element.
pub struct DomSurface {
    container: HtmlElement,
}

impl DomSurface {
    pub fn new(container: HtmlElement) -> Self {
        Self { container }
    }
}

impl ResultsSurface for DomSurface {
    fn set_html(&self, html: &str) {
        self.container.set_inner_html(html);
    }

    fn set_visibility(&self, visibility: Visibility) {
        if let Err(err) = self
            .container
            .style()
            .set_property("display", visibility.css_display())
        {
            warn!("Could not set results display: {}", js_message(&err));
        }
    }
}

/// `setTimeout` / `clearTimeout` on the page's window.
///
/// Holds at most one outstanding callback, which is all a `Debouncer` ever
/// asks for. Starting a new one clears the previous timeout before its
/// closure is dropped.
pub struct BrowserTimer {
    window: Window,
    pending: RefCell<Option<(i32, Closure<dyn FnMut()>)>>,
}

impl BrowserTimer {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            pending: RefCell::new(None),
        }
    }

    fn clear(&self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}

impl Timer for BrowserTimer {
    type Handle = i32;

    fn start(&self, delay: Duration, task: Task) -> Option<i32> {
        if let Some((previous, _)) = self.pending.borrow_mut().take() {
            self.clear(previous);
        }

        let callback: Closure<dyn FnMut()> = Closure::once(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => {
                *self.pending.borrow_mut() = Some((handle, callback));
                Some(handle)
            }
            Err(err) => {
                error!("setTimeout failed: {}", js_message(&err));
                None
            }
        }
    }

    fn cancel(&self, handle: i32) {
        self.clear(handle);
        let mut pending = self.pending.borrow_mut();
        if pending.as_ref().is_some_and(|(h, _)| *h == handle) {
            pending.take();
        }
    }
}
