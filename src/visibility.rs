// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Show/hide state of the results panel.
//!
//! Two states, four kinds of event. Kept as a pure transition function so the
//! rules can be tested without a DOM:
//!
//! ```text
//!                 input non-empty / focus with text
//!        ┌────────┐ ───────────────────────────────▶ ┌─────────┐
//!        │ Hidden │                                   │ Visible │
//!        └────────┘ ◀─────────────────────────────── └─────────┘
//!                 input empty / click outside both
//! ```
//!
//! Clicks inside the panel or on the input change nothing. In the browser the
//! panel also stops the click from bubbling, so the document-level
//! outside-click listener never sees it.

/// Where a click landed, relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    Results,
    Outside,
}

/// Everything that can move the panel between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A debounced evaluation ran with the current input value.
    InputChanged { non_empty: bool },
    /// The input gained focus.
    Focused { input_non_empty: bool },
    Clicked(ClickTarget),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// The state after `event`.
    pub fn apply(self, event: UiEvent) -> Visibility {
        match event {
            UiEvent::InputChanged { non_empty: true } => Visibility::Visible,
            UiEvent::InputChanged { non_empty: false } => Visibility::Hidden,
            UiEvent::Focused {
                input_non_empty: true,
            } => Visibility::Visible,
            UiEvent::Focused {
                input_non_empty: false,
            } => self,
            UiEvent::Clicked(ClickTarget::Outside) => Visibility::Hidden,
            UiEvent::Clicked(ClickTarget::Input | ClickTarget::Results) => self,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    /// Value for the container's inline `display` style.
    pub fn css_display(self) -> &'static str {
        match self {
            Visibility::Hidden => "none",
            Visibility::Visible => "block",
        }
    }
}
