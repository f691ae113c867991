// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Results panel: view model first, markup second.
//!
//! `ResultView::build` decides *what* the panel shows (which sections, which
//! rows, which links) from a `ResultSet`. The `Render` impls decide *how*,
//! emitting the class names the directory theme's stylesheet targets. Keeping
//! the two apart means the layout rules are plain data in tests, and all the
//! escaping is maud's problem rather than ours.
//!
//! # Layout rules
//!
//! - No results at all: one "No results found" message, no sections.
//! - Otherwise the Categories section is always first, even when empty.
//! - Businesses and Tags sections appear only when they have rows.
//! - A business row shows at most three tags, then "+N more".

use maud::{html, Markup, Render};

use crate::slug::{category_url, tag_url};
use crate::types::{Business, ResultSet};

/// Tags shown on a business row before collapsing into "+N more".
pub const MAX_ROW_TAGS: usize = 3;

pub const LOADING_TEXT: &str = "Searching...";
pub const NO_RESULTS_TEXT: &str = "No results found";

const CATEGORY_ICON_PATH: &str = "M2 4h12M2 8h12M2 12h12";
const TAG_ICON_PATH: &str = "M7 4L4 14M12 4L9 14";

// =============================================================================
// VIEW MODEL
// =============================================================================

/// A category or tag row: label plus the route it links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    pub label: String,
    pub href: String,
}

/// Everything a business row displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessRow {
    pub title: String,
    /// The record's permalink, untouched.
    pub href: String,
    /// `None` renders the placeholder box.
    pub image: Option<String>,
    /// "Food & Drink, Bars" when the record has categories.
    pub categories_line: Option<String>,
    /// First `MAX_ROW_TAGS` tags.
    pub tags: Vec<String>,
    /// How many tags didn't fit; rendered as "+N more" when non-zero.
    pub hidden_tags: usize,
}

impl From<&Business> for BusinessRow {
    fn from(business: &Business) -> Self {
        let categories = business.categories();
        let tags = business.tags();
        BusinessRow {
            title: business.title.clone(),
            href: business.permalink.clone(),
            image: business.image().map(str::to_string),
            categories_line: (!categories.is_empty()).then(|| categories.join(", ")),
            tags: tags.iter().take(MAX_ROW_TAGS).cloned().collect(),
            hidden_tags: tags.len().saturating_sub(MAX_ROW_TAGS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Categories(Vec<LinkRow>),
    Businesses(Vec<BusinessRow>),
    Tags(Vec<LinkRow>),
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Categories(_) => "Categories",
            Section::Businesses(_) => "Businesses",
            Section::Tags(_) => "Tags",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Section::Categories(rows) | Section::Tags(rows) => rows.len(),
            Section::Businesses(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What the panel shows for an active search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    NoResults,
    Sections(Vec<Section>),
}

impl ResultView {
    pub fn build(results: &ResultSet) -> ResultView {
        if results.is_empty() {
            return ResultView::NoResults;
        }

        let mut sections = Vec::with_capacity(3);
        sections.push(Section::Categories(
            results
                .categories
                .iter()
                .map(|name| LinkRow {
                    label: name.clone(),
                    href: category_url(name),
                })
                .collect(),
        ));

        if !results.businesses.is_empty() {
            sections.push(Section::Businesses(
                results.businesses.iter().map(BusinessRow::from).collect(),
            ));
        }

        if !results.tags.is_empty() {
            sections.push(Section::Tags(
                results
                    .tags
                    .iter()
                    .map(|name| LinkRow {
                        label: name.clone(),
                        href: tag_url(name),
                    })
                    .collect(),
            ));
        }

        ResultView::Sections(sections)
    }

    pub fn sections(&self) -> &[Section] {
        match self {
            ResultView::NoResults => &[],
            ResultView::Sections(sections) => sections,
        }
    }
}

// =============================================================================
// MARKUP
// =============================================================================

fn icon(path: &str) -> Markup {
    html! {
        svg class="search-result__icon" width="16" height="16" viewBox="0 0 16 16" fill="none" {
            path d=(path) stroke="currentColor" stroke-width="2" stroke-linecap="round" {}
        }
    }
}

fn link_row(row: &LinkRow, icon_path: &str) -> Markup {
    html! {
        a href=(row.href) class="search-result search-result--category" {
            div class="search-result__title" {
                (icon(icon_path))
                (row.label)
            }
        }
    }
}

impl Render for BusinessRow {
    fn render(&self) -> Markup {
        html! {
            a href=(self.href) class="search-result" {
                div class="search-result__image" {
                    @if let Some(src) = &self.image {
                        img src=(src) alt=(self.title) loading="lazy";
                    } @else {
                        div class="search-result__image-placeholder" {}
                    }
                }
                div class="search-result__content" {
                    div class="search-result__title" { (self.title) }
                    @if let Some(line) = &self.categories_line {
                        div class="search-result__category" { (line) }
                    }
                    @if !self.tags.is_empty() {
                        div class="search-result__tags" {
                            @for tag in &self.tags {
                                span class="search-result__tag" { (tag) }
                            }
                            @if self.hidden_tags > 0 {
                                span class="search-result__tag" { "+" (self.hidden_tags) " more" }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Render for Section {
    fn render(&self) -> Markup {
        html! {
            div class="search-section" {
                div class="search-section__title" { (self.title()) }
                @match self {
                    Section::Categories(rows) => {
                        @for row in rows { (link_row(row, CATEGORY_ICON_PATH)) }
                    }
                    Section::Businesses(rows) => {
                        @for row in rows { (row) }
                    }
                    Section::Tags(rows) => {
                        @for row in rows { (link_row(row, TAG_ICON_PATH)) }
                    }
                }
            }
        }
    }
}

impl Render for ResultView {
    fn render(&self) -> Markup {
        match self {
            ResultView::NoResults => html! {
                div class="search-result__empty" { (NO_RESULTS_TEXT) }
            },
            ResultView::Sections(sections) => html! {
                @for section in sections { (section) }
            },
        }
    }
}

/// Markup for the results container's `innerHTML`.
pub fn render_html(view: &ResultView) -> String {
    view.render().into_string()
}

/// Placeholder shown between "input is non-empty" and "results are in".
pub fn loading_html() -> String {
    let markup: Markup = html! {
        div class="search-loading" { (LOADING_TEXT) }
    };
    markup.into_string()
}
