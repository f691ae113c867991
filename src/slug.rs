// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display name → URL slug, and the two route families built from slugs.
//!
//! The rule has to agree byte-for-byte with the site generator, which does:
//!
//! ```text
//! name.toLowerCase()
//!     .replace(/\s*&\s*/g, '--')
//!     .replace(/\s+/g, '-')
//! ```
//!
//! We do it in one pass: buffer each whitespace run, then decide what it
//! becomes once we see the character after it. A run followed by `&` is
//! swallowed along with the ampersand; any run left over becomes a single `-`.
//!
//! | Name              | Slug             |
//! |-------------------|------------------|
//! | `Food & Drink`    | `food--drink`    |
//! | `Home Services`   | `home-services`  |
//! | `A & B & C`       | `a--b--c`        |
//! | `Arts&Crafts`     | `arts--crafts`   |
//! | `  Pet   Care `   | `-pet-care-`     |

use crate::contracts::check_slug;
use crate::utils::is_space;

/// Transform a category or tag name into its URL slug.
pub fn transform_for_url(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len() + 2);
    let mut pending_space = false;
    // Whitespace directly after an `&` belongs to the `--` already written.
    let mut after_ampersand = false;

    for c in lowered.chars() {
        if is_space(c) {
            if !after_ampersand {
                pending_space = true;
            }
            continue;
        }

        if c == '&' {
            pending_space = false;
            after_ampersand = true;
            slug.push_str("--");
            continue;
        }

        if pending_space {
            slug.push('-');
            pending_space = false;
        }
        after_ampersand = false;
        slug.push(c);
    }

    if pending_space {
        slug.push('-');
    }

    check_slug(&slug);
    slug
}

/// `/categories/<slug>/` (note the trailing slash).
pub fn category_url(name: &str) -> String {
    format!("/categories/{}/", transform_for_url(name))
}

/// `/tags/<slug>` (no trailing slash, unlike categories).
pub fn tag_url(name: &str) -> String {
    format!("/tags/{}", transform_for_url(name))
}
