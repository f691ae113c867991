//! Slug rule and the two route families.

use sift::{category_url, tag_url, transform_for_url};

#[test]
fn test_documented_examples() {
    assert_eq!(transform_for_url("Food & Drink"), "food--drink");
    assert_eq!(transform_for_url("Home Services"), "home-services");
    assert_eq!(transform_for_url("A & B & C"), "a--b--c");
}

#[test]
fn test_fixture_categories() {
    let cases = [
        ("Garden & Outdoor", "/categories/garden--outdoor/"),
        ("Pet Care", "/categories/pet-care/"),
        ("Retail", "/categories/retail/"),
    ];
    for (name, url) in cases {
        assert_eq!(category_url(name), url, "category {:?}", name);
    }
}

#[test]
fn test_tags_have_no_trailing_slash() {
    assert_eq!(tag_url("lawn care"), "/tags/lawn-care");
    assert_eq!(tag_url("cash-only"), "/tags/cash-only");
    assert_eq!(tag_url("R & B"), "/tags/r--b");
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(transform_for_url("Lawn \t Care"), "lawn-care");
    assert_eq!(transform_for_url("Food  &  Drink"), "food--drink");
}

#[test]
fn test_non_ascii_names_are_lowercased_not_stripped() {
    assert_eq!(transform_for_url("Café & Bäckerei"), "café--bäckerei");
}
