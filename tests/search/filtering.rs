//! Filter semantics: matching fields, caps, ordering and inactive queries.

use crate::common::{fixture_index, joes_pizza_index, make_business, shops};
use sift::{filter, search, Business, Query, SearchIndex, MAX_BUSINESS_RESULTS, MAX_TAG_RESULTS};

fn titles(businesses: &[Business]) -> Vec<&str> {
    businesses.iter().map(|b| b.title.as_str()).collect()
}

#[test]
fn test_joes_pizza_scenario() {
    let results = search("pizza", &joes_pizza_index()).unwrap();

    assert!(results.categories.is_empty());
    assert_eq!(titles(&results.businesses), ["Joe's Pizza"]);
    assert_eq!(results.tags, ["pizza"]);
}

#[test]
fn test_empty_index_finds_nothing() {
    let results = search("anything", &SearchIndex::empty()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_blank_queries_are_inactive() {
    let index = fixture_index();
    for raw in ["", " ", "\t\n", "\u{a0}\u{3000}"] {
        assert!(search(raw, &index).is_none(), "{:?} should be inactive", raw);
    }
}

#[test]
fn test_query_is_trimmed_and_lowercased() {
    let index = fixture_index();
    assert_eq!(search("  PIZZA ", &index), search("pizza", &index));
    assert_eq!(Query::parse("  Home Services ").unwrap().as_str(), "home services");
}

#[test]
fn test_every_business_field_can_match() {
    let index = fixture_index();

    // title
    assert_eq!(titles(&search("trattoria", &index).unwrap().businesses), ["Mario's Trattoria"]);
    // content
    assert_eq!(titles(&search("hedge", &index).unwrap().businesses), ["Green Thumb Landscaping"]);
    // category
    assert_eq!(
        titles(&search("garden & out", &index).unwrap().businesses),
        ["Green Thumb Landscaping"]
    );
    // tag
    assert_eq!(titles(&search("cash-only", &index).unwrap().businesses), ["Joe's Pizza"]);
}

#[test]
fn test_results_keep_index_order() {
    let results = search("italian", &fixture_index()).unwrap();
    assert_eq!(titles(&results.businesses), ["Joe's Pizza", "Mario's Trattoria"]);
}

#[test]
fn test_query_spanning_words_matches_substring() {
    let results = search("lawn c", &fixture_index()).unwrap();
    assert_eq!(results.tags, ["lawn care"]);
    assert_eq!(titles(&results.businesses), ["Green Thumb Landscaping"]);
}

#[test]
fn test_caps_apply_to_businesses_and_tags_only() {
    let mut index = shops(9);
    index.categories = (0..9).map(|i| format!("Shops {}", i)).collect();

    let results = search("shop", &index).unwrap();
    assert_eq!(results.businesses.len(), MAX_BUSINESS_RESULTS);
    assert_eq!(results.tags.len(), MAX_TAG_RESULTS);
    assert_eq!(results.categories.len(), 9);

    // The first five, not any five.
    assert_eq!(titles(&results.businesses), ["Shop 0", "Shop 1", "Shop 2", "Shop 3", "Shop 4"]);
    assert_eq!(results.tags.last().map(String::as_str), Some("shop-4"));
}

#[test]
fn test_missing_fields_never_match() {
    let index = SearchIndex {
        businesses: vec![make_business("", "/nowhere")],
        ..SearchIndex::default()
    };
    let query = Query::parse("nowhere").unwrap();
    // Permalinks are not searched.
    assert!(filter(&query, &index).is_empty());
}

#[test]
fn test_mistyped_record_matches_on_surviving_fields() {
    let index = fixture_index();

    // The record with a numeric title still has content and string tags.
    let results = search("turntables", &index).unwrap();
    assert_eq!(results.businesses.len(), 1);
    assert_eq!(results.businesses[0].title, "");
    assert_eq!(results.businesses[0].permalink, "/businesses/spin-city/");

    // Its category was a bare string, so it doesn't count as "Retail".
    let retail = search("retail", &index).unwrap();
    assert_eq!(titles(&retail.businesses), ["Corner Books"]);

    // A numeric title can't be matched as text either.
    assert!(search("404", &index).unwrap().businesses.is_empty());
}

#[test]
fn test_unicode_case_folding() {
    let index = SearchIndex {
        businesses: vec![make_business("Café Ünter den Linden", "/cafe")],
        categories: vec!["ÉPICERIE".to_string()],
        tags: Vec::new(),
    };
    assert_eq!(search("CAFÉ ü", &index).unwrap().businesses.len(), 1);
    assert_eq!(search("épic", &index).unwrap().categories, ["ÉPICERIE"]);
    // No accent folding.
    assert!(search("cafe", &index).unwrap().businesses.is_empty());
}

#[test]
fn test_filter_is_deterministic() {
    let index = fixture_index();
    let query = Query::parse("e").unwrap();
    assert_eq!(filter(&query, &index), filter(&query, &index));
}
