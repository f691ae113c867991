//! Panel markup for realistic result sets.

use crate::common::{fixture_index, joes_pizza_index, make_tagged_business};
use sift::{render_html, search, ResultView, SearchIndex, Section, NO_RESULTS_TEXT};

fn render(raw: &str, index: &SearchIndex) -> String {
    render_html(&ResultView::build(&search(raw, index).unwrap()))
}

#[test]
fn test_joes_pizza_row() {
    let html = render("pizza", &joes_pizza_index());

    for tag in ["pizza", "italian", "delivery"] {
        assert!(html.contains(&format!(r#"<span class="search-result__tag">{}</span>"#, tag)));
    }
    assert!(!html.contains(">cash-only<"));
    assert!(html.contains(r#"<span class="search-result__tag">+1 more</span>"#));
    assert!(html.contains(r#"<div class="search-result__category">Food &amp; Drink</div>"#));
    assert!(html.contains(r#"<a href="/tags/pizza" class="search-result search-result--category">"#));
}

#[test]
fn test_section_order_and_titles() {
    let html = render("i", &fixture_index());
    let categories = html.find(">Categories<").unwrap();
    let businesses = html.find(">Businesses<").unwrap();
    let tags = html.find(">Tags<").unwrap();
    assert!(categories < businesses && businesses < tags);
}

#[test]
fn test_categories_heading_shown_even_when_empty() {
    let results = search("plumbing", &fixture_index()).unwrap();
    assert!(results.categories.is_empty());

    let view = ResultView::build(&results);
    assert!(matches!(view.sections().first(), Some(Section::Categories(rows)) if rows.is_empty()));
    assert!(render_html(&view).contains(">Categories<"));
}

#[test]
fn test_category_links_use_slugs() {
    let html = render("home", &fixture_index());
    assert!(html.contains(r#"href="/categories/home-services/""#));
}

#[test]
fn test_business_links_use_permalink_verbatim() {
    let html = render("paws", &fixture_index());
    assert!(html.contains(r#"href="/businesses/paws-and-claws/""#));
    assert!(html.contains(r#"src="/images/paws.png""#));
}

#[test]
fn test_missing_or_empty_image_uses_placeholder() {
    let html = render("trattoria", &fixture_index());
    assert!(html.contains("search-result__image-placeholder"));
    assert!(!html.contains("<img"));
}

#[test]
fn test_no_results_message() {
    let html = render("zzzz", &fixture_index());
    assert_eq!(
        html,
        format!(r#"<div class="search-result__empty">{}</div>"#, NO_RESULTS_TEXT)
    );
}

#[test]
fn test_markup_in_index_is_escaped() {
    let index = SearchIndex {
        businesses: vec![make_tagged_business(
            "<script>alert(1)</script>",
            "/evil",
            &[],
            &["<b>bold</b>"],
        )],
        ..SearchIndex::default()
    };
    let html = render("script", &index);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
}
