mod common;

use common::{malformed_row, page, row};
use pretty_assertions::assert_eq;
use trendpost_engine::{
    ExtractError, Extractor, TrendingExtractor, MAX_ITEMS, NO_DESCRIPTION, NO_LANGUAGE, NO_STARS,
};

#[test]
fn extracts_items_in_document_order() {
    let html = page(&[
        row("alice/alpha", Some("First"), Some("Rust"), Some("1,234")),
        row("bob/beta", Some("Second"), Some("Go"), Some("567")),
        row("carol/gamma", Some("Third"), Some("Python"), Some("89")),
    ]);

    let items = TrendingExtractor.extract(&html).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].name, "alice/alpha");
    assert_eq!(items[1].name, "bob/beta");
    assert_eq!(items[2].name, "carol/gamma");
    assert_eq!(items[0].url, "https://github.com/alice/alpha");
    assert_eq!(items[0].description, "First");
    assert_eq!(items[0].language, "Rust");
    assert_eq!(items[0].stars, "1,234");
    assert!(items.iter().all(|item| item.summary.is_none()));
}

#[test]
fn missing_substructures_get_placeholders() {
    let html = page(&[row("dora/delta", None, None, None)]);

    let items = TrendingExtractor.extract(&html).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].description, NO_DESCRIPTION);
    assert_eq!(items[0].language, NO_LANGUAGE);
    assert_eq!(items[0].stars, NO_STARS);
}

#[test]
fn malformed_entry_is_skipped_not_fatal() {
    let html = page(&[
        row("alice/alpha", Some("First"), Some("Rust"), Some("10")),
        malformed_row(),
        row("carol/gamma", Some("Third"), Some("Python"), Some("30")),
    ]);

    let items = TrendingExtractor.extract(&html).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "alice/alpha");
    assert_eq!(items[1].name, "carol/gamma");
}

#[test]
fn caps_at_max_items() {
    let rows: Vec<String> = (0..15)
        .map(|i| row(&format!("user/repo{i}"), Some("d"), Some("Rust"), Some("1")))
        .collect();
    let items = TrendingExtractor.extract(&page(&rows)).unwrap();
    assert_eq!(items.len(), MAX_ITEMS);
    assert_eq!(items[0].name, "user/repo0");
    assert_eq!(items[9].name, "user/repo9");
}

#[test]
fn duplicate_names_keep_first_occurrence() {
    let html = page(&[
        row("alice/alpha", Some("First"), Some("Rust"), Some("10")),
        row("alice/alpha", Some("Copy"), Some("Go"), Some("20")),
    ]);

    let items = TrendingExtractor.extract(&html).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].description, "First");
}

#[test]
fn document_without_entries_is_an_unexpected_shape() {
    let err = TrendingExtractor
        .extract("<html><body><div>maintenance page</div></body></html>")
        .unwrap_err();
    assert!(matches!(err, ExtractError::UnexpectedShape));
}
