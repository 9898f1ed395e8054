use chrono::{DateTime, Local, TimeZone};
use pretty_assertions::assert_eq;
use trendpost_engine::{escape_html, render_report, Item};

fn clock() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
}

fn items() -> Vec<Item> {
    let mut first = Item::new(
        "alice/alpha",
        "https://github.com/alice/alpha",
        "First project",
        "Rust",
        "1,234",
    );
    first.summary = Some("A solid systems tool.".to_string());
    let second = Item::new(
        "bob/beta",
        "https://github.com/bob/beta",
        "Second project",
        "Go",
        "567",
    );
    vec![first, second]
}

#[test]
fn deterministic_given_fixed_clock() {
    let items = items();
    let a = render_report(&items, Some("Insight."), clock());
    let b = render_report(&items, Some("Insight."), clock());
    assert_eq!(a, b);
}

#[test]
fn header_carries_formatted_date() {
    let html = render_report(&items(), None, clock());
    assert!(html.contains("GitHub Trending Report"));
    assert!(html.contains("January 15, 2025"));
}

#[test]
fn insights_block_present_iff_batch_summary_given() {
    let items = items();
    let with = render_report(&items, Some("Rust is everywhere."), clock());
    let without = render_report(&items, None, clock());

    // The stylesheet always mentions the class; the block itself must not
    // appear without a batch summary.
    assert!(with.contains("class=\"ai-summary\""));
    assert!(with.contains("AI Insights"));
    assert!(with.contains("Rust is everywhere."));
    assert!(!without.contains("class=\"ai-summary\""));
    assert!(!without.contains("AI Insights"));
}

#[test]
fn item_summary_block_present_iff_summary_attached() {
    let html = render_report(&items(), None, clock());
    assert_eq!(html.matches("class=\"repo-card\"").count(), 2);
    // Only the first item carries a summary.
    assert_eq!(html.matches("class=\"repo-summary\"").count(), 1);
    assert!(html.contains("A solid systems tool."));
}

#[test]
fn cards_follow_extraction_order() {
    let html = render_report(&items(), None, clock());
    let first = html.find("alice/alpha").unwrap();
    let second = html.find("bob/beta").unwrap();
    assert!(first < second);
}

#[test]
fn item_fields_are_escaped() {
    let item = Item::new(
        "eve/<script>",
        "https://github.com/eve/evil",
        "Uses <b> & \"quotes\"",
        "C++",
        "1",
    );
    let html = render_report(&[item], None, clock());
    assert!(!html.contains("<script>"));
    assert!(html.contains("eve/&lt;script&gt;"));
    assert!(html.contains("Uses &lt;b&gt; &amp; &quot;quotes&quot;"));
}

#[test]
fn batch_summary_newlines_become_breaks() {
    let html = render_report(&items(), Some("Line one.\nLine two."), clock());
    assert!(html.contains("Line one.<br>Line two."));
}

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(escape_html("a & b"), "a &amp; b");
    assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
    assert_eq!(escape_html("it's \"fine\""), "it&#39;s &quot;fine&quot;");
    assert_eq!(escape_html("plain"), "plain");
}
