use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use trendpost_logging::pipeline_warn;
use url::Url;

use crate::types::{Item, NO_DESCRIPTION, NO_LANGUAGE, NO_STARS};

/// Maximum number of trending entries taken from one listing document.
pub const MAX_ITEMS: usize = 10;

const REPO_BASE: &str = "https://github.com/";

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document carries no recognizable trending entries at all.
    /// A shape change of the listing page is fatal to the run; a single
    /// malformed entry is not.
    #[error("listing document has an unexpected shape: no trending entries found")]
    UnexpectedShape,
}

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> Result<Vec<Item>, ExtractError>;
}

/// Extracts trending entries from the listing page markup:
/// - one `article.Box-row` per entry, in document order, capped at [`MAX_ITEMS`]
/// - repository name from the `h2 a` link target, `/` trimmed
/// - missing description/language/stars degrade to placeholders
/// - a malformed entry is logged and skipped, never fatal.
#[derive(Debug, Default)]
pub struct TrendingExtractor;

impl Extractor for TrendingExtractor {
    fn extract(&self, html: &str) -> Result<Vec<Item>, ExtractError> {
        let doc = Html::parse_document(html);
        let row_sel = selector("article.Box-row");

        let mut items = Vec::new();
        let mut seen = HashSet::new();
        let mut candidates = 0usize;

        for row in doc.select(&row_sel).take(MAX_ITEMS) {
            candidates += 1;
            match extract_row(&row) {
                Some(item) => {
                    // First occurrence wins; names are unique within a run.
                    if seen.insert(item.name.clone()) {
                        items.push(item);
                    } else {
                        pipeline_warn!("Skipping duplicate trending entry: {}", item.name);
                    }
                }
                None => {
                    pipeline_warn!("Skipping malformed trending entry #{candidates}");
                }
            }
        }

        if candidates == 0 {
            return Err(ExtractError::UnexpectedShape);
        }
        Ok(items)
    }
}

fn extract_row(row: &ElementRef<'_>) -> Option<Item> {
    let link_sel = selector("h2 a");
    let desc_sel = selector("p");
    let lang_sel = selector(r#"[itemprop="programmingLanguage"]"#);
    let stars_sel = selector(r#"a[href*="stargazers"]"#);

    let link = row.select(&link_sel).next()?;
    let name = link.value().attr("href")?.trim_matches('/').to_string();
    if name.is_empty() {
        return None;
    }
    let url = repo_url(&name)?;

    let description = row
        .select(&desc_sel)
        .next()
        .map(collect_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let language = row
        .select(&lang_sel)
        .next()
        .map(collect_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_LANGUAGE.to_string());

    let stars = row
        .select(&stars_sel)
        .next()
        .map(collect_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_STARS.to_string());

    Some(Item::new(name, url, description, language, stars))
}

fn repo_url(name: &str) -> Option<String> {
    let base = Url::parse(REPO_BASE).ok()?;
    base.join(name).ok().map(String::from)
}

fn collect_text(node: ElementRef<'_>) -> String {
    node.text().collect::<String>().trim().to_string()
}

fn selector(css: &str) -> Selector {
    // All selectors here are string literals known to parse.
    Selector::parse(css).expect("valid selector literal")
}
