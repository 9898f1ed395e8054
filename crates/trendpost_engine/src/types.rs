/// Placeholder used when a trending entry carries no description.
pub const NO_DESCRIPTION: &str = "No description available";
/// Placeholder used when a trending entry carries no language marker.
pub const NO_LANGUAGE: &str = "Not specified";
/// Placeholder used when a trending entry carries no star count.
pub const NO_STARS: &str = "0";

/// One trending repository entry.
///
/// Created by the extractor without a `summary`; the enricher attaches one
/// at most once; read-only afterwards. Extraction order is preserved all the
/// way to the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Slash-qualified repository name, e.g. `rust-lang/rust`.
    pub name: String,
    /// Full repository URL.
    pub url: String,
    pub description: String,
    pub language: String,
    /// Free-form star count as scraped, not guaranteed numeric.
    pub stars: String,
    /// Present only when per-item enrichment succeeded.
    pub summary: Option<String>,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        language: impl Into<String>,
        stars: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
            language: language.into(),
            stars: stars.into(),
            summary: None,
        }
    }
}
