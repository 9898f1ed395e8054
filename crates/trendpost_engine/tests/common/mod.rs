//! Shared fixtures: minimal trending-listing markup.

/// One trending row. `None` fields leave the substructure out entirely.
pub fn row(name: &str, desc: Option<&str>, lang: Option<&str>, stars: Option<&str>) -> String {
    let mut row = String::from("<article class=\"Box-row\">");
    row.push_str(&format!("<h2><a href=\"/{name}\">{name}</a></h2>"));
    if let Some(desc) = desc {
        row.push_str(&format!("<p>{desc}</p>"));
    }
    if let Some(lang) = lang {
        row.push_str(&format!(
            "<span itemprop=\"programmingLanguage\">{lang}</span>"
        ));
    }
    if let Some(stars) = stars {
        row.push_str(&format!("<a href=\"/{name}/stargazers\">{stars}</a>"));
    }
    row.push_str("</article>");
    row
}

/// A row with no repository link at all.
pub fn malformed_row() -> String {
    "<article class=\"Box-row\"><p>orphaned description</p></article>".to_string()
}

pub fn page(rows: &[String]) -> String {
    format!("<html><body>{}</body></html>", rows.concat())
}
