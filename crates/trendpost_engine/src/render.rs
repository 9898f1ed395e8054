use chrono::{DateTime, Local};

use crate::types::Item;

/// Builds the HTML report for one run.
///
/// Pure: identical items, batch summary and clock give identical output.
/// Every scraped or generated text field is escaped before it is embedded.
pub fn render_report(
    items: &[Item],
    batch_summary: Option<&str>,
    generated_at: DateTime<Local>,
) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(CSS_STYLE);
    html.push_str("</head>\n<body>\n<div class=\"container\">\n");

    html.push_str("<div class=\"header\">\n<h1>📈 GitHub Trending Report</h1>\n");
    html.push_str(&format!(
        "<div class=\"date\">{}</div>\n</div>\n",
        generated_at.format("%B %d, %Y")
    ));

    if let Some(summary) = batch_summary {
        html.push_str("<div class=\"ai-summary\">\n<h2>🤖 AI Insights</h2>\n<p>");
        html.push_str(&escape_html(summary).replace('\n', "<br>"));
        html.push_str("</p>\n</div>\n");
    }

    for item in items {
        html.push_str(&render_card(item));
    }

    html.push_str(FOOTER);
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_card(item: &Item) -> String {
    let summary_block = match &item.summary {
        Some(summary) => format!(
            "<div class=\"repo-summary\">{}</div>\n",
            escape_html(summary).replace('\n', "<br>")
        ),
        None => String::new(),
    };

    format!(
        "<div class=\"repo-card\">\n\
         <h3 class=\"repo-title\"><a href=\"{url}\">{name}</a></h3>\n\
         <p class=\"repo-description\">{description}</p>\n\
         {summary_block}\
         <div class=\"stats\">\n\
         <div class=\"stat-item\"><span>🔤</span><span>{language}</span></div>\n\
         <div class=\"stat-item\"><span>⭐</span><span>{stars}</span></div>\n\
         </div>\n\
         </div>\n",
        url = escape_html(&item.url),
        name = escape_html(&item.name),
        description = escape_html(&item.description),
        language = escape_html(&item.language),
        stars = escape_html(&item.stars),
    )
}

/// Escapes text for embedding into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const FOOTER: &str = "<div class=\"footer\">\n\
    <div class=\"app-signature\">\n\
    Generated by GitHub Trending Mailer • Stay updated with the latest trends\n\
    </div>\n\
    </div>\n";

const CSS_STYLE: &str = r#"<style>
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
        line-height: 1.6;
        max-width: 800px;
        margin: 0 auto;
        padding: 20px;
        background-color: #f6f8fa;
        color: #24292e;
    }
    .container {
        background-color: white;
        border-radius: 8px;
        box-shadow: 0 1px 3px rgba(0,0,0,0.12), 0 1px 2px rgba(0,0,0,0.24);
        padding: 25px;
        margin: 20px 0;
    }
    .header {
        text-align: center;
        padding-bottom: 20px;
        border-bottom: 2px solid #e1e4e8;
        margin-bottom: 25px;
    }
    h1 {
        color: #24292e;
        font-size: 24px;
        margin: 0;
        padding: 0;
    }
    .date {
        color: #586069;
        font-size: 16px;
        margin-top: 8px;
    }
    .ai-summary {
        background-color: #f1f8ff;
        border: 1px solid #c8e1ff;
        border-radius: 6px;
        padding: 16px;
        margin: 20px 0;
    }
    .ai-summary h2 {
        color: #0366d6;
        font-size: 18px;
        margin-top: 0;
        margin-bottom: 12px;
    }
    .repo-card {
        border: 1px solid #e1e4e8;
        border-radius: 8px;
        padding: 20px;
        margin: 20px 0;
        background-color: white;
    }
    .repo-title {
        font-size: 20px;
        font-weight: 600;
        margin: 0 0 12px 0;
    }
    .repo-title a {
        color: #0366d6;
        text-decoration: none;
    }
    .repo-description {
        color: #586069;
        margin: 8px 0 16px 0;
        font-size: 14px;
        line-height: 1.5;
    }
    .repo-summary {
        background-color: #f6f8fa;
        border: 1px solid #e1e4e8;
        border-radius: 6px;
        padding: 16px;
        margin: 16px 0;
        font-size: 14px;
        line-height: 1.6;
        color: #24292e;
    }
    .stats {
        display: flex;
        align-items: center;
        gap: 16px;
        margin-top: 16px;
        color: #586069;
        font-size: 14px;
    }
    .stat-item {
        display: flex;
        align-items: center;
        gap: 4px;
    }
    .footer {
        text-align: center;
        margin-top: 40px;
        padding-top: 30px;
        border-top: 1px solid #e1e4e8;
        color: #586069;
    }
    .app-signature {
        margin-bottom: 20px;
        color: #24292e;
        font-size: 15px;
    }
</style>
"#;
