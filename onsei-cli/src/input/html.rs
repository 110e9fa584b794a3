//! Text extraction from HTML documents

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

/// Extract the text of every element whose `class` begins with `class_prefix`
///
/// Matched elements are separated by newlines. When nothing matches, the
/// text of the whole document is returned.
pub fn extract_text(markup: &str, class_prefix: &str) -> Result<String> {
    let selector = Selector::parse(&format!("[class^=\"{class_prefix}\"]"))
        .map_err(|e| anyhow!("Invalid class prefix {class_prefix:?}: {e:?}"))?;
    let document = Html::parse_document(markup);

    let sections: Vec<String> = document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect();

    if sections.is_empty() {
        log::debug!("No element with class prefix {class_prefix}, using whole document");
        return Ok(document.root_element().text().collect());
    }

    Ok(sections.join("\n"))
}
