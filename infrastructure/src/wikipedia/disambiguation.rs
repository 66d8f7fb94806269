//! Option extraction from rendered disambiguation pages

use scraper::{ElementRef, Html, Selector};

/// Collect the text of the first link in every list item, in document order.
///
/// Table-of-contents entries (`tocsection-*` classes) are skipped, as are
/// list items without a link.
pub(crate) fn disambiguation_options(html: &str) -> Result<Vec<String>, String> {
    let document = Html::parse_fragment(html);
    let item_selector = Selector::parse("li").map_err(|e| e.to_string())?;
    let link_selector = Selector::parse("a").map_err(|e| e.to_string())?;

    let options = document
        .select(&item_selector)
        .filter(|li| !is_toc_entry(li))
        .filter_map(|li| li.select(&link_selector).next())
        .map(|a| a.text().collect::<String>())
        .filter(|text| !text.trim().is_empty())
        .collect();

    Ok(options)
}

fn is_toc_entry(li: &ElementRef<'_>) -> bool {
    li.value().classes().any(|c| c.contains("tocsection"))
}
