use scraper::{ElementRef, Html, Selector};
use crate::models::{ProductRecord, NOT_AVAILABLE};

/// Extracts a fully-populated [`ProductRecord`] from raw page markup.
///
/// Pure function of its inputs and infallible: any field the page does not
/// carry degrades to `"N/A"` rather than an error. `source_url` is stored
/// verbatim.
pub fn extract_product(html: &str, source_url: &str) -> ProductRecord {
    let doc = Html::parse_document(html);

    // "Product Name | Brand" -> keep everything before the first '|'.
    let title = title_text(&doc)
        .map(|t| t.split('|').next().unwrap_or("").trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.into());

    // Both halves must be present and non-empty; never emit a partial price.
    let price = match (
        meta_content(&doc, r#"meta[property="og:price:amount"]"#),
        meta_content(&doc, r#"meta[property="og:price:currency"]"#),
    ) {
        (Some(amount), Some(currency)) => format!("{} {}", amount, currency),
        _ => NOT_AVAILABLE.into(),
    };

    let image_url = meta_content(&doc, r#"meta[property="og:image:secure_url"]"#)
        .or_else(|| meta_content(&doc, r#"meta[property="og:image"]"#))
        .unwrap_or_else(|| NOT_AVAILABLE.into());

    // A present og:description claims the field even when its content is
    // empty; only a missing tag defers to the plain description meta.
    let description = match first_element(&doc, r#"meta[property="og:description"]"#) {
        Some(el) => content_attr(el),
        None => meta_content(&doc, r#"meta[name="description"]"#),
    }
    .unwrap_or_else(|| NOT_AVAILABLE.into());

    ProductRecord {
        title,
        price,
        description,
        image_url,
        source_url: source_url.to_string(),
    }
}

fn title_text(doc: &Html) -> Option<String> {
    let selector = Selector::parse("title").unwrap();
    doc.select(&selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
}

fn first_element<'a>(doc: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector).next()
}

/// Trimmed `content` attribute, or `None` when missing or empty.
fn content_attr(el: ElementRef<'_>) -> Option<String> {
    el.value()
        .attr("content")
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// Trimmed `content` attribute of the first element matching `selector`,
/// or `None` when the element is missing or its content is empty.
fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    first_element(doc, selector).and_then(content_attr)
}
