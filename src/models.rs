use serde::{Serialize, Deserialize};

/// Sentinel for any field the page does not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// One scraped product page, fully normalized. Every field holds either a
/// real extracted value or [`NOT_AVAILABLE`], never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image_url: String,
    pub source_url: String,
}
