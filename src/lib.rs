//! Scrapes a single Shopify product page into a normalized record and a
//! one-row CSV artifact. The host surface (CLI here, a web framework
//! elsewhere) mounts [`handler::scrape_product`] and
//! [`archiver::open_artifact`]; everything else is plumbing.

pub mod archiver;
pub mod error;
pub mod fetcher;
pub mod handler;
pub mod models;
pub mod parser;

pub use archiver::{open_artifact, DOWNLOAD_FILENAME};
pub use error::ScrapeError;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use handler::{scrape_product, ScrapeOutcome};
pub use models::ProductRecord;
