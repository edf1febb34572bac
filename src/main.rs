use anyhow::{Context, Result};
use shopify_product_scraper::{scrape_product, HttpFetcher};


fn main() -> Result<()> {
    let url = std::env::args()
        .nth(1)
        .context("usage: shopify_product_scraper <product-page-url>")?;

    let fetcher = HttpFetcher::new()?;
    let outcome = scrape_product(&url, &fetcher)?;

    println!("{}", serde_json::to_string_pretty(&outcome.record)?);
    println!("CSV written to {}", outcome.artifact_path.display());
    Ok(())
}
