use std::path::PathBuf;
use crate::archiver;
use crate::error::ScrapeError;
use crate::fetcher::PageFetcher;
use crate::models::ProductRecord;
use crate::parser;

/// Successful scrape: the normalized record plus the CSV artifact written
/// for it.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub record: ProductRecord,
    pub artifact_path: PathBuf,
}

/// Runs the whole flow once: validate, fetch, extract, persist the CSV.
///
/// An empty (after trimming) URL fails before any network call. Fetch
/// failures surface as a single [`ScrapeError::Fetch`] with no artifact
/// produced. Extraction cannot fail.
pub fn scrape_product(url: &str, fetcher: &impl PageFetcher) -> Result<ScrapeOutcome, ScrapeError> {
    scrape_with_archiver(url, fetcher, archiver::save_to_csv)
}

fn scrape_with_archiver(
    url: &str,
    fetcher: &impl PageFetcher,
    archive: impl Fn(&ProductRecord) -> Result<PathBuf, ScrapeError>,
) -> Result<ScrapeOutcome, ScrapeError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ScrapeError::EmptyUrl);
    }

    let html = fetcher.fetch(url)?;
    let record = parser::extract_product(&html, url);
    let artifact_path = archive(&record)?;

    Ok(ScrapeOutcome { record, artifact_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Canned fetcher that counts calls.
    struct FakeFetcher {
        body: Result<String, ()>,
        calls: Cell<usize>,
    }

    impl FakeFetcher {
        fn returning(body: &str) -> Self {
            FakeFetcher { body: Ok(body.into()), calls: Cell::new(0) }
        }

        fn failing() -> Self {
            FakeFetcher { body: Err(()), calls: Cell::new(0) }
        }
    }

    impl PageFetcher for FakeFetcher {
        fn fetch(&self, _url: &str) -> Result<String, ScrapeError> {
            self.calls.set(self.calls.get() + 1);
            self.body
                .clone()
                .map_err(|_| ScrapeError::Fetch("boom".into()))
        }
    }

    const SAMPLE_PAGE: &str = concat!(
        "<html><head>",
        "<title>Red Jacket | BrandX</title>",
        r#"<meta property="og:price:amount" content="49.99">"#,
        r#"<meta property="og:price:currency" content="USD">"#,
        r#"<meta property="og:image:secure_url" content="https://x/img.jpg">"#,
        r#"<meta property="og:description" content="A jacket">"#,
        "</head><body></body></html>",
    );

    #[test]
    fn empty_url_fails_without_fetching() {
        let fetcher = FakeFetcher::returning(SAMPLE_PAGE);
        let err = scrape_product("   ", &fetcher).unwrap_err();
        assert!(matches!(err, ScrapeError::EmptyUrl));
        assert_eq!(fetcher.calls.get(), 0);
    }

    #[test]
    fn fetch_failure_is_surfaced_unchanged() {
        let fetcher = FakeFetcher::failing();
        let err = scrape_product("https://shop.example/p", &fetcher).unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch(_)));
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn fetch_failure_writes_no_artifact() {
        let fetcher = FakeFetcher::failing();
        let archived = Cell::new(0);

        let err = scrape_with_archiver("https://shop.example/p", &fetcher, |record| {
            archived.set(archived.get() + 1);
            crate::archiver::save_to_csv(record)
        })
        .unwrap_err();

        assert!(matches!(err, ScrapeError::Fetch(_)));
        assert_eq!(archived.get(), 0);
    }

    #[test]
    fn url_is_trimmed_before_use() {
        let fetcher = FakeFetcher::returning(SAMPLE_PAGE);
        let outcome = scrape_product("  https://shop.example/p  ", &fetcher).unwrap();
        assert_eq!(outcome.record.source_url, "https://shop.example/p");
        std::fs::remove_file(outcome.artifact_path).unwrap();
    }

    #[test]
    fn scrape_writes_record_and_artifact() {
        let fetcher = FakeFetcher::returning(SAMPLE_PAGE);
        let outcome = scrape_product("https://shop.example/red-jacket", &fetcher).unwrap();

        assert_eq!(outcome.record.title, "Red Jacket");
        assert_eq!(outcome.record.price, "49.99 USD");
        assert_eq!(outcome.record.description, "A jacket");
        assert_eq!(outcome.record.image_url, "https://x/img.jpg");
        assert_eq!(outcome.record.source_url, "https://shop.example/red-jacket");

        let contents = std::fs::read_to_string(&outcome.artifact_path).unwrap();
        assert_eq!(
            contents,
            "title,price,description,image_url,source_url\n\
             Red Jacket,49.99 USD,A jacket,https://x/img.jpg,https://shop.example/red-jacket\n"
        );
        std::fs::remove_file(outcome.artifact_path).unwrap();
    }

    #[test]
    fn http_error_status_produces_fetch_error_end_to_end() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/p").with_status(500).create();

        let fetcher = crate::fetcher::HttpFetcher::new().unwrap();
        let err = scrape_product(&format!("{}/p", server.url()), &fetcher).unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch(_)));
    }

    #[test]
    fn live_fetch_end_to_end() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/red-jacket")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(SAMPLE_PAGE)
            .create();

        let fetcher = crate::fetcher::HttpFetcher::new().unwrap();
        let url = format!("{}/red-jacket", server.url());
        let outcome = scrape_product(&url, &fetcher).unwrap();

        assert_eq!(outcome.record.title, "Red Jacket");
        assert_eq!(outcome.record.source_url, url);

        let (file, filename) = crate::archiver::open_artifact(&outcome.artifact_path).unwrap();
        assert_eq!(filename, "shopify_product.csv");
        drop(file);
        std::fs::remove_file(outcome.artifact_path).unwrap();
    }
}
