use std::time::Duration;
use reqwest::blocking::Client;
use crate::error::ScrapeError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Seam for the outbound page fetch, so the handler can be exercised
/// without a network.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// The real fetcher: one GET per call, fixed timeout, browser User-Agent,
/// no retries. Non-success statuses are errors.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let text = self.client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(text)
    }
}
