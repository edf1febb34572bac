use std::path::PathBuf;
use thiserror::Error;

/// Everything the scrape and download operations can fail with. Extraction
/// itself never fails; missing fields degrade to `"N/A"` instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The submitted URL was empty after trimming.
    #[error("Please enter a product URL.")]
    EmptyUrl,

    /// Network failure, timeout, or non-success HTTP status.
    #[error("Failed to load page: {0}")]
    Fetch(String),

    /// Writing the CSV artifact failed.
    #[error("Failed to write CSV artifact: {0}")]
    Artifact(#[from] std::io::Error),

    /// Download of an artifact that no longer exists.
    #[error("File not found: {}", .0.display())]
    ArtifactMissing(PathBuf),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Fetch(err.to_string())
    }
}
