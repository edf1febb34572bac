use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::error::ScrapeError;
use crate::models::ProductRecord;

/// Suggested filename for every download, regardless of the scraped URL.
pub const DOWNLOAD_FILENAME: &str = "shopify_product.csv";

const CSV_FIELDS: [&str; 5] = ["title", "price", "description", "image_url", "source_url"];

/// Writes the record as a one-row CSV (header + data row) to a uniquely
/// named temp file and returns its path. The write handle is closed before
/// the path is handed out, so the file is fully flushed by the time anyone
/// downloads it. The file itself is kept in temp storage; cleanup is the
/// host's problem, not ours.
pub fn save_to_csv(record: &ProductRecord) -> Result<PathBuf, ScrapeError> {
    let mut file = tempfile::Builder::new()
        .prefix("shopify_product_")
        .suffix(".csv")
        .tempfile()?;

    write_row(&mut file, &CSV_FIELDS)?;
    write_row(&mut file, &[
        record.title.as_str(),
        record.price.as_str(),
        record.description.as_str(),
        record.image_url.as_str(),
        record.source_url.as_str(),
    ])?;
    file.flush()?;

    // keep() closes our handle and disarms the delete-on-drop guard.
    let path = file.into_temp_path().keep().map_err(|e| e.error)?;
    Ok(path)
}

/// Resolves a previously produced artifact for download: an open handle
/// plus the fixed suggested filename. Missing artifacts are a not-found
/// error, never a panic.
pub fn open_artifact(path: &Path) -> Result<(File, &'static str), ScrapeError> {
    let file = File::open(path)
        .map_err(|_| ScrapeError::ArtifactMissing(path.to_path_buf()))?;
    Ok((file, DOWNLOAD_FILENAME))
}

fn write_row<W: Write>(w: &mut W, row: &[&str]) -> std::io::Result<()> {
    let mut first = true;
    for field in row {
        if !first {
            write!(w, ",")?;
        }
        first = false;
        if needs_quotes(field) {
            write!(w, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", field)?;
        }
    }
    writeln!(w)
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}
