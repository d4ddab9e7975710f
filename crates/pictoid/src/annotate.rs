//! File-level annotation: read, validate, stamp ids, write.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::document::Document;
use crate::error::{Error, Result};

/// Default picto list location, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "src/assets/pictos_list.json";

/// Stamp sequential ids onto every record in `source` and write the result.
///
/// The result goes to `destination`, or back over `source` when `None`.
/// Shape problems are detected before anything is written. The write itself
/// truncates and replaces the destination in place, so an I/O failure part
/// way through can leave it partially written.
///
/// Returns the number of records processed.
///
/// # Errors
///
/// Returns an error if the source cannot be read or parsed, is not a list of
/// objects, or the destination cannot be written.
pub fn annotate(source: impl AsRef<Path>, destination: Option<&Path>) -> Result<usize> {
    let source = source.as_ref();
    let destination = destination.unwrap_or(source);

    let mut document = load(source)?;
    let count = document.assign_ids();
    let rendered = document.to_pretty_json()?;

    debug!(
        "Writing {} bytes to {}",
        rendered.len(),
        destination.display()
    );
    fs::write(destination, rendered).map_err(|source| Error::Write {
        path: destination.to_path_buf(),
        source,
    })?;

    debug!(count, "annotated {}", destination.display());
    Ok(count)
}

/// Validate `source` without writing anything.
///
/// Returns the number of records that [`annotate`] would stamp.
///
/// # Errors
///
/// Returns an error if the source cannot be read or parsed, or is not a list
/// of objects.
pub fn check(source: impl AsRef<Path>) -> Result<usize> {
    load(source.as_ref()).map(|document| document.len())
}

fn load(path: &Path) -> Result<Document> {
    debug!("Reading {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Document::from_value(value)
}
