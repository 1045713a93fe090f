use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;

use crate::error::FetchError;

/// One manifest row. The MLCQ CSV carries more columns (smell label,
/// severity, reviewer) which are ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleRow {
    pub sample_id: String,
    pub link: String,
}

/// Reads the semicolon-delimited manifest, preserving row order.
pub fn read_rows(path: &Path) -> Result<Vec<SampleRow>, FetchError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b';')
        .from_path(path)
        .map_err(|_| FetchError::ManifestRead(path.to_path_buf()))?;

    let headers = reader
        .headers()
        .map_err(|err| FetchError::ManifestParse(err.to_string()))?;
    for required in ["sample_id", "link"] {
        if !headers.iter().any(|name| name == required) {
            return Err(FetchError::MissingColumn(required.to_string()));
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: SampleRow = record.map_err(|err| FetchError::ManifestParse(err.to_string()))?;
        rows.push(row);
    }
    Ok(rows)
}
