// src/file.rs
//
// Export: items → CSV / JSON / Excel (TSV) text, and onto disk.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::rows_to_string;
use crate::data::{ParsedItem, ITEM_HEADERS};
use crate::error::{Result, ScrapeError};

/// Render `items` in `format`. Empty input is an error so callers can
/// surface "No data to export" instead of writing an empty file.
pub fn to_export_string(
    items: &[ParsedItem],
    format: ExportFormat,
    include_headers: bool,
) -> Result<String> {
    if items.is_empty() {
        return Err(ScrapeError::NothingToExport);
    }

    match format.delim() {
        None => Ok(serde_json::to_string_pretty(items)?),
        Some(sep) => {
            let rows: Vec<Vec<String>> = items.iter().map(|it| it.cells().to_vec()).collect();
            let headers = include_headers.then_some(&ITEM_HEADERS[..]);
            Ok(rows_to_string(headers, &rows, sep))
        }
    }
}

/// Write `items` to `path` according to `export`. Returns the path written.
pub fn write_export(
    path: &Path,
    export: &ExportOptions,
    items: &[ParsedItem],
) -> std::result::Result<PathBuf, Box<dyn Error>> {
    let contents = to_export_string(items, export.format, export.include_headers)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(path, contents)?;
    logf!(
        "Export: {} items → {} ({})",
        items.len(),
        path.display(),
        export.format.mime()
    );
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> std::result::Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
