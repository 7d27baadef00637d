// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::xlsx::export_xlsx;
use crate::models::filter::ViewFilter;
use crate::models::table::Table;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `table` as-is to `path`.
///
/// - `sheet`: worksheet name, only used by XLSX
/// - `force`: overwrite an existing file without asking
///
/// An empty table writes nothing and only warns.
pub fn export_table(
    table: &Table,
    format: ExportFormat,
    path: &Path,
    sheet: &str,
    force: bool,
) -> AppResult<()> {
    if table.is_empty() {
        warning("No rows to export for the selected filters.");
        return Ok(());
    }

    ensure_writable(path, force)?;
    debug!(format = format.as_str(), path = %path.display(), rows = table.len(), "exporting");

    match format {
        ExportFormat::Csv => export_csv(table, path),
        ExportFormat::Json => export_json(table, path),
        ExportFormat::Xlsx => export_xlsx(table, path, sheet),
    }
}

/// `<prefix>_<start>_a_<end>.<ext>`, e.g. `ofs_apr_2024-01-01_a_2024-01-07.xlsx`.
pub fn default_file_name(prefix: &str, filter: &ViewFilter, format: ExportFormat) -> PathBuf {
    PathBuf::from(format!(
        "{prefix}_{}.{}",
        filter.period_slug(),
        format.as_str()
    ))
}
