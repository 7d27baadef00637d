use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::table::Table;
use crate::ui::messages::info;
use std::path::Path;

/// UTF-8, comma separated, header row first. NULL cells are empty.
pub(crate) fn export_csv(table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = ::csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(table.columns())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for values in table.rows() {
        wtr.write_record(values.iter().map(|v| v.to_string()))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", table.len(), path);
    Ok(())
}
