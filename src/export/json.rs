use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::table::{Row, Table};
use crate::ui::messages::info;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::path::Path;

/// One object per row, keys in column order.
struct JsonRow<'a>(Row<'a>);

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.0.columns();
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for (column, value) in columns.iter().zip(self.0.values()) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let rows: Vec<JsonRow<'_>> = table.iter().map(JsonRow).collect();
    let json_data = serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    fs::write(path, json_data)?;

    notify_export_success("JSON", table.len(), path);
    Ok(())
}
