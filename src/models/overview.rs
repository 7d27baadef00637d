use crate::errors::{AppError, AppResult};
use crate::models::table::{Row, Table};
use serde::Serialize;

/// Status of activities shown on the map.
pub const PENDING_STATUS: &str = "pendente";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub total: i64,
}

impl StatusCount {
    pub fn from_table(table: &Table) -> AppResult<Vec<Self>> {
        table
            .iter()
            .map(|row| {
                Ok(Self {
                    status: row.text("status_atividade").unwrap_or_default(),
                    total: total(row)?,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStatusCount {
    pub resource: String,
    pub status: String,
    pub total: i64,
}

impl TeamStatusCount {
    pub fn from_table(table: &Table) -> AppResult<Vec<Self>> {
        table
            .iter()
            .map(|row| {
                Ok(Self {
                    resource: row.text("recurso").unwrap_or_default(),
                    status: row.text("status_atividade").unwrap_or_default(),
                    total: total(row)?,
                })
            })
            .collect()
    }
}

/// Pending activity with coordinates; `lat` is `coordenada_y`, `lon` is `coordenada_x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub activity_id: Option<String>,
    pub resource: Option<String>,
    pub status: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl MapPoint {
    /// Rows whose coordinates do not parse as numbers are skipped.
    pub fn from_table(table: &Table) -> Vec<Self> {
        table
            .iter()
            .filter_map(|row| {
                Some(Self {
                    activity_id: row.text("id_atividade"),
                    resource: row.text("recurso"),
                    status: row.text("status_atividade"),
                    lat: row.get("coordenada_y").as_f64()?,
                    lon: row.get("coordenada_x").as_f64()?,
                })
            })
            .collect()
    }
}

fn total(row: Row<'_>) -> AppResult<i64> {
    row.get("total")
        .as_i64()
        .ok_or_else(|| AppError::Query("count row without a numeric total".into()))
}
