use crate::errors::{AppError, AppResult};
use crate::models::composition::Composition;
use crate::models::region::OTHER_REGION_LABEL;
use crate::models::table::{Row, Table};
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;

/// Activity type that marks the start of a crew's workday.
pub const SHIFT_START_ACTIVITY: &str = "Início de turno";

/// One shift-start record as returned by the shift-start view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceActivity {
    pub activity_type: Option<String>,
    pub service_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub duration: Option<String>,
    pub resource_id: Option<String>,
    pub resource: Option<String>,
    pub vehicle: Option<String>,
    pub lead_id: Option<String>,
    pub auxiliary_ids: Option<String>,
    pub guard_id: Option<String>,
    pub region: String,
    pub composition: Composition,
}

impl ServiceActivity {
    pub fn from_row(row: Row<'_>) -> AppResult<Self> {
        Ok(Self {
            activity_type: row.text("tipo_atividade"),
            service_date: row.get("data_servico").as_date(),
            start_time: row.get("inicio_servico").as_time(),
            end_time: row.get("fim_servico").as_time(),
            duration: row.text("duracao"),
            resource_id: row.text("id_recurso"),
            resource: row.text("recurso"),
            vehicle: row.text("label_veiculo"),
            lead_id: row.text("idmatriculalider"),
            auxiliary_ids: row.text("idmatriculaauxiliares"),
            guard_id: row.text("idmatriculaguarda"),
            region: region_label(row),
            composition: composition(row)?,
        })
    }

    pub fn from_table(table: &Table) -> AppResult<Vec<Self>> {
        table.iter().map(Self::from_row).collect()
    }
}

/// Shift-start record reduced to what the drill-down buckets need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrilldownRecord {
    pub service_date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub resource: Option<String>,
    pub region: String,
    pub composition: Composition,
}

impl DrilldownRecord {
    /// `None` for rows without a service date: they belong to no bucket.
    pub fn from_row(row: Row<'_>) -> AppResult<Option<Self>> {
        let Some(service_date) = row.get("data_servico").as_date() else {
            return Ok(None);
        };

        let part = |name: &str, fallback: i64| row.get(name).as_i64().unwrap_or(fallback);

        Ok(Some(Self {
            service_date,
            year: part("ano", service_date.year() as i64) as i32,
            month: part("mes", service_date.month() as i64) as u32,
            day: part("dia", service_date.day() as i64) as u32,
            resource: row.text("recurso"),
            region: region_label(row),
            composition: composition(row)?,
        }))
    }

    /// Dated records only; undated rows are skipped.
    pub fn from_table(table: &Table) -> AppResult<Vec<Self>> {
        table
            .iter()
            .filter_map(|row| Self::from_row(row).transpose())
            .collect()
    }
}

fn region_label(row: Row<'_>) -> String {
    row.text("regional")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| OTHER_REGION_LABEL.to_string())
}

fn composition(row: Row<'_>) -> AppResult<Composition> {
    let raw = row.text("composicao").unwrap_or_default();
    Composition::from_label(&raw)
        .ok_or_else(|| AppError::Query(format!("unexpected composition value '{raw}'")))
}
