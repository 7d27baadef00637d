use crate::models::table::{Row, Table};
use chrono::NaiveDate;
use serde::Serialize;

/// Equipment type of seals ("Lacre") on equipment notes.
pub const SEAL_EQUIPMENT_TYPE: &str = "Lacre";

/// Key of the seal sub-type inside `dados_json`.
pub const SEAL_SUBTYPE_KEY: &str = "Tipo de Lacre";

/// Service status shown as `EXEC` in the user-status column.
pub const DONE_STATUS: &str = "concluído";

/// Which service note types a lot override applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTypes {
    Any,
    In(&'static [&'static str]),
    NotIn(&'static [&'static str]),
}

/// Fixed lot code used instead of the material code for seal lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotOverride {
    pub subtype: &'static str,
    pub note_types: NoteTypes,
    pub lot: &'static str,
}

const BB_BD: &[&str] = &["BB", "BD"];

/// Evaluated in order; the first matching rule wins, otherwise the material
/// code with leading zeros removed is used.
pub const LOT_OVERRIDES: [LotOverride; 3] = [
    LotOverride {
        subtype: "SELO",
        note_types: NoteTypes::In(BB_BD),
        lot: "391087",
    },
    LotOverride {
        subtype: "SELO",
        note_types: NoteTypes::NotIn(BB_BD),
        lot: "399127",
    },
    LotOverride {
        subtype: "TRAVA",
        note_types: NoteTypes::Any,
        lot: "399108",
    },
];

/// One equipment/material line of a service note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentNote {
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
    pub short_text: Option<String>,
    pub action: Option<String>,
    pub user_status: Option<String>,
    pub note_type: Option<String>,
    pub installation: Option<String>,
    pub lot: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<String>,
    pub serial: Option<String>,
    pub project: Option<String>,
    pub operational_base: String,
}

impl EquipmentNote {
    pub fn from_row(row: Row<'_>) -> Self {
        Self {
            date: row.get("Data").as_date(),
            note: row.text("Nota"),
            short_text: row.text("Texto Breve"),
            action: row.text("Ação"),
            user_status: row.text("Status Usuário"),
            note_type: row.text("Tipo de Nota"),
            installation: row.text("Instalação"),
            lot: row.text("Lote"),
            description: row.text("Descricao"),
            quantity: row.text("Quantidade"),
            serial: row.text("Serial"),
            project: row.text("Projeto"),
            operational_base: row.text("Base Operacional").unwrap_or_default(),
        }
    }

    pub fn from_table(table: &Table) -> Vec<Self> {
        table.iter().map(Self::from_row).collect()
    }
}
