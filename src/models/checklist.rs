use crate::models::table::Row;
use chrono::NaiveDate;
use serde::Serialize;

/// One question/answer pair of a safety checklist (APR) note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyChecklistAnswer {
    pub date: Option<NaiveDate>,
    pub team: Option<String>,
    pub note: Option<String>,
    pub question_number: Option<String>,
    pub question: Option<String>,
    pub item_number: Option<String>,
    pub item: Option<String>,
    pub answer: Option<String>,
}

impl SafetyChecklistAnswer {
    pub fn from_row(row: Row<'_>) -> Self {
        Self {
            date: row.get("Data").as_date(),
            team: row.text("Equipe"),
            note: row.text("Nota"),
            question_number: row.text("Nº Pergunta"),
            question: row.text("Pergunta"),
            item_number: row.text("Nº Item"),
            item: row.text("Item"),
            answer: row.text("Resposta"),
        }
    }
}
