//! Local refinements applied to already fetched tables.
//!
//! These never reach the database: they narrow a cached result the way the
//! per-view filter widgets do.

use crate::models::checklist::SafetyChecklistAnswer;
use crate::errors::AppResult;
use crate::models::equipment::EquipmentNote;
use crate::models::filter::ViewFilter;
use crate::models::region::RegionFilter;
use crate::models::table::Table;
use chrono::NaiveDate;

/// Split a free-text list on commas, semicolons and whitespace.
///
/// `"123, 456;789 0001"` → `["123", "456", "789", "0001"]`
pub fn parse_multi_filter(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Equipment-notes refinements. Empty lists match everything.
#[derive(Debug, Clone, Default)]
pub struct EquipmentFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub notes: Vec<String>,
    pub lots: Vec<String>,
    pub serials: Vec<String>,
    pub bases: Vec<String>,
    pub actions: Vec<String>,
}

impl EquipmentFilter {
    pub fn matches(&self, note: &EquipmentNote) -> bool {
        // rows without a date are dropped as soon as a date bound is set
        let date_ok = match (note.date, self.from, self.to) {
            (_, None, None) => true,
            (None, _, _) => false,
            (Some(d), from, to) => from.is_none_or(|f| d >= f) && to.is_none_or(|t| d <= t),
        };

        date_ok
            && one_of(&self.notes, note.note.as_deref())
            && one_of(&self.lots, note.lot.as_deref())
            && one_of(&self.serials, note.serial.as_deref())
            && one_of(&self.bases, Some(note.operational_base.as_str()))
            && one_of_any_case(&self.actions, note.action.as_deref())
    }

    /// Period the exported rows cover: the local window where set, the
    /// fetched period otherwise.
    pub fn export_period(&self, fetched: &ViewFilter) -> AppResult<ViewFilter> {
        ViewFilter::new(
            self.from.or(fetched.start),
            self.to.or(fetched.end),
            RegionFilter::All,
        )
    }

    pub fn apply(&self, table: &Table) -> Table {
        table.filtered(|row| self.matches(&EquipmentNote::from_row(row)))
    }
}

/// Safety-checklist refinements: one team and/or one exact note number.
#[derive(Debug, Clone, Default)]
pub struct ChecklistFilter {
    pub team: Option<String>,
    pub note: Option<String>,
}

impl ChecklistFilter {
    pub fn matches(&self, answer: &SafetyChecklistAnswer) -> bool {
        let team_ok = self
            .team
            .as_deref()
            .is_none_or(|t| answer.team.as_deref() == Some(t));
        let note_ok = self
            .note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .is_none_or(|n| answer.note.as_deref() == Some(n));
        team_ok && note_ok
    }

    pub fn apply(&self, table: &Table) -> Table {
        table.filtered(|row| self.matches(&SafetyChecklistAnswer::from_row(row)))
    }
}

fn one_of(wanted: &[String], value: Option<&str>) -> bool {
    wanted.is_empty() || value.is_some_and(|v| wanted.iter().any(|w| w == v))
}

fn one_of_any_case(wanted: &[String], value: Option<&str>) -> bool {
    wanted.is_empty()
        || value.is_some_and(|v| {
            let v = v.to_lowercase();
            wanted.iter().any(|w| w.to_lowercase() == v)
        })
}
