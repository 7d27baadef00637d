//! Shift-start analysis: KPIs, per-date summary and composition by region.

use crate::models::activity::ServiceActivity;
use crate::models::composition::Composition;
use crate::models::table::Table;
use crate::utils::formatting::minutes_to_hhmm;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftKpis {
    pub total_resources: usize,
    pub complete_compositions: usize,
    /// `HH:MM`, `None` when no record has a start time.
    pub mean_start: Option<String>,
    pub mean_end: Option<String>,
    /// Mean number of distinct resources per service date.
    pub mean_resources_per_day: Option<f64>,
}

pub fn kpis(records: &[ServiceActivity]) -> ShiftKpis {
    let resources: HashSet<&str> = records.iter().filter_map(|r| r.resource.as_deref()).collect();

    let complete = records
        .iter()
        .filter(|r| r.composition == Composition::Complete)
        .count();

    let per_day = resources_per_day(records);
    let mean_per_day = if per_day.is_empty() {
        None
    } else {
        Some(per_day.values().map(|s| s.len() as f64).sum::<f64>() / per_day.len() as f64)
    };

    ShiftKpis {
        total_resources: resources.len(),
        complete_compositions: complete,
        mean_start: mean_minutes(records.iter().filter_map(|r| r.start_time)).map(minutes_to_hhmm),
        mean_end: mean_minutes(records.iter().filter_map(|r| r.end_time)).map(minutes_to_hhmm),
        mean_resources_per_day: mean_per_day,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateSummary {
    pub date: NaiveDate,
    pub resources: usize,
    pub mean_start: Option<String>,
    pub mean_end: Option<String>,
}

/// One line per service date, ascending.
pub fn by_date(records: &[ServiceActivity]) -> Vec<DateSummary> {
    let mut groups: BTreeMap<NaiveDate, Vec<&ServiceActivity>> = BTreeMap::new();
    for r in records {
        if let Some(d) = r.service_date {
            groups.entry(d).or_default().push(r);
        }
    }

    groups
        .into_iter()
        .map(|(date, rows)| {
            let resources: HashSet<&str> =
                rows.iter().filter_map(|r| r.resource.as_deref()).collect();
            DateSummary {
                date,
                resources: resources.len(),
                mean_start: mean_minutes(rows.iter().filter_map(|r| r.start_time))
                    .map(minutes_to_hhmm),
                mean_end: mean_minutes(rows.iter().filter_map(|r| r.end_time))
                    .map(minutes_to_hhmm),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionComposition {
    pub region: String,
    pub complete: usize,
    pub incomplete: usize,
    pub total: usize,
}

/// Composition counts per region label, sorted by label.
pub fn composition_by_region(records: &[ServiceActivity]) -> Vec<RegionComposition> {
    let mut groups: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for r in records {
        let slot = groups.entry(r.region.as_str()).or_default();
        match r.composition {
            Composition::Complete => slot.0 += 1,
            Composition::Incomplete => slot.1 += 1,
        }
    }

    groups
        .into_iter()
        .map(|(region, (complete, incomplete))| RegionComposition {
            region: region.to_string(),
            complete,
            incomplete,
            total: complete + incomplete,
        })
        .collect()
}

/// Detail-table refinements applied after the fetch.
#[derive(Debug, Clone, Default)]
pub struct ShiftFilter {
    pub composition: Option<Composition>,
    pub resource: Option<String>,
}

impl ShiftFilter {
    pub fn is_empty(&self) -> bool {
        self.composition.is_none() && self.resource.is_none()
    }

    pub fn apply(&self, table: &Table) -> Table {
        table.filtered(|row| {
            let composition_ok = self
                .composition
                .is_none_or(|c| row.text("composicao").as_deref() == Some(c.label()));
            let resource_ok = self
                .resource
                .as_deref()
                .is_none_or(|wanted| row.text("recurso").as_deref() == Some(wanted));
            composition_ok && resource_ok
        })
    }
}

fn resources_per_day(records: &[ServiceActivity]) -> BTreeMap<NaiveDate, BTreeSet<&str>> {
    let mut out: BTreeMap<NaiveDate, BTreeSet<&str>> = BTreeMap::new();
    for r in records {
        if let (Some(d), Some(res)) = (r.service_date, r.resource.as_deref()) {
            out.entry(d).or_default().insert(res);
        }
    }
    out
}

/// Mean minute-of-day (seconds ignored).
fn mean_minutes(times: impl Iterator<Item = NaiveTime>) -> Option<f64> {
    let (sum, count) = times.fold((0u64, 0u64), |(sum, count), t| {
        (sum + (t.hour() * 60 + t.minute()) as u64, count + 1)
    });
    (count > 0).then(|| sum as f64 / count as f64)
}
