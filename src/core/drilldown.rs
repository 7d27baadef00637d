use crate::models::activity::DrilldownRecord;
use crate::models::composition::Composition;
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;

/// Grouping level of the drill-down chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Level {
    #[default]
    #[value(alias = "dia")]
    Day,
    #[value(alias = "mes")]
    Month,
    #[value(alias = "ano")]
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// `YYYY-MM-DD`, `M/YYYY` or `YYYY`.
    pub label: String,
    pub complete: usize,
    pub incomplete: usize,
    pub total: usize,
}

/// Count compositions per period, in chronological order.
pub fn buckets(records: &[DrilldownRecord], level: Level) -> Vec<Bucket> {
    // (year, month, day) sorts chronologically; unused parts are zero
    let mut groups: BTreeMap<(i32, u32, u32), (usize, usize)> = BTreeMap::new();

    for r in records {
        let key = match level {
            Level::Day => (r.year, r.month, r.day),
            Level::Month => (r.year, r.month, 0),
            Level::Year => (r.year, 0, 0),
        };
        let slot = groups.entry(key).or_default();
        match r.composition {
            Composition::Complete => slot.0 += 1,
            Composition::Incomplete => slot.1 += 1,
        }
    }

    groups
        .into_iter()
        .map(|((y, m, d), (complete, incomplete))| Bucket {
            label: match level {
                Level::Day => format!("{y:04}-{m:02}-{d:02}"),
                Level::Month => format!("{m}/{y}"),
                Level::Year => format!("{y}"),
            },
            complete,
            incomplete,
            total: complete + incomplete,
        })
        .collect()
}
