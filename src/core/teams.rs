use crate::models::overview::{MapPoint, StatusCount, TeamStatusCount};
use std::collections::BTreeMap;

/// Sorted, de-duplicated team codes.
pub fn teams(counts: &[TeamStatusCount]) -> Vec<String> {
    let mut out: Vec<String> = counts.iter().map(|c| c.resource.clone()).collect();
    out.sort();
    out.dedup();
    out
}

/// Per-status totals of one team, or summed over every team when `team`
/// is `None`. Sorted by status.
pub fn productivity(counts: &[TeamStatusCount], team: Option<&str>) -> Vec<StatusCount> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for c in counts {
        if team.is_none_or(|t| c.resource == t) {
            *totals.entry(c.status.as_str()).or_default() += c.total;
        }
    }

    totals
        .into_iter()
        .map(|(status, total)| StatusCount {
            status: status.to_string(),
            total,
        })
        .collect()
}

/// Map points of one team, or all of them.
pub fn points_for_team<'a>(points: &'a [MapPoint], team: Option<&str>) -> Vec<&'a MapPoint> {
    points
        .iter()
        .filter(|p| team.is_none_or(|t| p.resource.as_deref() == Some(t)))
        .collect()
}
