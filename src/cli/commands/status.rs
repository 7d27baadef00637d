use crate::cli::Session;
use crate::cli::commands::period_label;
use crate::errors::AppResult;
use crate::models::filter::ViewFilter;
use crate::models::overview::StatusCount;
use crate::ui::messages::{header, kpi, no_data};

/// Handle the `status` view. The regional filter does not apply here.
pub fn handle(session: &Session, filter: &ViewFilter) -> AppResult<()> {
    let table = session.dashboard.status_counts(filter)?;
    let counts = StatusCount::from_table(&table)?;

    header(format!("Activity status ({})", period_label(filter)));
    if counts.is_empty() {
        no_data();
        return Ok(());
    }

    for c in &counts {
        kpi(&c.status, c.total);
    }
    kpi("Total", counts.iter().map(|c| c.total).sum::<i64>());
    Ok(())
}
