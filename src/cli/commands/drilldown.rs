use crate::cli::Session;
use crate::cli::commands::period_label;
use crate::cli::parser::Commands;
use crate::core::drilldown::buckets;
use crate::errors::AppResult;
use crate::models::activity::DrilldownRecord;
use crate::models::filter::ViewFilter;
use crate::ui::messages::{header, info, no_data};
use crate::utils::table::TextTable;

pub fn handle(cmd: &Commands, session: &Session, filter: &ViewFilter) -> AppResult<()> {
    if let Commands::Drilldown { level } = cmd {
        let table = session.dashboard.drilldown(filter)?;

        header(format!(
            "Compositions by {:?} ({}, {})",
            level,
            period_label(filter),
            filter.region
        ));
        if table.is_empty() {
            no_data();
            return Ok(());
        }

        let records = DrilldownRecord::from_table(&table)?;
        let undated = table.len() - records.len();
        if undated > 0 {
            info(format!("{undated} row(s) without a service date left out."));
        }
        let mut out = TextTable::new(&["Period", "completa", "incompleta", "Total"]);
        for b in buckets(&records, *level) {
            out.add_row(vec![
                b.label,
                b.complete.to_string(),
                b.incomplete.to_string(),
                b.total.to_string(),
            ]);
        }
        print!("{}", out.render());
    }
    Ok(())
}
