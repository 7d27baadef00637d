pub mod apr;
pub mod config;
pub mod drilldown;
pub mod equipment;
pub mod interactive;
pub mod map;
pub mod shift_start;
pub mod status;
pub mod teams;

use crate::cli::Session;
use crate::cli::parser::{Commands, ExportArgs};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, default_file_name, export_table};
use crate::models::filter::ViewFilter;
use crate::models::table::Table;
use crate::utils::table::TextTable;
use chrono::NaiveDate;

/// Run one view command against the session's dashboard.
pub fn run_view(cmd: &Commands, session: &Session, filter: &ViewFilter) -> AppResult<()> {
    match cmd {
        Commands::Status => status::handle(session, filter),
        Commands::Teams { .. } => teams::handle(cmd, session, filter),
        Commands::ShiftStart { .. } => shift_start::handle(cmd, session, filter),
        Commands::Drilldown { .. } => drilldown::handle(cmd, session, filter),
        Commands::Map { .. } => map::handle(cmd, session, filter),
        Commands::Equipment { .. } => equipment::handle(cmd, session, filter),
        Commands::Apr { .. } => apr::handle(cmd, session, filter),
        Commands::Interactive | Commands::Config { .. } => Err(AppError::InvalidCommand(
            "not a view command".to_string(),
        )),
    }
}

/// `2024-01-01 → 2024-01-07`; open sides show as `…`.
pub(crate) fn period_label(filter: &ViewFilter) -> String {
    let side = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "…".into());
    format!("{} → {}", side(filter.start), side(filter.end))
}

pub(crate) fn print_table(table: &Table) {
    print!("{}", TextTable::from(table).render());
}

/// Export `table` when the user asked for it.
pub(crate) fn maybe_export(
    args: &ExportArgs,
    table: &Table,
    filter: &ViewFilter,
    prefix: &str,
    sheet: &str,
    fallback: ExportFormat,
) -> AppResult<()> {
    if !args.requested() {
        return Ok(());
    }

    let format = args.resolve_format(fallback);
    let path = args
        .file
        .clone()
        .unwrap_or_else(|| default_file_name(prefix, filter, format));
    export_table(table, format, &path, sheet, args.force)
}
