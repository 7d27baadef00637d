use crate::cli::Session;
use crate::cli::commands::{maybe_export, period_label, print_table};
use crate::cli::parser::Commands;
use crate::core::filters::{EquipmentFilter, parse_multi_filter};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::filter::ViewFilter;
use crate::ui::messages::{header, info, kpi, no_data, warning};

const EXPORT_PREFIX: &str = "ofs_equipamentos";
const EXPORT_SHEET: &str = "Dados";

pub fn handle(cmd: &Commands, session: &Session, filter: &ViewFilter) -> AppResult<()> {
    if let Commands::Equipment {
        since,
        until,
        notes,
        lots,
        serials,
        bases,
        actions,
        detail,
        export,
    } = cmd
    {
        let table = session.dashboard.equipment_notes(filter)?;

        header(format!("Equipment notes ({})", period_label(filter)));
        if table.is_empty() {
            no_data();
            return Ok(());
        }

        let list = |raw: &Option<String>| raw.as_deref().map(parse_multi_filter).unwrap_or_default();
        let refine = EquipmentFilter {
            from: *since,
            to: *until,
            notes: list(notes),
            lots: list(lots),
            serials: list(serials),
            bases: bases.clone(),
            actions: actions.clone(),
        };
        let rows = refine.apply(&table);

        kpi("Rows", rows.len());
        kpi("Distinct notes", rows.distinct_text("Nota").len());
        info(format!(
            "Bases: {}",
            table.distinct_text("Base Operacional").join(", ")
        ));
        info(format!("Actions: {}", table.distinct_text("Ação").join(", ")));

        if rows.is_empty() {
            warning("No line matches the local filters.");
            return Ok(());
        }

        if *detail {
            header(format!("Detail ({} rows)", rows.len()));
            print_table(&rows);
        }

        maybe_export(
            export,
            &rows,
            &refine.export_period(filter)?,
            EXPORT_PREFIX,
            EXPORT_SHEET,
            ExportFormat::Xlsx,
        )?;
    }
    Ok(())
}
