use crate::cli::Session;
use crate::cli::commands::{maybe_export, period_label, print_table};
use crate::cli::parser::Commands;
use crate::core::filters::ChecklistFilter;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::filter::ViewFilter;
use crate::ui::messages::{header, info, kpi, no_data, warning};

const EXPORT_PREFIX: &str = "ofs_apr";
const EXPORT_SHEET: &str = "Notas APR";

pub fn handle(cmd: &Commands, session: &Session, filter: &ViewFilter) -> AppResult<()> {
    if let Commands::Apr {
        team,
        note,
        detail,
        export,
    } = cmd
    {
        let table = session.dashboard.safety_checklist(filter)?;

        header(format!("Safety checklist notes ({})", period_label(filter)));
        if table.is_empty() {
            no_data();
            return Ok(());
        }

        let refine = ChecklistFilter {
            team: team.clone(),
            note: note.clone(),
        };
        let rows = refine.apply(&table);

        kpi("Answers", rows.len());
        kpi("Distinct notes", rows.distinct_text("Nota").len());
        info(format!("Teams: {}", table.distinct_text("Equipe").join(", ")));

        if rows.is_empty() {
            warning("No answer matches the team/note filter.");
            return Ok(());
        }

        if *detail {
            header(format!("Detail ({} rows)", rows.len()));
            print_table(&rows);
        }

        maybe_export(
            export,
            &rows,
            filter,
            EXPORT_PREFIX,
            EXPORT_SHEET,
            ExportFormat::Xlsx,
        )?;
    }
    Ok(())
}
