use crate::cli::Session;
use crate::cli::commands::{maybe_export, period_label, print_table};
use crate::cli::parser::Commands;
use crate::core::shift::{ShiftFilter, by_date, composition_by_region, kpis};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::activity::ServiceActivity;
use crate::models::filter::ViewFilter;
use crate::ui::messages::{header, kpi, no_data, warning};
use crate::utils::formatting::or_na;
use crate::utils::table::TextTable;

const EXPORT_PREFIX: &str = "inicio_turno";
const EXPORT_SHEET: &str = "Inicio de turno";

pub fn handle(cmd: &Commands, session: &Session, filter: &ViewFilter) -> AppResult<()> {
    if let Commands::ShiftStart {
        composition,
        resource,
        detail,
        export,
    } = cmd
    {
        let table = session.dashboard.shift_start(filter)?;

        header(format!(
            "Shift start ({}, {})",
            period_label(filter),
            filter.region
        ));
        if table.is_empty() {
            no_data();
            return Ok(());
        }

        let records = ServiceActivity::from_table(&table)?;
        let k = kpis(&records);

        kpi("Resources", k.total_resources);
        kpi("Complete compositions", k.complete_compositions);
        kpi("Mean start", or_na(k.mean_start.as_deref()));
        kpi("Mean end", or_na(k.mean_end.as_deref()));
        kpi(
            "Mean resources per day",
            k.mean_resources_per_day
                .map(|m| format!("{m:.1}"))
                .unwrap_or_else(|| or_na(None)),
        );

        header("By date");
        let mut dates = TextTable::new(&["Date", "Resources", "Mean start", "Mean end"]);
        for d in by_date(&records) {
            dates.add_row(vec![
                d.date.to_string(),
                d.resources.to_string(),
                or_na(d.mean_start.as_deref()),
                or_na(d.mean_end.as_deref()),
            ]);
        }
        print!("{}", dates.render());

        header("Composition by region");
        let mut regions = TextTable::new(&["Region", "completa", "incompleta", "Total"]);
        for r in composition_by_region(&records) {
            regions.add_row(vec![
                r.region,
                r.complete.to_string(),
                r.incomplete.to_string(),
                r.total.to_string(),
            ]);
        }
        print!("{}", regions.render());

        let refine = ShiftFilter {
            composition: *composition,
            resource: resource.clone(),
        };
        let rows = if refine.is_empty() {
            (*table).clone()
        } else {
            refine.apply(&table)
        };

        if *detail {
            header(format!("Detail ({} rows)", rows.len()));
            if rows.is_empty() {
                warning("No record matches the composition/resource filter.");
            } else {
                print_table(&rows);
            }
        }

        maybe_export(
            export,
            &rows,
            filter,
            EXPORT_PREFIX,
            EXPORT_SHEET,
            ExportFormat::Csv,
        )?;
    }
    Ok(())
}
