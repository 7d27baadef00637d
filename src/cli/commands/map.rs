use crate::cli::Session;
use crate::cli::commands::period_label;
use crate::cli::parser::Commands;
use crate::core::teams::points_for_team;
use crate::errors::AppResult;
use crate::models::filter::ViewFilter;
use crate::models::overview::MapPoint;
use crate::ui::messages::{header, info, no_data};
use crate::utils::formatting::or_na;
use crate::utils::table::TextTable;

pub fn handle(cmd: &Commands, session: &Session, filter: &ViewFilter) -> AppResult<()> {
    if let Commands::Map { team } = cmd {
        let table = session.dashboard.map_points(filter)?;
        let points = MapPoint::from_table(&table);
        let shown = points_for_team(&points, team.as_deref());

        header(format!(
            "Pending activities: {} ({})",
            team.as_deref().unwrap_or("all teams"),
            period_label(filter)
        ));
        if shown.is_empty() {
            no_data();
            return Ok(());
        }

        let mut out = TextTable::new(&["Activity", "Team", "Status", "Lat", "Lon"]);
        for p in &shown {
            out.add_row(vec![
                or_na(p.activity_id.as_deref()),
                or_na(p.resource.as_deref()),
                or_na(p.status.as_deref()),
                format!("{:.6}", p.lat),
                format!("{:.6}", p.lon),
            ]);
        }
        print!("{}", out.render());

        let skipped = table.len() - points.len();
        if skipped > 0 {
            info(format!("{skipped} activities skipped: coordinates are not numeric."));
        }
    }
    Ok(())
}
