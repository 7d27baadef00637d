use crate::cli::Session;
use crate::cli::commands::period_label;
use crate::cli::parser::Commands;
use crate::core::teams::{productivity, teams};
use crate::errors::AppResult;
use crate::models::filter::ViewFilter;
use crate::models::overview::TeamStatusCount;
use crate::ui::messages::{header, kpi, no_data, warning};

pub fn handle(cmd: &Commands, session: &Session, filter: &ViewFilter) -> AppResult<()> {
    if let Commands::Teams { team, list } = cmd {
        let table = session.dashboard.team_status_counts(filter)?;
        let counts = TeamStatusCount::from_table(&table)?;

        if counts.is_empty() {
            header(format!("Team productivity ({})", period_label(filter)));
            no_data();
            return Ok(());
        }

        let known = teams(&counts);
        if *list {
            header(format!("Teams ({})", period_label(filter)));
            for t in &known {
                println!("  {t}");
            }
            return Ok(());
        }

        let team = team.as_deref();
        if let Some(t) = team
            && !known.iter().any(|k| k == t)
        {
            warning(format!("Team '{t}' has no activities in this period."));
            return Ok(());
        }

        header(format!(
            "Team productivity: {} ({})",
            team.unwrap_or("all teams"),
            period_label(filter)
        ));
        for c in productivity(&counts, team) {
            kpi(&c.status, c.total);
        }
    }
    Ok(())
}
