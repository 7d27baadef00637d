pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::core::Dashboard;
use crate::errors::AppResult;
use crate::models::filter::ViewFilter;
use crate::models::region::RegionFilter;
use crate::utils::date::trailing_period;
use chrono::NaiveDate;
use parser::Cli;

/// The global filter flags of one command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterArgs {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub region: Option<RegionFilter>,
    pub all_dates: bool,
}

impl FilterArgs {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            from: cli.from,
            to: cli.to,
            region: cli.region,
            all_dates: cli.all_dates,
        }
    }

    /// Flags given on `line` win over `self`.
    pub fn overlay(self, line: FilterArgs) -> Self {
        Self {
            from: line.from.or(self.from),
            to: line.to.or(self.to),
            region: line.region.or(self.region),
            all_dates: self.all_dates || line.all_dates,
        }
    }

    /// Missing dates default to the `default_days` days up to `today`,
    /// unless `--all-dates` keeps them open.
    pub fn resolve(&self, cfg: &Config, today: NaiveDate) -> AppResult<ViewFilter> {
        let region = self.region.unwrap_or_default();
        if self.all_dates {
            return ViewFilter::new(self.from, self.to, region);
        }

        let end = self.to.unwrap_or(today);
        let start = self
            .from
            .unwrap_or_else(|| trailing_period(end, cfg.default_days).0);
        ViewFilter::new(Some(start), Some(end), region)
    }
}

/// Everything a view handler needs.
pub struct Session<'a> {
    pub cfg: &'a Config,
    pub dashboard: Dashboard,
    /// Global flags given when the process started.
    pub defaults: FilterArgs,
}

impl<'a> Session<'a> {
    pub fn new(cfg: &'a Config, dashboard: Dashboard, defaults: FilterArgs) -> Self {
        Self {
            cfg,
            dashboard,
            defaults,
        }
    }
}
