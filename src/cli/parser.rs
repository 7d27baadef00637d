use crate::core::drilldown::Level;
use crate::export::ExportFormat;
use crate::models::composition::Composition;
use crate::models::region::RegionFilter;
use crate::utils::date::parse_date_arg;
use crate::utils::path::user_path;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for servdash
/// Read-only dashboard over the field-service activity database
#[derive(Parser, Debug)]
#[command(
    name = "servdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Field-service dashboard: shift starts, activity status, equipment and safety checklist notes",
    long_about = None
)]
pub struct Cli {
    /// Read from a local SQLite snapshot instead of PostgreSQL
    #[arg(global = true, long = "sqlite", value_name = "FILE", value_parser = user_path)]
    pub sqlite: Option<PathBuf>,

    /// First service date (YYYY-MM-DD), inclusive
    #[arg(global = true, long = "from", value_name = "DATE", value_parser = parse_date_arg)]
    pub from: Option<NaiveDate>,

    /// Last service date (YYYY-MM-DD), inclusive
    #[arg(global = true, long = "to", value_name = "DATE", value_parser = parse_date_arg)]
    pub to: Option<NaiveDate>,

    /// Regional filter: Todas, Barra do Piraí, Volta Redonda, Três Rios (or BP/VR/TR)
    #[arg(global = true, long = "region", value_name = "REGION")]
    pub region: Option<RegionFilter>,

    /// Do not apply the default period: dates not given stay unbounded
    #[arg(global = true, long = "all-dates")]
    pub all_dates: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Activity totals per status
    Status,

    /// Per-status totals of one team (or all teams)
    Teams {
        /// Team (resource) code; omit for the sum over all teams
        #[arg(long)]
        team: Option<String>,

        /// Only list the team codes
        #[arg(long)]
        list: bool,
    },

    /// Shift-start analysis: KPIs, per-date summary, composition by region
    #[command(name = "shift-start", alias = "turno")]
    ShiftStart {
        /// Keep only this crew composition in the detail/export
        #[arg(long, value_enum)]
        composition: Option<Composition>,

        /// Keep only this resource in the detail/export
        #[arg(long)]
        resource: Option<String>,

        /// Print the detail table
        #[arg(long)]
        detail: bool,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Complete/incomplete compositions per day, month or year
    Drilldown {
        #[arg(long, value_enum, default_value_t = Level::Day)]
        level: Level,
    },

    /// Pending activities with coordinates
    Map {
        /// Team (resource) code
        #[arg(long)]
        team: Option<String>,
    },

    /// Equipment/material lines of service notes
    Equipment {
        /// Local date window start (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
        since: Option<NaiveDate>,

        /// Local date window end (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
        until: Option<NaiveDate>,

        /// Note numbers, separated by comma, semicolon or spaces
        #[arg(long, value_name = "LIST")]
        notes: Option<String>,

        /// Lot codes, separated by comma, semicolon or spaces
        #[arg(long, value_name = "LIST")]
        lots: Option<String>,

        /// Serial numbers, separated by comma, semicolon or spaces
        #[arg(long, value_name = "LIST")]
        serials: Option<String>,

        /// Operational base (repeatable)
        #[arg(long = "base", value_name = "BASE")]
        bases: Vec<String>,

        /// Action, as listed under "Actions" (repeatable, any case)
        #[arg(long = "action", value_name = "ACTION")]
        actions: Vec<String>,

        /// Print the detail table
        #[arg(long)]
        detail: bool,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Safety checklist (APR) answers
    Apr {
        /// Team code
        #[arg(long)]
        team: Option<String>,

        /// Exact note number
        #[arg(long)]
        note: Option<String>,

        /// Print the detail table
        #[arg(long)]
        detail: bool,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Prompt loop running one view command per line; results are cached
    Interactive,

    /// Show the configuration and check the database settings
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration and the DB_* environment variables"
        )]
        check: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Write the (filtered) table to a file
    #[arg(long)]
    pub export: bool,

    /// Output file; implies --export. Defaults to <view>_<start>_a_<end>.<ext>
    #[arg(long, value_name = "FILE", value_parser = user_path)]
    pub file: Option<PathBuf>,

    /// Output format; defaults to the file extension, then to the view's format
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Overwrite an existing file without asking
    #[arg(long)]
    pub force: bool,
}

impl ExportArgs {
    pub fn requested(&self) -> bool {
        self.export || self.file.is_some()
    }

    pub fn resolve_format(&self, fallback: ExportFormat) -> ExportFormat {
        self.format
            .or_else(|| self.file.as_deref().and_then(ExportFormat::from_path))
            .unwrap_or(fallback)
    }
}
