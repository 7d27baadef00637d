use crate::errors::AppError;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_CYAN: &str = "\x1b[36m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}{ICON_INFO}{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{FG_GREEN}{BOLD}{ICON_OK}{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{FG_YELLOW}{BOLD}{ICON_WARN}{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{FG_RED}{BOLD}{ICON_ERR}{RESET} {msg}");
}

/// Section header of a view.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{FG_BLUE}{BOLD}=== {msg} ==={RESET}");
}

/// One KPI line: `label ........ value`.
pub fn kpi<L: fmt::Display, V: fmt::Display>(label: L, value: V) {
    println!("  {:<28} {FG_CYAN}{BOLD}{value}{RESET}", label.to_string());
}

/// Shown when a view ran fine and matched nothing.
pub fn no_data() {
    warning("No data found for the selected filters.");
}

/// Shown when a view could not be read at all; kept distinct from [`no_data`].
pub fn data_failure(err: &AppError) {
    match err {
        AppError::Connection(_) => error(format!("{err}. Check DB_* settings, then `refresh`.")),
        _ => error(err),
    }
}
