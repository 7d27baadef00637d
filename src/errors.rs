//! Unified application error type.
//! Every layer (db, cache, core, export, cli) returns AppError so the
//! presentation can tell a failed query apart from an empty result.

use std::io;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    /// The data source could not be built or a connection could not be
    /// acquired (bad credentials, unreachable host, missing snapshot file).
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// The statement reached the database but failed to execute or decode.
    #[error("Query failed: {0}")]
    Query(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Unknown region: {0} (expected Todas, Barra do Piraí, Volta Redonda or Três Rios)")]
    InvalidRegion(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for failures that mean "the data could not be read", as opposed
    /// to user input or local I/O problems.
    pub fn is_data_failure(&self) -> bool {
        matches!(self, AppError::Connection(_) | AppError::Query(_))
    }
}

/// Cache loaders hand their error back behind an `Arc` shared with every
/// caller that waited on the same miss.
impl From<Arc<AppError>> for AppError {
    fn from(shared: Arc<AppError>) -> Self {
        Arc::try_unwrap(shared).unwrap_or_else(|shared| match &*shared {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Connection(m) => AppError::Connection(m.clone()),
            AppError::Query(m) => AppError::Query(m.clone()),
            AppError::InvalidDate(m) => AppError::InvalidDate(m.clone()),
            AppError::InvalidPeriod(m) => AppError::InvalidPeriod(m.clone()),
            AppError::InvalidRegion(m) => AppError::InvalidRegion(m.clone()),
            AppError::InvalidCommand(m) => AppError::InvalidCommand(m.clone()),
            AppError::Config(m) => AppError::Config(m.clone()),
            AppError::Export(m) => AppError::Export(m.clone()),
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;
