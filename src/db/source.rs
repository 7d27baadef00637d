use crate::config::{Config, DbSettings};
use crate::db::dialect::Dialect;
use crate::db::pg::PgSource;
use crate::db::query::{Catalog, Query};
use crate::db::sqlite::SqliteSource;
use crate::errors::AppResult;
use crate::models::table::Table;
use std::path::PathBuf;
use std::sync::Arc;

/// Something that can run a read-only [`Query`].
///
/// Implementations must not swallow failures: connection problems are
/// `AppError::Connection`, statement problems `AppError::Query`, and an
/// empty `Table` means the query ran and matched nothing.
pub trait DataSource: Send + Sync {
    fn dialect(&self) -> Dialect;

    fn fetch(&self, query: &Query) -> AppResult<Table>;

    /// Human readable target, never containing credentials.
    fn describe(&self) -> String;
}

/// Which database the dashboard talks to.
#[derive(Debug, Clone)]
pub enum Backend {
    Postgres(DbSettings),
    /// Local snapshot with the same tables in its `main` schema.
    Sqlite(PathBuf),
}

impl Backend {
    /// `--sqlite` wins; otherwise the PostgreSQL settings must be in the environment.
    pub fn resolve(sqlite: Option<PathBuf>) -> AppResult<Self> {
        match sqlite {
            Some(path) => Ok(Backend::Sqlite(path)),
            None => Ok(Backend::Postgres(DbSettings::from_env()?)),
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Backend::Postgres(_) => Dialect::Postgres,
            Backend::Sqlite(_) => Dialect::Sqlite,
        }
    }

    pub fn catalog(&self, cfg: &Config) -> Catalog {
        match self {
            Backend::Postgres(_) => Catalog::new(Dialect::Postgres, &cfg.schema, &cfg.service_table),
            Backend::Sqlite(_) => Catalog::new(Dialect::Sqlite, "main", &cfg.service_table),
        }
    }

    pub fn connect(&self, cfg: &Config) -> AppResult<Arc<dyn DataSource>> {
        match self {
            Backend::Postgres(settings) => Ok(Arc::new(PgSource::connect(settings, cfg)?)),
            Backend::Sqlite(path) => Ok(Arc::new(SqliteSource::open(path)?)),
        }
    }
}
