//! SQLite snapshot source (lightweight, single connection).
//!
//! Snapshots carry the same tables as the server schema inside `main`.
//! `split_part` and `regexp_substr` are registered on open so the views run
//! unchanged apart from the dialect helpers.

use crate::db::dialect::Dialect;
use crate::db::query::{Param, Query};
use crate::db::source::DataSource;
use crate::errors::{AppError, AppResult};
use crate::models::table::{Table, Value};
use regex::Regex;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{Connection, OpenFlags, ToSql, params_from_iter};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub struct SqliteSource {
    conn: Mutex<Connection>,
    target: String,
}

impl SqliteSource {
    /// Open an existing snapshot read-only.
    pub fn open(path: &Path) -> AppResult<Self> {
        info!(path = %path.display(), "opening SQLite snapshot");
        if !path.exists() {
            return Err(AppError::Connection(format!(
                "snapshot not found: {}",
                path.display()
            )));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| AppError::Connection(e.to_string()))?;
        register_functions(&conn).map_err(|e| AppError::Connection(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
            target: format!("sqlite://{}", path.display()),
        })
    }

    /// Helper to execute a closure with the connection locked.
    pub fn with_conn<F, T>(&self, func: F) -> T
    where
        F: FnOnce(&Connection) -> T,
    {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        func(&conn)
    }
}

impl DataSource for SqliteSource {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn fetch(&self, query: &Query) -> AppResult<Table> {
        debug!(query = %query.summary(), "executing on SQLite");
        self.with_conn(|conn| run_query(conn, query))
            .map_err(|e| AppError::Query(e.to_string()))
    }

    fn describe(&self) -> String {
        self.target.clone()
    }
}

fn run_query(conn: &Connection, query: &Query) -> rusqlite::Result<Table> {
    let mut stmt = conn.prepare(&query.sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();

    let mut table = Table::new(columns);
    let mut rows = stmt.query(params_from_iter(query.params.iter()))?;
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(width);
        for i in 0..width {
            values.push(sqlite_value(row.get_ref(i)?));
        }
        table.push_row(values);
    }
    Ok(table)
}

fn sqlite_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Int(i),
        ValueRef::Real(f) => Value::Float(f),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Text(format!("<{} bytes>", b.len())),
    }
}

impl ToSql for Param {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Param::Date(d) => Ok(ToSqlOutput::from(d.format("%Y-%m-%d").to_string())),
            Param::Text(s) => Ok(ToSqlOutput::from(s.as_str())),
        }
    }
}

/// PostgreSQL-compatible helpers the views rely on.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC;

    conn.create_scalar_function("split_part", 3, flags, |ctx| {
        let text: Option<String> = ctx.get(0)?;
        let delimiter: String = ctx.get(1)?;
        let field: i64 = ctx.get(2)?;
        Ok(text.map(|t| split_part(&t, &delimiter, field)))
    })?;

    conn.create_scalar_function("regexp_substr", 2, flags, |ctx| {
        let re: Arc<Regex> = ctx.get_or_create_aux(1, |vr| -> Result<_, BoxError> {
            Ok(Regex::new(vr.as_str()?)?)
        })?;
        let text: Option<String> = ctx.get(0)?;
        Ok(text.and_then(|t| {
            re.captures(&t)
                .and_then(|c| c.get(1).or_else(|| c.get(0)))
                .map(|m| m.as_str().to_string())
        }))
    })?;

    Ok(())
}

/// `split_part` as PostgreSQL defines it: the 1-based `field`-th piece, or
/// an empty string when there are fewer pieces.
pub fn split_part(text: &str, delimiter: &str, field: i64) -> String {
    if field < 1 {
        return String::new();
    }
    if delimiter.is_empty() {
        return if field == 1 { text.to_string() } else { String::new() };
    }
    text.split(delimiter)
        .nth((field - 1) as usize)
        .unwrap_or_default()
        .to_string()
}
