//! PostgreSQL source: an sqlx pool driven from synchronous code.

use crate::config::{Config, DbSettings};
use crate::db::dialect::Dialect;
use crate::db::query::{Param, Query};
use crate::db::source::DataSource;
use crate::errors::{AppError, AppResult};
use crate::models::table::{Table, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgRow};
use sqlx::types::Decimal;
use sqlx::{Column, Row, TypeInfo, ValueRef};
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info, warn};

pub struct PgSource {
    runtime: Runtime,
    pool: PgPool,
    target: String,
}

impl PgSource {
    /// Build the pool and open a first connection, so bad credentials or an
    /// unreachable host surface here as `AppError::Connection`.
    pub fn connect(settings: &DbSettings, cfg: &Config) -> AppResult<Self> {
        let target = settings.masked_url();
        info!(target = %target, "creating PostgreSQL pool");

        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::Connection(format!("cannot start I/O runtime: {e}")))?;

        let options = PgConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .database(&settings.name)
            .username(&settings.user)
            .password(&settings.password)
            .application_name("servdash");

        let pool = runtime
            .block_on(
                PgPoolOptions::new()
                    .max_connections(cfg.max_connections)
                    .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
                    // liveness check before a pooled connection is handed out
                    .test_before_acquire(true)
                    .connect_with(options),
            )
            .map_err(|e| AppError::Connection(e.to_string()))?;

        info!(target = %target, "PostgreSQL pool ready");
        Ok(Self {
            runtime,
            pool,
            target,
        })
    }
}

impl DataSource for PgSource {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn fetch(&self, query: &Query) -> AppResult<Table> {
        debug!(query = %query.summary(), "executing on PostgreSQL");

        let rows = self.runtime.block_on(async {
            let mut statement = sqlx::query(&query.sql);
            for param in &query.params {
                statement = match param {
                    Param::Date(d) => statement.bind(*d),
                    Param::Text(s) => statement.bind(s.clone()),
                };
            }
            statement.fetch_all(&self.pool).await
        });
        let rows = rows.map_err(classify)?;

        let columns = rows
            .first()
            .map(|r| r.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();

        let mut table = Table::new(columns);
        for row in &rows {
            let values = (0..row.len())
                .map(|i| pg_value(row, i))
                .collect::<AppResult<Vec<_>>>()?;
            table.push_row(values);
        }
        Ok(table)
    }

    fn describe(&self) -> String {
        self.target.clone()
    }
}

/// Pool and transport failures are connection errors, everything else
/// (syntax, missing relation, decode) is a query error.
fn classify(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => AppError::Connection(err.to_string()),
        other => AppError::Query(other.to_string()),
    }
}

fn pg_value(row: &PgRow, idx: usize) -> AppResult<Value> {
    let raw = row.try_get_raw(idx).map_err(classify)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_string();

    let value = match type_name.as_str() {
        "BOOL" => row.try_get::<bool, _>(idx).map(Value::Bool),
        "INT2" => row.try_get::<i16, _>(idx).map(|v| Value::Int(v as i64)),
        "INT4" => row.try_get::<i32, _>(idx).map(|v| Value::Int(v as i64)),
        "INT8" => row.try_get::<i64, _>(idx).map(Value::Int),
        "FLOAT4" => row.try_get::<f32, _>(idx).map(|v| Value::Float(v as f64)),
        "FLOAT8" => row.try_get::<f64, _>(idx).map(Value::Float),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "CHAR" => {
            row.try_get::<String, _>(idx).map(Value::Text)
        }
        "DATE" => row.try_get::<NaiveDate, _>(idx).map(Value::Date),
        "TIME" => row.try_get::<NaiveTime, _>(idx).map(Value::Time),
        "TIMESTAMP" => row.try_get::<NaiveDateTime, _>(idx).map(Value::DateTime),
        "TIMESTAMPTZ" => row
            .try_get::<DateTime<Utc>, _>(idx)
            .map(|v| Value::DateTime(v.naive_utc())),
        "JSON" | "JSONB" => row
            .try_get::<serde_json::Value, _>(idx)
            .map(|v| Value::Text(v.to_string())),
        "NUMERIC" => row
            .try_get::<Decimal, _>(idx)
            .map(|v| decode_numeric(&v.normalize().to_string())),
        other => {
            let column = row.columns()[idx].name();
            warn!(column, pg_type = other, "unsupported column type");
            return Err(unsupported_column(column, other));
        }
    };

    value.map_err(classify)
}

/// Whole NUMERIC values become integers, the rest floats. Text that parses
/// as neither is kept as is.
pub fn decode_numeric(text: &str) -> Value {
    if let Ok(i) = text.parse::<i64>() {
        return Value::Int(i);
    }
    text.parse::<f64>()
        .map(Value::Float)
        .unwrap_or_else(|_| Value::Text(text.to_string()))
}

/// A column the decoder has no mapping for fails the whole query instead of
/// showing up blank.
pub fn unsupported_column(column: &str, pg_type: &str) -> AppError {
    AppError::Query(format!(
        "column '{column}' has unsupported type {pg_type}; cast it to text in the query"
    ))
}
