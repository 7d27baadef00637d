// src/export/excel_date.rs

use crate::models::table::Value;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
const TIME_FORMAT: &str = "hh:mm:ss";

/// Excel serial + number format for date/time cells.
///
/// Typed values (PostgreSQL) convert directly; ISO text (SQLite snapshots)
/// is parsed first. Anything else is `None`.
pub(crate) fn excel_serial(value: &Value) -> Option<(&'static str, f64)> {
    match value {
        Value::Date(d) => Some((DATE_FORMAT, date_serial(*d))),
        Value::DateTime(dt) => Some((DATETIME_FORMAT, datetime_serial(dt))),
        Value::Time(t) => Some((TIME_FORMAT, time_fraction(*t))),
        Value::Text(s) => parse_to_excel_date(s.trim()),
        _ => None,
    }
}

fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let dt_formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some((DATETIME_FORMAT, datetime_serial(&dt)));
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some((DATE_FORMAT, date_serial(d)));
    }

    // only full HH:MM:SS: shorter strings are too likely to be codes
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .ok()
        .map(|t| (TIME_FORMAT, time_fraction(t)))
}

/// Days since 1899-12-30.
fn date_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}

fn datetime_serial(dt: &NaiveDateTime) -> f64 {
    date_serial(dt.date()) + time_fraction(dt.time())
}

fn time_fraction(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}
