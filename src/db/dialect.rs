//! SQL differences between the PostgreSQL server and local SQLite snapshots.
//!
//! Only the handful of constructs the views need live here; everything else
//! is plain SQL accepted by both engines.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    /// Positional placeholder for the `n`-th bound value (1-based).
    pub fn placeholder(&self, n: usize) -> String {
        match self {
            Dialect::Postgres => format!("${n}"),
            Dialect::Sqlite => format!("?{n}"),
        }
    }

    /// `haystack` contains `needle` (an SQL expression: placeholder or literal).
    /// NULL haystacks yield NULL, i.e. "no match".
    pub fn contains(&self, haystack: &str, needle: &str) -> String {
        match self {
            Dialect::Postgres => format!("strpos({haystack}, {needle}) > 0"),
            Dialect::Sqlite => format!("instr({haystack}, {needle}) > 0"),
        }
    }

    /// Time of day as `HH:MM:SS` text.
    pub fn time_text(&self, column: &str) -> String {
        match self {
            Dialect::Postgres => format!("TO_CHAR({column}, 'HH24:MI:SS')"),
            Dialect::Sqlite => format!("strftime('%H:%M:%S', {column})"),
        }
    }

    /// Integer year / month / day of a date column.
    pub fn date_part(&self, part: DatePart, column: &str) -> String {
        match self {
            Dialect::Postgres => {
                format!("CAST(EXTRACT({} FROM {column}) AS INTEGER)", part.pg_field())
            }
            Dialect::Sqlite => {
                format!("CAST(strftime('{}', {column}) AS INTEGER)", part.strftime())
            }
        }
    }

    /// Text value of a top-level key of a JSON column.
    pub fn json_text(&self, column: &str, key: &str) -> String {
        match self {
            Dialect::Postgres => format!("{column}->>'{key}'"),
            Dialect::Sqlite => format!("json_extract({column}, '$.\"{key}\"')"),
        }
    }

    /// First capture group of `pattern` in `column`, NULL when it does not match.
    /// SQLite relies on the `regexp_substr` function registered by the source.
    pub fn regex_capture(&self, column: &str, pattern: &str) -> String {
        match self {
            Dialect::Postgres => format!("substring({column} FROM '{pattern}')"),
            Dialect::Sqlite => format!("regexp_substr({column}, '{pattern}')"),
        }
    }

    /// Strip any of `chars` from both ends.
    pub fn trim_chars(&self, column: &str, chars: &str) -> String {
        match self {
            Dialect::Postgres => format!("btrim({column}, '{chars}')"),
            Dialect::Sqlite => format!("trim({column}, '{chars}')"),
        }
    }

    /// Floating point cast used for coordinates.
    pub fn real_type(&self) -> &'static str {
        match self {
            Dialect::Postgres => "DOUBLE PRECISION",
            Dialect::Sqlite => "REAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Year,
    Month,
    Day,
}

impl DatePart {
    fn pg_field(&self) -> &'static str {
        match self {
            DatePart::Year => "YEAR",
            DatePart::Month => "MONTH",
            DatePart::Day => "DAY",
        }
    }

    fn strftime(&self) -> &'static str {
        match self {
            DatePart::Year => "%Y",
            DatePart::Month => "%m",
            DatePart::Day => "%d",
        }
    }
}
