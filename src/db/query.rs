//! Parameterized statements and the small builder the views are assembled with.

use crate::db::dialect::Dialect;
use crate::models::filter::ViewFilter;
use crate::models::region::RegionFilter;
use chrono::NaiveDate;
use std::fmt;

/// A value bound to a placeholder. User input only ever reaches the
/// database through one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Param {
    Date(NaiveDate),
    Text(String),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Param::Text(s) => write!(f, "'{s}'"),
        }
    }
}

/// SQL text plus its bound values. Also the result-cache key: two queries
/// are the same iff both the text and every bound value are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub sql: String,
    pub params: Vec<Param>,
}

impl Query {
    /// Short single-line form for logs.
    pub fn summary(&self) -> String {
        let flat: String = self.sql.split_whitespace().collect::<Vec<_>>().join(" ");
        let head: String = flat.chars().take(60).collect();
        let params: Vec<String> = self.params.iter().map(Param::to_string).collect();
        format!("{head}... [{}]", params.join(", "))
    }
}

/// Where the views read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub dialect: Dialect,
    pub schema: String,
    pub services_table: String,
    pub equipment_table: String,
    pub lot_table: String,
    pub checklist_table: String,
}

impl Catalog {
    pub fn new(dialect: Dialect, schema: &str, services_table: &str) -> Self {
        Self {
            dialect,
            schema: schema.to_string(),
            services_table: services_table.to_string(),
            equipment_table: "ofs_notas_equipamentos".to_string(),
            lot_table: "lote_material".to_string(),
            checklist_table: "ofs_apr".to_string(),
        }
    }

    /// `schema."table"`; the service table name starts with a digit and must be quoted.
    pub fn qualify(&self, table: &str) -> String {
        format!("{}.\"{}\"", self.schema, table.replace('"', "\"\""))
    }

    pub fn services(&self) -> String {
        self.qualify(&self.services_table)
    }
}

/// Appends `AND` clauses to a base statement, binding every value.
pub struct QueryBuilder {
    dialect: Dialect,
    sql: String,
    params: Vec<Param>,
}

impl QueryBuilder {
    /// `base` must end inside a WHERE clause (e.g. `WHERE 1=1`).
    pub fn new(dialect: Dialect, base: impl Into<String>) -> Self {
        Self {
            dialect,
            sql: base.into(),
            params: Vec::new(),
        }
    }

    /// Register a value and return its placeholder.
    pub fn bind(&mut self, param: Param) -> String {
        self.params.push(param);
        self.dialect.placeholder(self.params.len())
    }

    pub fn and(&mut self, clause: &str) -> &mut Self {
        self.sql.push_str("\n  AND ");
        self.sql.push_str(clause);
        self
    }

    /// `column = <bound text>`
    pub fn and_eq(&mut self, column: &str, value: &str) -> &mut Self {
        let p = self.bind(Param::Text(value.to_string()));
        self.and(&format!("{column} = {p}"))
    }

    /// Inclusive date bounds; each absent side adds nothing.
    pub fn date_bounds(&mut self, column: &str, filter: &ViewFilter) -> &mut Self {
        if let Some(start) = filter.start {
            let p = self.bind(Param::Date(start));
            self.and(&format!("{column} >= {p}"));
        }
        if let Some(end) = filter.end {
            let p = self.bind(Param::Date(end));
            self.and(&format!("{column} <= {p}"));
        }
        self
    }

    /// Resource code contains the region's two-letter code; `All` adds nothing.
    pub fn region(&mut self, column: &str, region: RegionFilter) -> &mut Self {
        if let Some(region) = region.region() {
            let p = self.bind(Param::Text(region.code().to_string()));
            let clause = self.dialect.contains(column, &p);
            self.and(&clause);
        }
        self
    }

    pub fn order_by(mut self, keys: &str) -> Query {
        self.sql.push_str("\nORDER BY ");
        self.sql.push_str(keys);
        self.build()
    }

    pub fn build(self) -> Query {
        Query {
            sql: self.sql,
            params: self.params,
        }
    }
}
