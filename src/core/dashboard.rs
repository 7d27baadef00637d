//! Query service: builds the statement for a view, serves it from the
//! result cache when possible, otherwise runs it through the cached
//! connection.

use crate::cache::{ConnectionCache, ResultCache};
use crate::config::Config;
use crate::db::queries;
use crate::db::query::{Catalog, Query};
use crate::db::source::Backend;
use crate::errors::AppResult;
use crate::models::filter::ViewFilter;
use crate::models::table::Table;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct Dashboard {
    catalog: Catalog,
    connections: ConnectionCache,
    results: ResultCache,
}

impl Dashboard {
    pub fn new(catalog: Catalog, connections: ConnectionCache, results: ResultCache) -> Self {
        Self {
            catalog,
            connections,
            results,
        }
    }

    /// Wire the caches with the TTLs from `cfg`. Nothing connects until the
    /// first fetch.
    pub fn from_config(cfg: &Config, backend: Backend) -> Self {
        let catalog = backend.catalog(cfg);
        let connect_cfg = cfg.clone();
        let connections = ConnectionCache::new(
            Duration::from_secs(cfg.connection_ttl_secs),
            Box::new(move || backend.connect(&connect_cfg)),
        );
        let results = ResultCache::new(
            Duration::from_secs(cfg.result_ttl_secs),
            cfg.result_capacity,
        );
        Self::new(catalog, connections, results)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run `query`, or return the result cached for it within the TTL.
    ///
    /// Failures are returned typed (`Connection` / `Query`) and never cached;
    /// `Ok` with an empty table means the query ran and matched nothing.
    pub fn fetch(&self, query: &Query) -> AppResult<Arc<Table>> {
        self.results.get_or_fetch(query, || {
            let source = self.connections.get()?;
            debug_assert_eq!(source.dialect(), self.catalog.dialect);
            source
                .fetch(query)
                .inspect_err(|e| warn!(error = %e, query = %query.summary(), "query failed"))
        })
    }

    /// Forget every cached result. The connection handle is kept.
    pub fn refresh(&self) {
        debug!("clearing result cache");
        self.results.clear();
    }

    pub fn cached_results(&self) -> u64 {
        self.results.len()
    }

    pub fn shift_start(&self, filter: &ViewFilter) -> AppResult<Arc<Table>> {
        self.fetch(&queries::shift_start(&self.catalog, filter))
    }

    pub fn drilldown(&self, filter: &ViewFilter) -> AppResult<Arc<Table>> {
        self.fetch(&queries::drilldown(&self.catalog, filter))
    }

    pub fn equipment_notes(&self, filter: &ViewFilter) -> AppResult<Arc<Table>> {
        self.fetch(&queries::equipment_notes(&self.catalog, filter))
    }

    pub fn safety_checklist(&self, filter: &ViewFilter) -> AppResult<Arc<Table>> {
        self.fetch(&queries::safety_checklist(&self.catalog, filter))
    }

    pub fn status_counts(&self, filter: &ViewFilter) -> AppResult<Arc<Table>> {
        self.fetch(&queries::status_counts(&self.catalog, filter))
    }

    pub fn team_status_counts(&self, filter: &ViewFilter) -> AppResult<Arc<Table>> {
        self.fetch(&queries::team_status_counts(&self.catalog, filter))
    }

    pub fn map_points(&self, filter: &ViewFilter) -> AppResult<Arc<Table>> {
        self.fetch(&queries::map_points(&self.catalog, filter))
    }
}
