use crate::db::query::Query;
use crate::errors::{AppError, AppResult};
use crate::models::table::Table;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_RESULT_CAPACITY: u64 = 256;

/// Query results keyed by SQL text plus bound values.
pub struct ResultCache {
    inner: Cache<Query, Arc<Table>>,
}

impl ResultCache {
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        Self {
            inner: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(capacity)
                .build(),
        }
    }

    pub fn get(&self, query: &Query) -> Option<Arc<Table>> {
        self.inner.get(query)
    }

    /// Cached table for `query`, or the result of `fetch` stored under it.
    /// Callers missing on the same key together share one `fetch`.
    pub fn get_or_fetch<F>(&self, query: &Query, fetch: F) -> AppResult<Arc<Table>>
    where
        F: FnOnce() -> AppResult<Table>,
    {
        if let Some(hit) = self.inner.get(query) {
            debug!(query = %query.summary(), "result cache hit");
            return Ok(hit);
        }
        self.inner
            .try_get_with_by_ref(query, || {
                debug!(query = %query.summary(), "result cache miss");
                fetch().map(Arc::new)
            })
            .map_err(AppError::from)
    }

    pub fn clear(&self) {
        self.inner.invalidate_all();
    }

    /// Live entries, after pending expirations and evictions are applied.
    pub fn len(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
