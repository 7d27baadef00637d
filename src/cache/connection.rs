use crate::db::source::DataSource;
use crate::errors::{AppError, AppResult};
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Builds a fresh data source (pool) when the cached one has expired.
pub type SourceFactory = Box<dyn Fn() -> AppResult<Arc<dyn DataSource>> + Send + Sync>;

/// Long-lived connection handle with a coarse TTL.
///
/// The handle is built lazily on first use. Construction failures are
/// returned to the caller and not remembered, so the next call retries.
pub struct ConnectionCache {
    factory: SourceFactory,
    slot: Cache<(), Arc<dyn DataSource>>,
}

impl ConnectionCache {
    pub fn new(ttl: Duration, factory: SourceFactory) -> Self {
        Self {
            factory,
            slot: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        }
    }

    pub fn get(&self) -> AppResult<Arc<dyn DataSource>> {
        self.slot
            .try_get_with((), || {
                info!("connection cache miss, creating data source");
                let source = (self.factory)()
                    .inspect_err(|e| warn!(error = %e, "data source creation failed"))?;
                debug!(target = %source.describe(), "data source ready");
                Ok::<_, AppError>(source)
            })
            .map_err(AppError::from)
    }
}
