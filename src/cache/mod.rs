//! Time-bounded memoization of query results and of the connection handle.
//!
//! Both caches sit on `moka::sync::Cache`: entries expire `ttl` after
//! insertion, the result cache is capacity-bounded, and concurrent misses
//! on the same key run the fetch once while the other callers wait for it.
//! Failed fetches are never stored.

mod connection;
mod results;

pub use connection::{ConnectionCache, SourceFactory};
pub use results::{DEFAULT_RESULT_CAPACITY, ResultCache};
