pub mod dialect;
pub mod pg;
pub mod queries;
pub mod query;
pub mod source;
pub mod sqlite;

pub use dialect::Dialect;
pub use query::{Catalog, Param, Query};
pub use source::{Backend, DataSource};
