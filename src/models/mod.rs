pub mod activity;
pub mod checklist;
pub mod composition;
pub mod equipment;
pub mod filter;
pub mod overview;
pub mod region;
pub mod table;

pub use composition::Composition;
pub use filter::ViewFilter;
pub use region::{Region, RegionFilter};
pub use table::{Row, Table, Value};
