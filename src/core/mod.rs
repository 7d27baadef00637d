pub mod dashboard;
pub mod drilldown;
pub mod filters;
pub mod shift;
pub mod teams;

pub use dashboard::Dashboard;
