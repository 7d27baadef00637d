use crate::errors::{AppError, AppResult};
use crate::models::region::RegionFilter;
use chrono::NaiveDate;

/// Filters shared by every view. Absent bounds are unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub region: RegionFilter,
}

impl ViewFilter {
    pub fn new(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        region: RegionFilter,
    ) -> AppResult<Self> {
        if let (Some(s), Some(e)) = (start, end)
            && s > e
        {
            return Err(AppError::InvalidPeriod(format!(
                "start date {s} is after end date {e}"
            )));
        }
        Ok(Self { start, end, region })
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        Self::new(Some(start), Some(end), RegionFilter::All)
    }

    pub fn with_region(mut self, region: RegionFilter) -> Self {
        self.region = region;
        self
    }

    /// `2024-01-01_a_2024-01-07`, used in export file names.
    pub fn period_slug(&self) -> String {
        let side = |d: Option<NaiveDate>, open: &str| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| open.to_string())
        };
        format!("{}_a_{}", side(self.start, "inicio"), side(self.end, "hoje"))
    }
}
