//! Growth projection engine: lump-sum compounding, contribution accumulation and schedules

mod compounding;
mod contributions;
mod engine;
mod result;
mod schedule;

pub use compounding::{future_value, interest_portion};
pub use contributions::{event_count, ContributionAccumulator, ContributionTotals};
pub use engine::{GrowthEngine, ProjectionConfig};
pub use result::GrowthResult;
pub use schedule::{Granularity, PeriodRecord, Schedule, ScheduleBuilder};
