//! Growth Projection - compound-interest growth engine with periodic contributions
//!
//! This library provides:
//! - Lump-sum future value under annual, semi-annual, quarterly, monthly and daily compounding
//! - Accumulation of periodic contributions with beginning/end-of-period timing
//! - Yearly and monthly accumulation schedules
//! - Batch and what-if scenario runs

pub mod error;
pub mod input;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::GrowthError;
pub use input::{
    CompoundingFrequency, ContributionFrequency, ContributionTiming, GrowthInput,
    MAX_HORIZON_YEARS,
};
pub use projection::{GrowthEngine, GrowthResult, PeriodRecord, ProjectionConfig, Schedule};
pub use scenario::ScenarioRunner;
