//! Core projection engine

use serde::{Deserialize, Serialize};

use super::compounding::future_value;
use super::contributions::ContributionAccumulator;
use super::result::GrowthResult;
use super::schedule::{Granularity, Schedule, ScheduleBuilder};
use crate::error::GrowthError;
use crate::input::GrowthInput;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Also build the monthly ledger (the yearly ledger is always built)
    pub monthly_schedule: bool,

    /// Sum contributions as a geometric series when the compounding and
    /// contribution frequencies match, instead of simulating every event
    pub closed_form_when_aligned: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            monthly_schedule: true,
            closed_form_when_aligned: true,
        }
    }
}

impl ProjectionConfig {
    /// Yearly ledger only
    pub fn yearly_only() -> Self {
        Self {
            monthly_schedule: false,
            ..Default::default()
        }
    }
}

/// Main projection engine
///
/// Holds no state between calls; one engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct GrowthEngine {
    config: ProjectionConfig,
}

impl GrowthEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project a single input, returning `None` when the input is invalid
    ///
    /// No partial result is ever produced for an invalid input.
    pub fn project(&self, input: &GrowthInput) -> Option<GrowthResult> {
        match self.try_project(input) {
            Ok(result) => Some(result),
            Err(e) => {
                log::warn!("Growth input rejected: {}", e);
                None
            }
        }
    }

    /// Project a single input, reporting why an invalid input was rejected
    pub fn try_project(&self, input: &GrowthInput) -> Result<GrowthResult, GrowthError> {
        input.validate()?;

        let accumulator = ContributionAccumulator::new(input, self.config.closed_form_when_aligned);
        log::debug!(
            "Projecting {:.4} years at {} compounding: {} contribution events ({})",
            input.horizon_years,
            input.compounding,
            accumulator.total_events(),
            if accumulator.uses_closed_form() { "closed form" } else { "per event" },
        );

        let initial_future_value = future_value(
            input.initial_principal,
            input.annual_rate,
            input.compounding.periods_per_year(),
            input.horizon_years,
        );
        let contributions = accumulator.accumulate_to(input.horizon_years);

        let builder = ScheduleBuilder::new(input, &accumulator);
        let schedule = Schedule {
            yearly: builder.build(Granularity::Yearly),
            monthly: if self.config.monthly_schedule {
                builder.build(Granularity::Monthly)
            } else {
                Vec::new()
            },
        };

        Ok(GrowthResult::from_parts(input, initial_future_value, contributions, schedule))
    }
}
