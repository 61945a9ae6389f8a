//! Accumulation schedule output structures
//!
//! Every record is cumulative to date: `interest_earned` is total interest since
//! the start of the projection, not interest for that period alone. Use
//! [`Schedule::period_interest`] for period-local figures.

use serde::{Deserialize, Serialize};

use super::compounding::future_value;
use super::contributions::{ContributionAccumulator, EVENT_TOLERANCE};
use crate::input::GrowthInput;

/// Time grain of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Monthly,
    Yearly,
}

impl Granularity {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Granularity::Monthly => 12,
            Granularity::Yearly => 1,
        }
    }
}

/// A single row of the accumulation ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// Period number (1-indexed)
    pub period_index: u32,

    /// Projection year containing this period (1-indexed)
    pub year_index: u32,

    /// Time from start to the end of this period, in years
    pub elapsed_years: f64,

    /// Inflow during this period; period 1 includes the initial principal
    pub deposit: f64,

    /// Initial principal plus all contributions deposited so far
    pub cumulative_principal: f64,

    /// Cumulative interest to date
    pub interest_earned: f64,

    pub ending_balance: f64,

    pub is_year_end: bool,
}

/// Ledgers for one projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub yearly: Vec<PeriodRecord>,

    /// Empty unless monthly output was requested
    pub monthly: Vec<PeriodRecord>,
}

impl Schedule {
    pub fn records(&self, granularity: Granularity) -> &[PeriodRecord] {
        match granularity {
            Granularity::Monthly => &self.monthly,
            Granularity::Yearly => &self.yearly,
        }
    }

    /// Last yearly record
    pub fn final_record(&self) -> Option<&PeriodRecord> {
        self.yearly.last()
    }

    /// Interest earned within each period, by differencing cumulative values
    pub fn period_interest(&self, granularity: Granularity) -> Vec<f64> {
        let mut prior = 0.0;
        self.records(granularity)
            .iter()
            .map(|r| {
                let local = r.interest_earned - prior;
                prior = r.interest_earned;
                local
            })
            .collect()
    }
}

/// Builds ledgers for one validated input
pub struct ScheduleBuilder<'a> {
    input: &'a GrowthInput,
    accumulator: &'a ContributionAccumulator,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(input: &'a GrowthInput, accumulator: &'a ContributionAccumulator) -> Self {
        Self { input, accumulator }
    }

    /// Number of periods covering the horizon at the given grain
    pub fn period_count(&self, granularity: Granularity) -> u32 {
        let per_year = granularity.periods_per_year() as f64;
        let periods = (self.input.horizon_years * per_year - EVENT_TOLERANCE).ceil();
        periods.max(1.0) as u32
    }

    pub fn build(&self, granularity: Granularity) -> Vec<PeriodRecord> {
        let per_year = granularity.periods_per_year();
        let periods = self.period_count(granularity);
        let principal = self.input.initial_principal;

        let mut records = Vec::with_capacity(periods as usize);
        let mut prior_events = 0;

        for period in 1..=periods {
            // The last period always ends exactly at the horizon
            let elapsed = if period == periods {
                self.input.horizon_years
            } else {
                (period as f64 / per_year as f64).min(self.input.horizon_years)
            };

            let initial_at_time = future_value(
                principal,
                self.input.annual_rate,
                self.input.compounding.periods_per_year(),
                elapsed,
            );
            let contributions = self.accumulator.accumulate_to(elapsed);

            let ending_balance = initial_at_time + contributions.future_value;
            let cumulative_principal = principal + contributions.total_contributions;

            let new_events = contributions.events - prior_events;
            let mut deposit = new_events as f64 * self.accumulator.amount();
            if period == 1 {
                deposit += principal;
            }
            prior_events = contributions.events;

            records.push(PeriodRecord {
                period_index: period,
                year_index: (period - 1) / per_year + 1,
                elapsed_years: elapsed,
                deposit,
                cumulative_principal,
                interest_earned: ending_balance - cumulative_principal,
                ending_balance,
                is_year_end: period % per_year == 0 || period == periods,
            });
        }

        records
    }
}
