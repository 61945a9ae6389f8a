//! Projection result structures

use serde::{Deserialize, Serialize};

use super::contributions::ContributionTotals;
use super::schedule::Schedule;
use crate::error::GrowthError;
use crate::input::GrowthInput;

/// Complete result of one growth projection
///
/// Produced once per input and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Balance at the horizon
    pub ending_balance: f64,

    /// Initial principal plus all contributions
    pub total_principal: f64,

    pub total_contributions: f64,

    /// `ending_balance - total_principal`
    pub total_interest: f64,

    pub interest_from_initial: f64,

    pub interest_from_contributions: f64,

    /// Number of contribution events over the horizon
    pub contribution_events: u32,

    pub schedule: Schedule,
}

impl GrowthResult {
    pub(crate) fn from_parts(
        input: &GrowthInput,
        initial_future_value: f64,
        contributions: ContributionTotals,
        schedule: Schedule,
    ) -> Self {
        let ending_balance = initial_future_value + contributions.future_value;
        let total_principal = input.initial_principal + contributions.total_contributions;

        Self {
            ending_balance,
            total_principal,
            total_contributions: contributions.total_contributions,
            total_interest: ending_balance - total_principal,
            interest_from_initial: initial_future_value - input.initial_principal,
            interest_from_contributions: contributions.interest(),
            contribution_events: contributions.events,
            schedule,
        }
    }

    /// Pretty-printed JSON of the whole result, schedule included
    pub fn to_json(&self) -> Result<String, GrowthError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Scale every monetary figure by `multiplier`
    ///
    /// A pass-through for collaborators that apply their own inflation or tax
    /// factor; no adjustment is modelled here.
    pub fn adjusted(&self, multiplier: f64) -> Self {
        let mut adjusted = self.clone();
        adjusted.ending_balance *= multiplier;
        adjusted.total_principal *= multiplier;
        adjusted.total_contributions *= multiplier;
        adjusted.total_interest *= multiplier;
        adjusted.interest_from_initial *= multiplier;
        adjusted.interest_from_contributions *= multiplier;

        for record in adjusted
            .schedule
            .yearly
            .iter_mut()
            .chain(adjusted.schedule.monthly.iter_mut())
        {
            record.deposit *= multiplier;
            record.cumulative_principal *= multiplier;
            record.interest_earned *= multiplier;
            record.ending_balance *= multiplier;
        }

        adjusted
    }
}
