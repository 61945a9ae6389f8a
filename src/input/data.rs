//! Growth input data structures and validation

use crate::error::GrowthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often interest is calculated and added to the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    /// Compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "annually",
            CompoundingFrequency::SemiAnnually => "semiannually",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Daily => "daily",
        }
    }
}

impl FromStr for CompoundingFrequency {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annually" | "annual" | "yearly" | "1" => Ok(CompoundingFrequency::Annually),
            "semiannually" | "semi-annually" | "2" => Ok(CompoundingFrequency::SemiAnnually),
            "quarterly" | "4" => Ok(CompoundingFrequency::Quarterly),
            "monthly" | "12" => Ok(CompoundingFrequency::Monthly),
            "daily" | "365" => Ok(CompoundingFrequency::Daily),
            other => Err(GrowthError::Parse(format!("Unknown compounding frequency: {}", other))),
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a contribution event occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContributionFrequency {
    Monthly,
    Annually,
}

impl ContributionFrequency {
    /// Contribution events per year
    pub fn events_per_year(&self) -> u32 {
        match self {
            ContributionFrequency::Monthly => 12,
            ContributionFrequency::Annually => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionFrequency::Monthly => "monthly",
            ContributionFrequency::Annually => "annually",
        }
    }
}

impl FromStr for ContributionFrequency {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "12" => Ok(ContributionFrequency::Monthly),
            "annually" | "annual" | "yearly" | "1" => Ok(ContributionFrequency::Annually),
            other => Err(GrowthError::Parse(format!("Unknown contribution frequency: {}", other))),
        }
    }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a contribution lands at the start or end of its sub-period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContributionTiming {
    Beginning,
    #[default]
    End,
}

impl ContributionTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionTiming::Beginning => "beginning",
            ContributionTiming::End => "end",
        }
    }
}

impl FromStr for ContributionTiming {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginning" | "begin" | "start" => Ok(ContributionTiming::Beginning),
            "end" => Ok(ContributionTiming::End),
            other => Err(GrowthError::Parse(format!("Unknown contribution timing: {}", other))),
        }
    }
}

impl fmt::Display for ContributionTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Longest horizon accepted; bounds the schedule and contribution loops
pub const MAX_HORIZON_YEARS: f64 = 1000.0;

/// Inputs to a single growth projection
///
/// Rates are fractions (0.05 for 5%) and the horizon is in fractional years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Starting balance
    pub initial_principal: f64,

    /// Nominal annual interest rate
    pub annual_rate: f64,

    /// Account compounding convention
    pub compounding: CompoundingFrequency,

    /// Projection horizon in years
    pub horizon_years: f64,

    /// Amount deposited at each contribution event (0 = none)
    #[serde(default)]
    pub contribution_amount: f64,

    /// Required when `contribution_amount > 0`
    #[serde(default)]
    pub contribution_frequency: Option<ContributionFrequency>,

    #[serde(default)]
    pub contribution_timing: ContributionTiming,
}

impl GrowthInput {
    /// Lump-sum input with no contributions
    pub fn lump_sum(
        initial_principal: f64,
        annual_rate: f64,
        compounding: CompoundingFrequency,
        horizon_years: f64,
    ) -> Self {
        Self {
            initial_principal,
            annual_rate,
            compounding,
            horizon_years,
            contribution_amount: 0.0,
            contribution_frequency: None,
            contribution_timing: ContributionTiming::End,
        }
    }

    /// Add a periodic contribution stream
    pub fn with_contributions(
        mut self,
        amount: f64,
        frequency: ContributionFrequency,
        timing: ContributionTiming,
    ) -> Self {
        self.contribution_amount = amount;
        self.contribution_frequency = Some(frequency);
        self.contribution_timing = timing;
        self
    }

    /// Convert a years + months horizon into fractional years
    pub fn horizon_from(years: u32, months: u32) -> f64 {
        years as f64 + months as f64 / 12.0
    }

    /// Contribution stream, if one is configured and non-zero
    pub fn contribution_stream(&self) -> Option<(f64, ContributionFrequency)> {
        match self.contribution_frequency {
            Some(frequency) if self.contribution_amount > 0.0 => {
                Some((self.contribution_amount, frequency))
            }
            _ => None,
        }
    }

    /// Check the input invariants required before projecting
    pub fn validate(&self) -> Result<(), GrowthError> {
        check_finite("initial_principal", self.initial_principal)?;
        check_finite("annual_rate", self.annual_rate)?;
        check_finite("horizon_years", self.horizon_years)?;
        check_finite("contribution_amount", self.contribution_amount)?;

        if self.horizon_years <= 0.0 {
            return Err(GrowthError::invalid("horizon_years", "must be greater than zero"));
        }
        if self.horizon_years > MAX_HORIZON_YEARS {
            return Err(GrowthError::invalid(
                "horizon_years",
                format!("must not exceed {} years", MAX_HORIZON_YEARS),
            ));
        }
        if self.initial_principal < 0.0 {
            return Err(GrowthError::invalid("initial_principal", "must not be negative"));
        }
        if self.annual_rate < 0.0 {
            return Err(GrowthError::invalid("annual_rate", "must not be negative"));
        }
        if self.contribution_amount < 0.0 {
            return Err(GrowthError::invalid("contribution_amount", "must not be negative"));
        }
        if self.contribution_amount > 0.0 && self.contribution_frequency.is_none() {
            return Err(GrowthError::invalid(
                "contribution_frequency",
                "required when contribution_amount is positive",
            ));
        }

        Ok(())
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), GrowthError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GrowthError::invalid(field, format!("must be a finite number, got {}", value)))
    }
}
