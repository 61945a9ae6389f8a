//! Load growth scenarios from CSV
//!
//! Expected columns:
//! `principal,annual_rate,compounding,horizon_years,contribution,contribution_frequency,timing`
//! The last three may be left blank for lump-sum scenarios.

use super::{CompoundingFrequency, ContributionFrequency, ContributionTiming, GrowthInput};
use crate::error::GrowthError;
use csv::{Reader, Trim};
use std::path::Path;

/// Raw CSV row for one scenario
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    principal: f64,
    annual_rate: f64,
    compounding: String,
    horizon_years: f64,
    #[serde(default)]
    contribution: Option<f64>,
    #[serde(default)]
    contribution_frequency: Option<String>,
    #[serde(default)]
    timing: Option<String>,
}

impl CsvRow {
    fn into_input(self) -> Result<GrowthInput, GrowthError> {
        let compounding: CompoundingFrequency = self.compounding.parse()?;

        let contribution_frequency = match self.contribution_frequency.as_deref() {
            Some(s) if !s.trim().is_empty() => Some(s.parse::<ContributionFrequency>()?),
            _ => None,
        };

        let contribution_timing = match self.timing.as_deref() {
            Some(s) if !s.trim().is_empty() => s.parse::<ContributionTiming>()?,
            _ => ContributionTiming::default(),
        };

        Ok(GrowthInput {
            initial_principal: self.principal,
            annual_rate: self.annual_rate,
            compounding,
            horizon_years: self.horizon_years,
            contribution_amount: self.contribution.unwrap_or(0.0),
            contribution_frequency,
            contribution_timing,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<GrowthInput>, GrowthError> {
    let file = std::fs::File::open(path)?;
    load_inputs_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
///
/// Rows are parsed but not validated; the engine rejects invalid ones.
pub fn load_inputs_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<GrowthInput>, GrowthError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<GrowthInput>, GrowthError> {
    let mut inputs = Vec::new();

    for (line, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let input = row
            .into_input()
            .map_err(|e| GrowthError::Parse(format!("row {}: {}", line + 1, e)))?;
        inputs.push(input);
    }

    log::debug!("Loaded {} growth scenarios", inputs.len());
    Ok(inputs)
}
