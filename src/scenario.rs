//! Scenario runner for batch and what-if projections
//!
//! Every projection is independent, so batches run in parallel.

use rayon::prelude::*;

use crate::error::GrowthError;
use crate::input::{load_inputs, GrowthInput};
use crate::projection::{GrowthEngine, GrowthResult, ProjectionConfig};

/// Runs many projections under a shared configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Compare several rates for the same saver
/// let inputs: Vec<_> = [0.03, 0.05, 0.07]
///     .iter()
///     .map(|&rate| GrowthInput { annual_rate: rate, ..base.clone() })
///     .collect();
/// let results = runner.run_batch(&inputs);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: GrowthEngine,
}

impl ScenarioRunner {
    /// Runner with the default projection configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: GrowthEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &GrowthInput) -> Option<GrowthResult> {
        self.engine.project(input)
    }

    /// Run projections for many inputs, preserving input order
    ///
    /// Invalid inputs map to `None` without affecting the others.
    pub fn run_batch(&self, inputs: &[GrowthInput]) -> Vec<Option<GrowthResult>> {
        log::info!("Running {} growth scenarios", inputs.len());
        inputs.par_iter().map(|input| self.engine.project(input)).collect()
    }

    /// Run one input under several configurations
    pub fn run_configs(
        &self,
        input: &GrowthInput,
        configs: &[ProjectionConfig],
    ) -> Vec<Option<GrowthResult>> {
        configs
            .par_iter()
            .map(|config| GrowthEngine::new(config.clone()).project(input))
            .collect()
    }

    /// Load scenarios from a CSV file and run them all
    pub fn run_csv<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<Vec<(GrowthInput, Option<GrowthResult>)>, GrowthError> {
        let inputs = load_inputs(path)?;
        let results = self.run_batch(&inputs);
        Ok(inputs.into_iter().zip(results).collect())
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }
}
