//! Batch runner for projecting many inputs through one call path
//!
//! The engine functions are stateless, so the runner carries no
//! assumptions; it exists so the CLI and the batch binary share one place
//! that maps input slices to results.
//!
//! # Example
//! ```
//! use fincalc::scenario::ScenarioRunner;
//! use fincalc::growth::{CompoundGrowthInput, CompoundFrequency, ContributionFrequency};
//!
//! let runner = ScenarioRunner::new();
//! let input = CompoundGrowthInput {
//!     initial_amount: 4000.0,
//!     periodic_contribution: 100.0,
//!     contribution_frequency: ContributionFrequency::Monthly,
//!     annual_rate_percent: 6.0,
//!     years: 10,
//!     compound_frequency: CompoundFrequency::Annually,
//! };
//! let series = runner.run(&input);
//! assert_eq!(series.len(), 10);
//! ```

use crate::growth::{project_growth, CompoundGrowthInput, GrowthSeries};

/// Stateless batch projection runner
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a single growth projection
    pub fn run(&self, input: &CompoundGrowthInput) -> GrowthSeries {
        project_growth(input)
    }

    /// Run projections for multiple inputs
    pub fn run_batch(&self, inputs: &[CompoundGrowthInput]) -> Vec<GrowthSeries> {
        inputs.iter().map(project_growth).collect()
    }

    /// Run rate-sensitivity scenarios for one input: same projection at
    /// each of the given annual rates
    pub fn run_rate_scenarios(
        &self,
        input: &CompoundGrowthInput,
        annual_rates_percent: &[f64],
    ) -> Vec<GrowthSeries> {
        annual_rates_percent
            .iter()
            .map(|&rate| {
                let scenario = CompoundGrowthInput {
                    annual_rate_percent: rate,
                    ..input.clone()
                };
                project_growth(&scenario)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::{CompoundFrequency, ContributionFrequency};

    fn test_input() -> CompoundGrowthInput {
        CompoundGrowthInput {
            initial_amount: 1000.0,
            periodic_contribution: 0.0,
            contribution_frequency: ContributionFrequency::Annually,
            annual_rate_percent: 5.0,
            years: 5,
            compound_frequency: CompoundFrequency::Annually,
        }
    }

    #[test]
    fn test_batch_preserves_order_and_count() {
        let runner = ScenarioRunner::new();
        let inputs: Vec<_> = (1..=4)
            .map(|years| CompoundGrowthInput {
                years,
                ..test_input()
            })
            .collect();
        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 4);
        for (i, series) in results.iter().enumerate() {
            assert_eq!(series.len(), i + 1);
        }
    }

    #[test]
    fn test_rate_scenarios_are_monotone_in_rate() {
        let runner = ScenarioRunner::new();
        let results = runner.run_rate_scenarios(&test_input(), &[2.0, 4.0, 8.0]);
        let finals: Vec<f64> = results.iter().map(|s| s.final_balance().unwrap()).collect();
        assert!(finals[0] < finals[1]);
        assert!(finals[1] < finals[2]);
    }
}
