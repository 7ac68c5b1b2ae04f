//! fincalc - Projection engine for investment and retirement calculators
//!
//! This library provides:
//! - Compound growth projections with periodic contributions
//! - Loan amortization (principal & interest, tax, insurance)
//! - Inflation / purchasing-power adjustment series
//! - Retirement savings accumulation and corpus planning
//! - Risk scoring and portfolio allocation rebalancing
//! - Chart-ready series output for UI consumers
//!
//! Every function is pure: a typed input record in, a scalar or series out,
//! no hidden state. Callers re-invoke on each input change.

pub mod allocation;
pub mod batch;
pub mod chart;
pub mod growth;
pub mod inflation;
pub mod loan;
pub mod retirement;
pub mod risk;
pub mod scenario;

// Re-export commonly used types
pub use allocation::{Allocation, AllocationPlan, AssetClass};
pub use chart::{ChartData, ChartSeries};
pub use growth::{CompoundGrowthInput, GrowthSeries, GrowthSnapshot};
pub use inflation::{InflationAdjustmentInput, InflationSeries};
pub use loan::{AmortizationResult, LoanAmortizationInput};
pub use retirement::{RetirementInput, RetirementResult};
pub use risk::{RiskCategory, RiskScoreInput, RiskScoreResult};
pub use scenario::ScenarioRunner;
