//! Year-by-year compound growth projection
//!
//! The projection compounds the running balance first, then credits that
//! year's contributions. A contribution therefore earns no growth in the
//! year it is made; it starts compounding the following year. This matches
//! the contract the UI charts against and must not be reordered.

use serde::{Deserialize, Serialize};

/// How often contributions are credited to the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionFrequency {
    /// Twelve contributions per year, credited as a lump sum at year end
    Monthly,
    /// One contribution per year
    Annually,
}

/// How often growth is compounded within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundFrequency {
    Annually,
    Monthly,
}

impl CompoundFrequency {
    /// Compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundFrequency::Annually => 1,
            CompoundFrequency::Monthly => 12,
        }
    }
}

/// Inputs for a compound growth projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundGrowthInput {
    /// Starting balance, >= 0
    pub initial_amount: f64,

    /// Contribution per period, >= 0
    pub periodic_contribution: f64,

    /// How often the contribution is made
    pub contribution_frequency: ContributionFrequency,

    /// Annual growth rate in percent (6.0 = 6%)
    pub annual_rate_percent: f64,

    /// Projection horizon in whole years
    pub years: u32,

    /// Compounding granularity
    pub compound_frequency: CompoundFrequency,
}

/// One year-end snapshot of the projected balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSnapshot {
    /// Year number, 1-based
    pub year: u32,

    /// Balance at end of year, after compounding and contributions
    pub total_balance: f64,

    /// Cumulative amount paid in (initial deposit plus contributions)
    pub total_principal: f64,

    /// total_balance - total_principal, exact
    pub total_interest: f64,
}

/// Complete growth projection, one snapshot per year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSeries {
    pub snapshots: Vec<GrowthSnapshot>,
}

impl GrowthSeries {
    /// Final year-end balance, or the degenerate zero-year case
    pub fn final_balance(&self) -> Option<f64> {
        self.snapshots.last().map(|s| s.total_balance)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// Project a balance forward year by year.
///
/// Returns exactly `input.years` snapshots. `years = 0` yields an empty
/// series rather than an error; callers validate ranges before invocation.
pub fn project_growth(input: &CompoundGrowthInput) -> GrowthSeries {
    let n = input.compound_frequency.periods_per_year();
    let growth_factor = (1.0 + input.annual_rate_percent / (100.0 * n as f64)).powi(n as i32);

    let yearly_contribution = match input.contribution_frequency {
        ContributionFrequency::Monthly => input.periodic_contribution * 12.0,
        ContributionFrequency::Annually => input.periodic_contribution,
    };

    let mut total_balance = input.initial_amount;
    let mut total_principal = input.initial_amount;
    let mut snapshots = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        // Compound the existing balance, then credit the year's contributions
        total_balance *= growth_factor;
        total_balance += yearly_contribution;
        total_principal += yearly_contribution;

        snapshots.push(GrowthSnapshot {
            year,
            total_balance,
            total_principal,
            total_interest: total_balance - total_principal,
        });
    }

    GrowthSeries { snapshots }
}
