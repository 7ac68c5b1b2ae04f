//! Retirement savings accumulation
//!
//! Month-by-month accumulation: each month the contribution is credited
//! first and then one month of growth is applied, so a contribution earns
//! growth in the month it is made. That ordering is the opposite of the
//! yearly growth projection in [`crate::growth`] and the two must stay
//! separate functions.

mod planner;

pub use planner::{plan_retirement, AssetProjection, PlannerInput, PlannerResult};

use serde::{Deserialize, Serialize};

/// Inputs for a retirement savings projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,

    /// Balance already saved
    pub current_savings: f64,

    /// Contribution credited at the start of every month
    pub monthly_contribution: f64,

    /// Annual return rate in percent, compounded monthly at rate/12
    pub annual_return_rate_percent: f64,

    /// Annual inflation rate in percent, used to deflate the final value
    pub annual_inflation_rate_percent: f64,
}

/// Savings balance at one year-end (age) boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsSnapshot {
    /// Attained age at this snapshot
    pub age: u32,

    /// Balance after that year's twelve contribution/growth steps
    pub balance: f64,
}

/// Result of a retirement savings projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementResult {
    /// Nominal balance at retirement
    pub future_value: f64,

    /// Future value deflated by inflation over the accumulation years
    pub inflation_adjusted_value: f64,

    /// Year-end balances from current age (the starting balance) through
    /// retirement age, for charting; length = years + 1
    pub yearly_balances: Vec<SavingsSnapshot>,
}

/// Accumulate savings month by month until retirement age.
///
/// `retirement_age <= current_age` runs zero months: the result is the
/// current savings, undeflated, with a single snapshot.
pub fn project_retirement(input: &RetirementInput) -> RetirementResult {
    let years = input.retirement_age.saturating_sub(input.current_age);
    let monthly_rate = input.annual_return_rate_percent / 100.0 / 12.0;

    let mut future_value = input.current_savings;
    let mut yearly_balances = Vec::with_capacity(years as usize + 1);
    yearly_balances.push(SavingsSnapshot {
        age: input.current_age,
        balance: future_value,
    });

    for month in 1..=years * 12 {
        future_value += input.monthly_contribution;
        future_value *= 1.0 + monthly_rate;

        if month % 12 == 0 {
            yearly_balances.push(SavingsSnapshot {
                age: input.current_age + month / 12,
                balance: future_value,
            });
        }
    }

    let inflation_factor =
        (1.0 + input.annual_inflation_rate_percent / 100.0).powi(years as i32);

    RetirementResult {
        future_value,
        inflation_adjusted_value: future_value / inflation_factor,
        yearly_balances,
    }
}
