//! Retirement corpus planner
//!
//! Lump-sum future values per asset class, the corpus required to fund
//! retirement expenses, and the surplus or shortfall between the two.

use serde::{Deserialize, Serialize};

/// Inputs for the corpus planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,

    /// Expenses per year in today's dollars
    pub annual_expenses: f64,

    /// Annual inflation in percent applied until retirement
    pub inflation_before_retirement_percent: f64,

    /// Annual inflation in percent applied during retirement
    pub inflation_during_retirement_percent: f64,

    pub current_equity: f64,
    pub equity_return_percent: f64,

    pub current_taxable_fixed_income: f64,
    pub taxable_fixed_income_return_percent: f64,

    pub current_tax_free_fixed_income: f64,
    pub tax_free_fixed_income_return_percent: f64,

    /// Monthly provident-fund contribution; one year of contributions is
    /// treated as a lump sum growing at the provident rate
    pub monthly_provident_contribution: f64,
    pub provident_return_percent: f64,

    /// One-time benefits received at retirement (gratuity, maturity payouts)
    pub lump_sum_benefits: f64,
}

/// Future value of one asset class at retirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetProjection {
    pub label: String,
    pub current_value: f64,
    pub future_value: f64,
}

/// Corpus planner output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerResult {
    /// Per-class future values at retirement
    pub assets: Vec<AssetProjection>,

    /// Sum of asset future values plus lump-sum benefits
    pub total_future_value: f64,

    /// Monthly expenses at retirement, inflated from today's figure
    pub monthly_expenses_at_retirement: f64,

    /// Capital required to fund expenses through life expectancy
    pub corpus_required: f64,

    /// total_future_value - corpus_required; negative is a shortfall
    pub surplus: f64,

    /// Total projected value at each age from current age to retirement,
    /// for charting; length = years to retirement + 1
    pub yearly_totals: Vec<f64>,
}

/// Lump-sum future value: amount * (1 + r/100)^years.
/// `years = 0` returns the amount unchanged.
pub fn future_value(amount: f64, annual_rate_percent: f64, years: u32) -> f64 {
    amount * (1.0 + annual_rate_percent / 100.0).powi(years as i32)
}

/// Project all asset classes to retirement and compare against the corpus
/// required to fund retirement expenses.
pub fn plan_retirement(input: &PlannerInput) -> PlannerResult {
    let years_to_retirement = input.retirement_age.saturating_sub(input.current_age);
    let years_in_retirement = input.life_expectancy.saturating_sub(input.retirement_age);

    let total_at = |years: u32| -> f64 {
        future_value(input.current_equity, input.equity_return_percent, years)
            + future_value(
                input.current_taxable_fixed_income,
                input.taxable_fixed_income_return_percent,
                years,
            )
            + future_value(
                input.current_tax_free_fixed_income,
                input.tax_free_fixed_income_return_percent,
                years,
            )
            + future_value(
                input.monthly_provident_contribution * 12.0,
                input.provident_return_percent,
                years,
            )
            + input.lump_sum_benefits
    };

    let assets = vec![
        AssetProjection {
            label: "Equity".to_string(),
            current_value: input.current_equity,
            future_value: future_value(
                input.current_equity,
                input.equity_return_percent,
                years_to_retirement,
            ),
        },
        AssetProjection {
            label: "Taxable Fixed Income".to_string(),
            current_value: input.current_taxable_fixed_income,
            future_value: future_value(
                input.current_taxable_fixed_income,
                input.taxable_fixed_income_return_percent,
                years_to_retirement,
            ),
        },
        AssetProjection {
            label: "Tax-Free Fixed Income".to_string(),
            current_value: input.current_tax_free_fixed_income,
            future_value: future_value(
                input.current_tax_free_fixed_income,
                input.tax_free_fixed_income_return_percent,
                years_to_retirement,
            ),
        },
        AssetProjection {
            label: "Provident Fund".to_string(),
            current_value: input.monthly_provident_contribution * 12.0,
            future_value: future_value(
                input.monthly_provident_contribution * 12.0,
                input.provident_return_percent,
                years_to_retirement,
            ),
        },
    ];

    let total_future_value = total_at(years_to_retirement);

    let monthly_expenses_at_retirement = input.annual_expenses / 12.0
        * (1.0 + input.inflation_before_retirement_percent / 100.0)
            .powi(years_to_retirement as i32);

    let corpus_required = monthly_expenses_at_retirement
        * 12.0
        * years_in_retirement as f64
        * (1.0 + input.inflation_during_retirement_percent / 100.0)
            .powi(years_in_retirement as i32);

    let yearly_totals = (0..=years_to_retirement).map(total_at).collect();

    PlannerResult {
        assets,
        total_future_value,
        monthly_expenses_at_retirement,
        corpus_required,
        surplus: total_future_value - corpus_required,
        yearly_totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_input() -> PlannerInput {
        PlannerInput {
            current_age: 35,
            retirement_age: 60,
            life_expectancy: 80,
            annual_expenses: 25_000.0,
            inflation_before_retirement_percent: 8.0,
            inflation_during_retirement_percent: 8.0,
            current_equity: 100_000.0,
            equity_return_percent: 14.0,
            current_taxable_fixed_income: 300_000.0,
            taxable_fixed_income_return_percent: 6.0,
            current_tax_free_fixed_income: 300_000.0,
            tax_free_fixed_income_return_percent: 8.0,
            monthly_provident_contribution: 8_000.0,
            provident_return_percent: 8.0,
            lump_sum_benefits: 500_000.0,
        }
    }

    #[test]
    fn test_future_value_zero_years_is_identity() {
        assert_relative_eq!(future_value(1234.5, 14.0, 0), 1234.5, epsilon = 1e-12);
    }

    #[test]
    fn test_future_value_compounds_annually() {
        assert_relative_eq!(
            future_value(1000.0, 10.0, 3),
            1331.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_total_includes_lump_sum() {
        let result = plan_retirement(&base_input());
        let asset_sum: f64 = result.assets.iter().map(|a| a.future_value).sum();
        assert_relative_eq!(
            result.total_future_value,
            asset_sum + 500_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_yearly_totals_span_accumulation_years() {
        let result = plan_retirement(&base_input());
        assert_eq!(result.yearly_totals.len(), 26);
        // Year 0 is current holdings plus lump sum, ungrown
        assert_relative_eq!(
            result.yearly_totals[0],
            100_000.0 + 300_000.0 + 300_000.0 + 96_000.0 + 500_000.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            *result.yearly_totals.last().unwrap(),
            result.total_future_value,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_corpus_formula() {
        let input = base_input();
        let result = plan_retirement(&input);
        let monthly = 25_000.0 / 12.0 * 1.08f64.powi(25);
        let expected_corpus = monthly * 12.0 * 20.0 * 1.08f64.powi(20);
        assert_relative_eq!(result.monthly_expenses_at_retirement, monthly, epsilon = 1e-6);
        assert_relative_eq!(result.corpus_required, expected_corpus, epsilon = 1e-3);
        assert_relative_eq!(
            result.surplus,
            result.total_future_value - result.corpus_required,
            epsilon = 1e-6
        );
    }
}
