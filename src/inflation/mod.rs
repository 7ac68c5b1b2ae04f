//! Purchasing-power adjustment over time
//!
//! Deflates a nominal amount by a constant annual inflation rate and
//! produces the year-by-year real-value series for charting.

use serde::{Deserialize, Serialize};

/// Inputs for an inflation adjustment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationAdjustmentInput {
    /// Amount in today's dollars
    pub nominal_amount: f64,

    /// Annual inflation rate in percent
    pub annual_inflation_rate_percent: f64,

    /// Horizon in whole years
    pub years: u32,
}

/// Real value at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationPoint {
    /// Years from now, 0-based; index 0 is the nominal amount itself
    pub year_index: u32,

    /// Nominal amount deflated to this year's purchasing power
    pub real_value: f64,
}

/// Real-value series over `years + 1` points, indexed 0..=years
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationSeries {
    pub points: Vec<InflationPoint>,
}

impl InflationSeries {
    /// Real value at the end of the horizon
    pub fn adjusted_value(&self) -> f64 {
        // Series always holds at least the index-0 point
        self.points.last().map(|p| p.real_value).unwrap_or(0.0)
    }
}

/// Deflate `nominal_amount` year by year: real(k) = nominal / (1 + r/100)^k.
///
/// `real(0)` is the nominal amount exactly, so the series is never empty;
/// `years = 0` returns just that single point.
pub fn adjust_for_inflation(input: &InflationAdjustmentInput) -> InflationSeries {
    let rate_factor = 1.0 + input.annual_inflation_rate_percent / 100.0;

    let points = (0..=input.years)
        .map(|year_index| InflationPoint {
            year_index,
            real_value: if year_index == 0 {
                input.nominal_amount
            } else {
                input.nominal_amount / rate_factor.powi(year_index as i32)
            },
        })
        .collect();

    InflationSeries { points }
}
