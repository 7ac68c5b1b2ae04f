//! Chart-ready series interchange
//!
//! The UI's charting collaborator consumes `{labels, series}` where each
//! series is a labeled vector of numbers aligned with the labels. The
//! constructors here flatten each engine result into that shape. Growth
//! charts are labeled with calendar years starting from the current year,
//! matching what the calculator pages display.

use crate::growth::GrowthSeries;
use crate::inflation::InflationSeries;
use crate::retirement::RetirementResult;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// One labeled data series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Labels plus one or more aligned series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Current calendar year, used as the first growth-chart label
pub fn current_year() -> i32 {
    Utc::now().year()
}

impl ChartData {
    /// Balance / principal / interest chart labeled with calendar years
    /// `start_year..start_year + years`
    pub fn from_growth(series: &GrowthSeries, start_year: i32) -> Self {
        let labels = (0..series.len())
            .map(|i| (start_year + i as i32).to_string())
            .collect();

        let pick = |f: fn(&crate::growth::GrowthSnapshot) -> f64| -> Vec<f64> {
            series.snapshots.iter().map(f).collect()
        };

        ChartData {
            labels,
            series: vec![
                ChartSeries {
                    label: "Total Balance".to_string(),
                    values: pick(|s| s.total_balance),
                },
                ChartSeries {
                    label: "Total Principal".to_string(),
                    values: pick(|s| s.total_principal),
                },
                ChartSeries {
                    label: "Total Interest".to_string(),
                    values: pick(|s| s.total_interest),
                },
            ],
        }
    }

    /// Purchasing-power chart labeled "0 years", "1 year", "2 years", ...
    pub fn from_inflation(series: &InflationSeries) -> Self {
        let labels = series
            .points
            .iter()
            .map(|p| {
                if p.year_index == 1 {
                    "1 year".to_string()
                } else {
                    format!("{} years", p.year_index)
                }
            })
            .collect();

        ChartData {
            labels,
            series: vec![ChartSeries {
                label: "Adjusted Value (Inflation)".to_string(),
                values: series.points.iter().map(|p| p.real_value).collect(),
            }],
        }
    }

    /// Savings-by-age chart from a retirement projection
    pub fn from_retirement(result: &RetirementResult) -> Self {
        ChartData {
            labels: result
                .yearly_balances
                .iter()
                .map(|s| s.age.to_string())
                .collect(),
            series: vec![ChartSeries {
                label: "Savings Over Time ($)".to_string(),
                values: result.yearly_balances.iter().map(|s| s.balance).collect(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::{
        project_growth, CompoundFrequency, CompoundGrowthInput, ContributionFrequency,
    };
    use crate::inflation::{adjust_for_inflation, InflationAdjustmentInput};
    use crate::retirement::{project_retirement, RetirementInput};

    #[test]
    fn test_growth_chart_shape() {
        let series = project_growth(&CompoundGrowthInput {
            initial_amount: 4000.0,
            periodic_contribution: 100.0,
            contribution_frequency: ContributionFrequency::Monthly,
            annual_rate_percent: 6.0,
            years: 3,
            compound_frequency: CompoundFrequency::Annually,
        });
        let chart = ChartData::from_growth(&series, 2026);

        assert_eq!(chart.labels, vec!["2026", "2027", "2028"]);
        assert_eq!(chart.series.len(), 3);
        for s in &chart.series {
            assert_eq!(s.values.len(), chart.labels.len());
        }
    }

    #[test]
    fn test_inflation_chart_labels() {
        let series = adjust_for_inflation(&InflationAdjustmentInput {
            nominal_amount: 1000.0,
            annual_inflation_rate_percent: 2.0,
            years: 2,
        });
        let chart = ChartData::from_inflation(&series);
        assert_eq!(chart.labels, vec!["0 years", "1 year", "2 years"]);
        assert_eq!(chart.series[0].values[0], 1000.0);
    }

    #[test]
    fn test_retirement_chart_ages() {
        let result = project_retirement(&RetirementInput {
            current_age: 60,
            retirement_age: 63,
            current_savings: 1000.0,
            monthly_contribution: 0.0,
            annual_return_rate_percent: 0.0,
            annual_inflation_rate_percent: 0.0,
        });
        let chart = ChartData::from_retirement(&result);
        assert_eq!(chart.labels, vec!["60", "61", "62", "63"]);
        assert_eq!(chart.series[0].values.len(), 4);
    }
}
