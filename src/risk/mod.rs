//! Investment risk scoring
//!
//! Weighted score over amount, horizon, and stated tolerance, bucketed
//! into a category by fixed thresholds. Input ranges are the caller's
//! responsibility; the score itself is total over all finite inputs.

use serde::{Deserialize, Serialize};

/// Inputs for a risk score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScoreInput {
    /// Amount to be invested, >= 0
    pub investment_amount: f64,

    /// Horizon in whole years, >= 1
    pub time_horizon_years: u32,

    /// Self-assessed tolerance on a 1-10 scale
    pub risk_tolerance_score: u32,
}

/// Risk category derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    /// score < 3
    Low,
    /// 3 <= score < 7
    Moderate,
    /// score >= 7
    High,
}

impl RiskCategory {
    /// Bucket a score by the fixed thresholds
    pub fn from_score(score: f64) -> Self {
        if score < 3.0 {
            RiskCategory::Low
        } else if score < 7.0 {
            RiskCategory::Moderate
        } else {
            RiskCategory::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::High => "High",
        }
    }
}

/// Scored result with its category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScoreResult {
    /// Weighted score, rounded half-up to one decimal place
    pub score: f64,
    pub category: RiskCategory,
}

/// Score: (amount/1000) * 0.4 + horizon * 0.3 + tolerance * 0.3,
/// rounded to one decimal.
pub fn score_risk(input: &RiskScoreInput) -> RiskScoreResult {
    let raw = input.investment_amount / 1000.0 * 0.4
        + input.time_horizon_years as f64 * 0.3
        + input.risk_tolerance_score as f64 * 0.3;

    // Half-up to one decimal; scores are non-negative so round() matches
    let score = (raw * 10.0).round() / 10.0;

    RiskScoreResult {
        score,
        category: RiskCategory::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_score() {
        // (5000/1000)*0.4 + 10*0.3 + 5*0.3 = 2 + 3 + 1.5 = 6.5
        let result = score_risk(&RiskScoreInput {
            investment_amount: 5000.0,
            time_horizon_years: 10,
            risk_tolerance_score: 5,
        });
        assert_relative_eq!(result.score, 6.5, epsilon = 1e-9);
        assert_eq!(result.category, RiskCategory::Moderate);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let result = score_risk(&RiskScoreInput {
            investment_amount: 1111.0,
            time_horizon_years: 1,
            risk_tolerance_score: 1,
        });
        // raw = 0.4444 + 0.3 + 0.3 = 1.0444 -> 1.0
        assert_relative_eq!(result.score, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(RiskCategory::from_score(2.9), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(3.0), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(6.9), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(7.0), RiskCategory::High);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(RiskCategory::Low.as_str(), "Low");
        assert_eq!(RiskCategory::Moderate.as_str(), "Moderate");
        assert_eq!(RiskCategory::High.as_str(), "High");
    }

    #[test]
    fn test_zero_amount_scores_on_horizon_and_tolerance() {
        let result = score_risk(&RiskScoreInput {
            investment_amount: 0.0,
            time_horizon_years: 1,
            risk_tolerance_score: 1,
        });
        assert_relative_eq!(result.score, 0.6, epsilon = 1e-9);
        assert_eq!(result.category, RiskCategory::Low);
    }
}
