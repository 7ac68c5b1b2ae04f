//! Scalar simple and compound interest
//!
//! These are the one-shot interest figures (no periodic contributions, any
//! standard compounding schedule), separate from the year-by-year projection
//! in `engine`.

use serde::{Deserialize, Serialize};

/// Standard compounding schedules offered by the interest calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingSchedule {
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingSchedule {
    /// Compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingSchedule::Annually => 1,
            CompoundingSchedule::SemiAnnually => 2,
            CompoundingSchedule::Quarterly => 4,
            CompoundingSchedule::Monthly => 12,
            CompoundingSchedule::Daily => 365,
        }
    }
}

/// Simple interest earned: P * r * t / 100
pub fn simple_interest(principal: f64, annual_rate_percent: f64, years: f64) -> f64 {
    principal * annual_rate_percent * years / 100.0
}

/// Compound interest earned (growth only, principal excluded):
/// P * (1 + r/(100 n))^(n t) - P
pub fn compound_interest(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
    schedule: CompoundingSchedule,
) -> f64 {
    let n = schedule.periods_per_year() as f64;
    principal * (1.0 + annual_rate_percent / (100.0 * n)).powf(n * years) - principal
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_interest() {
        assert_relative_eq!(simple_interest(1000.0, 5.0, 1.0), 50.0, epsilon = 1e-9);
        assert_relative_eq!(simple_interest(1000.0, 5.0, 3.0), 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compound_equals_simple_for_one_annual_period() {
        let compound = compound_interest(1000.0, 5.0, 1.0, CompoundingSchedule::Annually);
        assert_relative_eq!(compound, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_more_frequent_compounding_earns_more() {
        let annually = compound_interest(1000.0, 5.0, 10.0, CompoundingSchedule::Annually);
        let monthly = compound_interest(1000.0, 5.0, 10.0, CompoundingSchedule::Monthly);
        let daily = compound_interest(1000.0, 5.0, 10.0, CompoundingSchedule::Daily);
        assert!(monthly > annually);
        assert!(daily > monthly);
    }

    #[test]
    fn test_zero_rate_earns_nothing() {
        assert_relative_eq!(
            compound_interest(1000.0, 0.0, 10.0, CompoundingSchedule::Quarterly),
            0.0,
            epsilon = 1e-12
        );
    }
}
