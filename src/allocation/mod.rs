//! Portfolio allocation rebalancing and plan export
//!
//! Four asset-class weights that always sum to 100. Moving one slider pins
//! that weight and splits the remainder equally across the other three.

use serde::{Deserialize, Serialize};

/// The four asset classes in an allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    Stocks,
    Bonds,
    RealEstate,
    Cash,
}

impl AssetClass {
    pub const ALL: [AssetClass; 4] = [
        AssetClass::Stocks,
        AssetClass::Bonds,
        AssetClass::RealEstate,
        AssetClass::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Stocks => "Stocks",
            AssetClass::Bonds => "Bonds",
            AssetClass::RealEstate => "RealEstate",
            AssetClass::Cash => "Cash",
        }
    }
}

/// Percentage weights per asset class; invariant: sums to 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub stocks: f64,
    pub bonds: f64,
    pub real_estate: f64,
    pub cash: f64,
}

impl Allocation {
    /// 50/30/10/10 starting allocation
    pub fn default_mix() -> Self {
        Self {
            stocks: 50.0,
            bonds: 30.0,
            real_estate: 10.0,
            cash: 10.0,
        }
    }

    pub fn get(&self, class: AssetClass) -> f64 {
        match class {
            AssetClass::Stocks => self.stocks,
            AssetClass::Bonds => self.bonds,
            AssetClass::RealEstate => self.real_estate,
            AssetClass::Cash => self.cash,
        }
    }

    fn set(&mut self, class: AssetClass, value: f64) {
        match class {
            AssetClass::Stocks => self.stocks = value,
            AssetClass::Bonds => self.bonds = value,
            AssetClass::RealEstate => self.real_estate = value,
            AssetClass::Cash => self.cash = value,
        }
    }

    pub fn total(&self) -> f64 {
        self.stocks + self.bonds + self.real_estate + self.cash
    }

    /// Pin `changed` to `new_value` (expected in [0, 100]) and split the
    /// remainder equally across the other three classes, each clamped to
    /// [0, remainder]. The result sums to 100 up to float error.
    pub fn rebalance(&self, changed: AssetClass, new_value: f64) -> Allocation {
        let remaining = 100.0 - new_value;
        let share = (remaining / 3.0).clamp(0.0, remaining.max(0.0));

        let mut next = *self;
        next.set(changed, new_value);
        for class in AssetClass::ALL {
            if class != changed {
                next.set(class, share);
            }
        }
        next
    }
}

/// Exportable allocation plan document: total, weights, dollar breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub total_investment: f64,
    pub allocation: Allocation,
    pub breakdown: PlanBreakdown,
}

/// Dollar amount per asset class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanBreakdown {
    pub stocks: f64,
    pub bonds: f64,
    pub real_estate: f64,
    pub cash: f64,
}

impl AllocationPlan {
    /// Build the plan document: breakdown[k] = total * allocation[k] / 100
    pub fn new(total_investment: f64, allocation: Allocation) -> Self {
        Self {
            total_investment,
            allocation,
            breakdown: PlanBreakdown {
                stocks: total_investment * allocation.stocks / 100.0,
                bonds: total_investment * allocation.bonds / 100.0,
                real_estate: total_investment * allocation.real_estate / 100.0,
                cash: total_investment * allocation.cash / 100.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_default_mix_sums_to_100() {
        assert_relative_eq!(Allocation::default_mix().total(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rebalance_pins_changed_key() {
        let next = Allocation::default_mix().rebalance(AssetClass::Stocks, 70.0);
        assert_relative_eq!(next.stocks, 70.0, epsilon = 1e-9);
        assert_relative_eq!(next.bonds, 10.0, epsilon = 1e-9);
        assert_relative_eq!(next.real_estate, 10.0, epsilon = 1e-9);
        assert_relative_eq!(next.cash, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sum_invariant_across_slider_values() {
        let start = Allocation::default_mix();
        for class in AssetClass::ALL {
            for value in [0.0, 1.0, 33.3, 50.0, 99.9, 100.0] {
                let next = start.rebalance(class, value);
                assert_abs_diff_eq!(next.total(), 100.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_rebalance_to_100_zeroes_the_rest() {
        let next = Allocation::default_mix().rebalance(AssetClass::Cash, 100.0);
        assert_relative_eq!(next.cash, 100.0, epsilon = 1e-9);
        assert_relative_eq!(next.stocks, 0.0, epsilon = 1e-9);
        assert_relative_eq!(next.bonds, 0.0, epsilon = 1e-9);
        assert_relative_eq!(next.real_estate, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rebalance_is_chainable() {
        let next = Allocation::default_mix()
            .rebalance(AssetClass::Stocks, 40.0)
            .rebalance(AssetClass::Bonds, 25.0);
        assert_relative_eq!(next.bonds, 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(next.total(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_plan_breakdown() {
        let plan = AllocationPlan::new(10_000.0, Allocation::default_mix());
        assert_relative_eq!(plan.breakdown.stocks, 5000.0, epsilon = 1e-9);
        assert_relative_eq!(plan.breakdown.bonds, 3000.0, epsilon = 1e-9);
        assert_relative_eq!(plan.breakdown.real_estate, 1000.0, epsilon = 1e-9);
        assert_relative_eq!(plan.breakdown.cash, 1000.0, epsilon = 1e-9);

        let total: f64 = plan.breakdown.stocks
            + plan.breakdown.bonds
            + plan.breakdown.real_estate
            + plan.breakdown.cash;
        assert_abs_diff_eq!(total, plan.total_investment, epsilon = 1e-6);
    }

    #[test]
    fn test_plan_serializes_to_json_document() {
        let plan = AllocationPlan::new(10_000.0, Allocation::default_mix());
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["total_investment"], 10_000.0);
        assert_eq!(json["breakdown"]["stocks"], 5000.0);
    }
}
