//! fincalc CLI
//!
//! One subcommand per calculator; prints a fixed-width table and can emit
//! the chart-ready JSON the UI consumes with --json.

use anyhow::Result;
use clap::{Parser, Subcommand};
use fincalc::allocation::{Allocation, AllocationPlan};
use fincalc::chart::{current_year, ChartData};
use fincalc::growth::{CompoundFrequency, CompoundGrowthInput, ContributionFrequency};
use fincalc::inflation::{adjust_for_inflation, InflationAdjustmentInput};
use fincalc::loan::{amortize, LoanAmortizationInput};
use fincalc::retirement::{project_retirement, RetirementInput};
use fincalc::risk::{score_risk, RiskScoreInput};
use fincalc::scenario::ScenarioRunner;

#[derive(Parser)]
#[command(name = "fincalc", about = "Financial projection engine CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit chart-ready JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Year-by-year compound growth projection
    Growth {
        #[arg(long, default_value_t = 4000.0)]
        initial: f64,
        #[arg(long, default_value_t = 100.0)]
        contribution: f64,
        /// Contribution frequency: monthly or annually
        #[arg(long, default_value = "monthly")]
        frequency: String,
        #[arg(long, default_value_t = 6.0)]
        rate: f64,
        #[arg(long, default_value_t = 30)]
        years: u32,
        /// Compounding: monthly or annually
        #[arg(long, default_value = "annually")]
        compounding: String,
    },
    /// Monthly mortgage payment breakdown
    Loan {
        #[arg(long, default_value_t = 300_000.0)]
        price: f64,
        #[arg(long, default_value_t = 60_000.0)]
        down: f64,
        #[arg(long, default_value_t = 30)]
        term: u32,
        #[arg(long, default_value_t = 5.0)]
        rate: f64,
        #[arg(long, default_value_t = 1.2)]
        tax_rate: f64,
        #[arg(long, default_value_t = 0.5)]
        insurance_rate: f64,
    },
    /// Purchasing power of a nominal amount over time
    Inflation {
        #[arg(long, default_value_t = 10_000.0)]
        amount: f64,
        #[arg(long, default_value_t = 3.0)]
        rate: f64,
        #[arg(long, default_value_t = 20)]
        years: u32,
    },
    /// Retirement savings accumulation
    Retirement {
        #[arg(long, default_value_t = 30)]
        current_age: u32,
        #[arg(long, default_value_t = 65)]
        retirement_age: u32,
        #[arg(long, default_value_t = 10_000.0)]
        savings: f64,
        #[arg(long, default_value_t = 500.0)]
        contribution: f64,
        #[arg(long, default_value_t = 7.0)]
        rate: f64,
        #[arg(long, default_value_t = 2.5)]
        inflation: f64,
    },
    /// Risk score and category
    Risk {
        #[arg(long, default_value_t = 5000.0)]
        amount: f64,
        #[arg(long, default_value_t = 10)]
        horizon: u32,
        #[arg(long, default_value_t = 5)]
        tolerance: u32,
    },
    /// Rebalance a four-way allocation and print the plan breakdown
    Allocation {
        #[arg(long, default_value_t = 10_000.0)]
        total: f64,
        /// Asset class to pin: stocks, bonds, real-estate or cash
        #[arg(long)]
        set: Option<String>,
        /// New weight for the pinned class, 0-100
        #[arg(long, default_value_t = 50.0)]
        value: f64,
    },
}

fn parse_contribution_frequency(s: &str) -> Result<ContributionFrequency> {
    match s.to_ascii_lowercase().as_str() {
        "monthly" => Ok(ContributionFrequency::Monthly),
        "annually" => Ok(ContributionFrequency::Annually),
        other => anyhow::bail!("unknown contribution frequency: {}", other),
    }
}

fn parse_compound_frequency(s: &str) -> Result<CompoundFrequency> {
    match s.to_ascii_lowercase().as_str() {
        "monthly" => Ok(CompoundFrequency::Monthly),
        "annually" => Ok(CompoundFrequency::Annually),
        other => anyhow::bail!("unknown compounding frequency: {}", other),
    }
}

fn parse_asset_class(s: &str) -> Result<fincalc::AssetClass> {
    use fincalc::AssetClass;
    match s.to_ascii_lowercase().as_str() {
        "stocks" => Ok(AssetClass::Stocks),
        "bonds" => Ok(AssetClass::Bonds),
        "real-estate" | "realestate" => Ok(AssetClass::RealEstate),
        "cash" => Ok(AssetClass::Cash),
        other => anyhow::bail!("unknown asset class: {}", other),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Growth {
            initial,
            contribution,
            frequency,
            rate,
            years,
            compounding,
        } => {
            let input = CompoundGrowthInput {
                initial_amount: initial,
                periodic_contribution: contribution,
                contribution_frequency: parse_contribution_frequency(&frequency)?,
                annual_rate_percent: rate,
                years,
                compound_frequency: parse_compound_frequency(&compounding)?,
            };
            let series = ScenarioRunner::new().run(&input);

            if cli.json {
                let chart = ChartData::from_growth(&series, current_year());
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                println!("{:>4} {:>14} {:>14} {:>14}", "Year", "Balance", "Principal", "Interest");
                println!("{}", "-".repeat(50));
                for snap in &series.snapshots {
                    println!(
                        "{:>4} {:>14.2} {:>14.2} {:>14.2}",
                        snap.year, snap.total_balance, snap.total_principal, snap.total_interest
                    );
                }
            }
        }
        Command::Loan {
            price,
            down,
            term,
            rate,
            tax_rate,
            insurance_rate,
        } => {
            let result = amortize(&LoanAmortizationInput {
                principal: price,
                down_payment: down,
                term_years: term,
                annual_rate_percent: rate,
                property_tax_rate_percent: tax_rate,
                insurance_rate_percent: insurance_rate,
            });

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Principal & Interest: ${:.2}", result.monthly_principal_and_interest);
                println!("Property Tax:         ${:.2}", result.monthly_tax);
                println!("Insurance:            ${:.2}", result.monthly_insurance);
                println!("Monthly Total:        ${:.2}", result.monthly_total);
            }
        }
        Command::Inflation { amount, rate, years } => {
            let series = adjust_for_inflation(&InflationAdjustmentInput {
                nominal_amount: amount,
                annual_inflation_rate_percent: rate,
                years,
            });

            if cli.json {
                let chart = ChartData::from_inflation(&series);
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                println!("{:>5} {:>14}", "Year", "Real Value");
                println!("{}", "-".repeat(21));
                for point in &series.points {
                    println!("{:>5} {:>14.2}", point.year_index, point.real_value);
                }
                println!(
                    "\nAdjusted value after {} years: ${:.2}",
                    years,
                    series.adjusted_value()
                );
            }
        }
        Command::Retirement {
            current_age,
            retirement_age,
            savings,
            contribution,
            rate,
            inflation,
        } => {
            let result = project_retirement(&RetirementInput {
                current_age,
                retirement_age,
                current_savings: savings,
                monthly_contribution: contribution,
                annual_return_rate_percent: rate,
                annual_inflation_rate_percent: inflation,
            });

            if cli.json {
                let chart = ChartData::from_retirement(&result);
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                println!("Savings at retirement:      ${:.2}", result.future_value);
                println!(
                    "Inflation-adjusted savings: ${:.2}",
                    result.inflation_adjusted_value
                );
            }
        }
        Command::Risk {
            amount,
            horizon,
            tolerance,
        } => {
            let result = score_risk(&RiskScoreInput {
                investment_amount: amount,
                time_horizon_years: horizon,
                risk_tolerance_score: tolerance,
            });

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Risk score: {:.1} ({})", result.score, result.category.as_str());
            }
        }
        Command::Allocation { total, set, value } => {
            let mut allocation = Allocation::default_mix();
            if let Some(class) = set {
                allocation = allocation.rebalance(parse_asset_class(&class)?, value);
            }
            let plan = AllocationPlan::new(total, allocation);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("{:>12} {:>8} {:>12}", "Class", "Weight", "Amount");
                println!("{}", "-".repeat(34));
                println!("{:>12} {:>7.2}% {:>12.2}", "Stocks", plan.allocation.stocks, plan.breakdown.stocks);
                println!("{:>12} {:>7.2}% {:>12.2}", "Bonds", plan.allocation.bonds, plan.breakdown.bonds);
                println!("{:>12} {:>7.2}% {:>12.2}", "Real Estate", plan.allocation.real_estate, plan.breakdown.real_estate);
                println!("{:>12} {:>7.2}% {:>12.2}", "Cash", plan.allocation.cash, plan.breakdown.cash);
            }
        }
    }

    Ok(())
}
