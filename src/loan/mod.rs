//! Loan amortization for housing affordability
//!
//! Standard fixed-rate annuity payment plus escrowed property tax and
//! insurance. Tax and insurance are assessed against the full purchase
//! price, not the declining loan balance; that is the product's policy
//! and is preserved here.

use serde::{Deserialize, Serialize};

/// Inputs for a mortgage-style amortization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAmortizationInput {
    /// Full purchase price
    pub principal: f64,

    /// Up-front payment, <= principal
    pub down_payment: f64,

    /// Loan term in whole years
    pub term_years: u32,

    /// Annual interest rate in percent
    pub annual_rate_percent: f64,

    /// Annual property tax rate in percent of purchase price
    pub property_tax_rate_percent: f64,

    /// Annual insurance rate in percent of purchase price
    pub insurance_rate_percent: f64,
}

/// Monthly payment breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub monthly_principal_and_interest: f64,
    pub monthly_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_total: f64,
}

/// Compute the monthly payment breakdown for a fixed-rate loan.
///
/// A zero interest rate falls back to straight-line repayment
/// (loan / payments); the annuity formula divides by zero there.
pub fn amortize(input: &LoanAmortizationInput) -> AmortizationResult {
    let loan_amount = input.principal - input.down_payment;
    let monthly_rate = input.annual_rate_percent / 100.0 / 12.0;
    let total_payments = (input.term_years * 12) as f64;

    let monthly_principal_and_interest = if monthly_rate == 0.0 {
        loan_amount / total_payments
    } else {
        let growth = (1.0 + monthly_rate).powf(total_payments);
        loan_amount * monthly_rate * growth / (growth - 1.0)
    };

    let monthly_tax = input.principal * input.property_tax_rate_percent / 100.0 / 12.0;
    let monthly_insurance = input.principal * input.insurance_rate_percent / 100.0 / 12.0;

    AmortizationResult {
        monthly_principal_and_interest,
        monthly_tax,
        monthly_insurance,
        monthly_total: monthly_principal_and_interest + monthly_tax + monthly_insurance,
    }
}
