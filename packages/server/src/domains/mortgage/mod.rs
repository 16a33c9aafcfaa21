//! Mortgage payment estimation.
//!
//! Standard fixed-rate amortization. The calculator UI lives on the client;
//! this is the math behind it, kept pure so it can be checked against
//! known-good fixtures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Loan terms as entered by a prospective buyer.
#[derive(Debug, Clone, Deserialize)]
pub struct MortgageTerms {
    /// Purchase price in dollars.
    pub price: f64,
    /// Down payment in dollars.
    pub down_payment: f64,
    /// Annual interest rate in percent (6.0 means 6%).
    pub annual_rate_pct: f64,
    /// Loan term in years.
    pub term_years: u32,
}

/// Computed estimate for a fixed-rate loan.
#[derive(Debug, Clone, Serialize)]
pub struct MortgageEstimate {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_paid: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum MortgageError {
    #[error("purchase price must be greater than zero")]
    NonPositivePrice,
    #[error("down payment cannot be negative")]
    NegativeDownPayment,
    #[error("down payment cannot exceed the purchase price")]
    DownPaymentExceedsPrice,
    #[error("interest rate cannot be negative")]
    NegativeRate,
    #[error("loan term must be at least one year")]
    ZeroTerm,
}

/// Round a dollar amount to cents.
fn to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Estimate the monthly payment and lifetime cost for the given terms.
pub fn estimate(terms: &MortgageTerms) -> Result<MortgageEstimate, MortgageError> {
    if terms.price <= 0.0 {
        return Err(MortgageError::NonPositivePrice);
    }
    if terms.down_payment < 0.0 {
        return Err(MortgageError::NegativeDownPayment);
    }
    if terms.down_payment > terms.price {
        return Err(MortgageError::DownPaymentExceedsPrice);
    }
    if terms.annual_rate_pct < 0.0 {
        return Err(MortgageError::NegativeRate);
    }
    if terms.term_years == 0 {
        return Err(MortgageError::ZeroTerm);
    }

    let loan_amount = terms.price - terms.down_payment;
    let months = f64::from(terms.term_years * 12);
    let monthly_rate = terms.annual_rate_pct / 100.0 / 12.0;

    let monthly_payment = if monthly_rate == 0.0 {
        loan_amount / months
    } else {
        // M = P * r / (1 - (1 + r)^-n)
        loan_amount * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-months))
    };

    let monthly_payment = to_cents(monthly_payment);
    let total_paid = to_cents(monthly_payment * months);

    Ok(MortgageEstimate {
        loan_amount: to_cents(loan_amount),
        monthly_payment,
        total_interest: to_cents(total_paid - loan_amount),
        total_paid,
    })
}
