use models::{CostAnalysisInput, CostAnalysisResult};

use crate::error::{ensure_finite, CalcError, Result};

/// Total and after-tax cost of an amortizing loan with monthly payments.
///
/// Interest is assumed tax deductible at `tax_rate`, so the after-tax
/// interest is the nominal interest scaled by `1 - tax_rate/100`.
pub fn cost_analysis(input: &CostAnalysisInput) -> Result<CostAnalysisResult> {
    validate(input)?;

    let principal = input.principal;
    let monthly_rate = input.interest_rate / 12.0 / 100.0;
    let num_payments = input.term_years * 12.0;

    let monthly_payment = if monthly_rate > 0.0 {
        annuity_payment(principal, monthly_rate, num_payments)
    } else {
        principal / num_payments
    };

    let total_payment = monthly_payment * num_payments;
    let total_interest = total_payment - principal;
    let after_tax_interest = total_interest * (1.0 - input.tax_rate / 100.0);
    let after_tax_cost = principal + after_tax_interest;
    let effective_rate = after_tax_interest / principal * 100.0;

    tracing::debug!(
        principal,
        monthly_payment,
        total_interest,
        effective_rate,
        "cost analysis computed"
    );

    Ok(CostAnalysisResult {
        monthly_payment,
        total_payment,
        total_interest,
        after_tax_interest,
        after_tax_cost,
        effective_rate,
    })
}

/// Fixed periodic payment that repays `principal` over `periods` at `rate` per period.
pub fn annuity_payment(principal: f64, rate: f64, periods: f64) -> f64 {
    let growth = (1.0 + rate).powf(periods);
    principal * (rate * growth) / (growth - 1.0)
}

fn validate(input: &CostAnalysisInput) -> Result<()> {
    ensure_finite("principal", input.principal)?;
    ensure_finite("interest_rate", input.interest_rate)?;
    ensure_finite("term_years", input.term_years)?;
    ensure_finite("tax_rate", input.tax_rate)?;

    if input.principal <= 0.0 {
        return Err(CalcError::invalid_input("principal", "must be greater than zero"));
    }
    if input.interest_rate < 0.0 {
        return Err(CalcError::invalid_input("interest_rate", "must not be negative"));
    }
    if input.term_years <= 0.0 {
        return Err(CalcError::invalid_input("term_years", "must be greater than zero"));
    }
    if input.tax_rate < 0.0 {
        return Err(CalcError::invalid_input("tax_rate", "must not be negative"));
    }
    Ok(())
}
