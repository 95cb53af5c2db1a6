use models::{Debt, DebtSnowballInput, DebtSnowballResult, PrioritizedDebt};

use crate::error::{ensure_finite, CalcError, Result};

/// Orders debts for repayment, highest interest rate first.
///
/// The sort is stable: debts sharing a rate keep their input order.
pub fn debt_snowball(input: &DebtSnowballInput) -> Result<DebtSnowballResult> {
    for (index, debt) in input.debts.iter().enumerate() {
        validate(index, debt)?;
    }

    let mut ordered: Vec<&Debt> = input.debts.iter().collect();
    ordered.sort_by(|a, b| b.interest_rate.total_cmp(&a.interest_rate));

    let prioritized_debts: Vec<PrioritizedDebt> = ordered
        .into_iter()
        .enumerate()
        .map(|(i, debt)| PrioritizedDebt {
            debt_id: i + 1,
            principal: debt.principal,
            interest_rate: debt.interest_rate,
            minimum_payment: debt.minimum_payment,
            payoff_months: payoff_months(debt),
            priority: i + 1,
        })
        .collect();

    tracing::debug!(debts = prioritized_debts.len(), "debt snowball prioritized");

    Ok(DebtSnowballResult {
        prioritized_debts,
        total_interest_saved: 0.0,
    })
}

/// Months to repay a debt at its minimum payment.
pub fn payoff_months(debt: &Debt) -> f64 {
    let monthly_rate = debt.interest_rate / 12.0 / 100.0;
    let payments = debt.principal / debt.minimum_payment;

    if monthly_rate > 0.0 {
        -(1.0 / monthly_rate) * (1.0 - (1.0 + monthly_rate).powf(-payments))
    } else {
        payments
    }
}

fn validate(index: usize, debt: &Debt) -> Result<()> {
    let field = |name: &str| format!("debts[{}].{}", index, name);

    ensure_finite(&field("principal"), debt.principal)?;
    ensure_finite(&field("interest_rate"), debt.interest_rate)?;
    ensure_finite(&field("minimum_payment"), debt.minimum_payment)?;

    if debt.principal < 0.0 {
        return Err(CalcError::invalid_input(field("principal"), "must not be negative"));
    }
    if debt.interest_rate < 0.0 {
        return Err(CalcError::invalid_input(field("interest_rate"), "must not be negative"));
    }
    if debt.minimum_payment <= 0.0 {
        return Err(CalcError::invalid_input(
            field("minimum_payment"),
            "must be greater than zero",
        ));
    }
    Ok(())
}
