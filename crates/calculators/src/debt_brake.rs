use models::{DebtBrakeInput, DebtBrakeResult};

/// Share of annual revenue allowed as new debt, in percent.
pub const DEBT_BRAKE_PERCENTAGE: f64 = 0.35;
const DEBT_BRAKE_RATE: f64 = 0.0035;

/// Debt ceiling modelled on Germany's debt brake, applied to SME revenue.
pub fn debt_brake(input: &DebtBrakeInput) -> DebtBrakeResult {
    let debt_limit = input.revenue * DEBT_BRAKE_RATE;
    tracing::debug!(revenue = input.revenue, debt_limit, "debt brake computed");

    DebtBrakeResult {
        debt_limit,
        revenue: input.revenue,
        percentage: DEBT_BRAKE_PERCENTAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_limit_is_fraction_of_revenue() {
        for revenue in [0.0, 1.0, 1_000_000.0, 123_456.78] {
            let result = debt_brake(&DebtBrakeInput { revenue });
            assert_eq!(result.debt_limit, revenue * 0.0035);
            assert_eq!(result.revenue, revenue);
            assert_eq!(result.percentage, 0.35);
        }
    }

    #[test]
    fn test_missing_revenue_yields_zero_limit() {
        let result = debt_brake(&DebtBrakeInput::default());
        assert_eq!(result.debt_limit, 0.0);
    }
}
