use models::{CovenantCheck, CovenantInput, CovenantResult, CovenantThresholds, Covenants};

/// Evaluates the borrower's ratios against the covenant thresholds.
///
/// A ratio whose denominator is zero or negative is reported as 0 rather
/// than failing the request.
pub fn covenant_tracking(input: &CovenantInput, thresholds: &CovenantThresholds) -> CovenantResult {
    let debt_to_ebitda = ratio(input.total_debt, input.ebitda);
    let current_ratio = ratio(input.current_assets, input.current_liabilities);
    let debt_to_equity = ratio(input.total_debt, input.net_worth);

    let covenants = Covenants {
        debt_to_ebitda: at_most(
            debt_to_ebitda,
            thresholds.max_debt_to_ebitda,
            "Debt-to-EBITDA Ratio",
        ),
        current_ratio: at_least(current_ratio, thresholds.min_current_ratio, "Current Ratio"),
        debt_to_equity: at_most(
            debt_to_equity,
            thresholds.max_debt_to_equity,
            "Debt-to-Equity Ratio",
        ),
    };
    let overall_compliant = covenants.all_compliant();

    tracing::debug!(
        debt_to_ebitda,
        current_ratio,
        debt_to_equity,
        overall_compliant,
        "covenants evaluated"
    );

    CovenantResult {
        covenants,
        overall_compliant,
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn at_most(value: f64, threshold: f64, description: &str) -> CovenantCheck {
    CovenantCheck {
        value,
        threshold,
        compliant: value <= threshold,
        description: description.to_string(),
    }
}

fn at_least(value: f64, threshold: f64, description: &str) -> CovenantCheck {
    CovenantCheck {
        value,
        threshold,
        compliant: value >= threshold,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn financials() -> CovenantInput {
        CovenantInput {
            total_debt: 300.0,
            ebitda: 100.0,
            current_assets: 150.0,
            current_liabilities: 100.0,
            net_worth: 200.0,
        }
    }

    #[test]
    fn test_compliant_borrower_at_boundary() {
        let result = covenant_tracking(&financials(), &CovenantThresholds::default());

        assert_eq!(result.covenants.debt_to_ebitda.value, 3.0);
        assert!(result.covenants.debt_to_ebitda.compliant);
        assert_eq!(result.covenants.current_ratio.value, 1.5);
        assert!(result.covenants.current_ratio.compliant);
        assert_eq!(result.covenants.debt_to_equity.value, 1.5);
        assert!(result.covenants.debt_to_equity.compliant);
        assert!(result.overall_compliant);
    }

    #[test]
    fn test_thresholds_and_descriptions_are_reported() {
        let result = covenant_tracking(&financials(), &CovenantThresholds::default());

        assert_eq!(result.covenants.debt_to_ebitda.threshold, 3.0);
        assert_eq!(result.covenants.current_ratio.threshold, 1.2);
        assert_eq!(result.covenants.debt_to_equity.threshold, 2.0);
        assert_eq!(result.covenants.debt_to_ebitda.description, "Debt-to-EBITDA Ratio");
        assert_eq!(result.covenants.current_ratio.description, "Current Ratio");
        assert_eq!(result.covenants.debt_to_equity.description, "Debt-to-Equity Ratio");
    }

    #[test]
    fn test_zero_ebitda_yields_zero_ratio() {
        let mut input = financials();
        input.ebitda = 0.0;
        let result = covenant_tracking(&input, &CovenantThresholds::default());

        assert_eq!(result.covenants.debt_to_ebitda.value, 0.0);
        assert!(result.covenants.debt_to_ebitda.compliant);
    }

    #[test]
    fn test_missing_liabilities_breaches_current_ratio() {
        let mut input = financials();
        input.current_liabilities = 0.0;
        let result = covenant_tracking(&input, &CovenantThresholds::default());

        assert_eq!(result.covenants.current_ratio.value, 0.0);
        assert!(!result.covenants.current_ratio.compliant);
        assert!(!result.overall_compliant);
    }

    #[test]
    fn test_single_breach_fails_overall() {
        let mut input = financials();
        input.net_worth = 100.0;
        let result = covenant_tracking(&input, &CovenantThresholds::default());

        assert_eq!(result.covenants.debt_to_equity.value, 3.0);
        assert!(!result.covenants.debt_to_equity.compliant);
        assert!(!result.overall_compliant);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = CovenantThresholds {
            max_debt_to_ebitda: 2.5,
            ..CovenantThresholds::default()
        };
        let result = covenant_tracking(&financials(), &thresholds);

        assert_eq!(result.covenants.debt_to_ebitda.threshold, 2.5);
        assert!(!result.covenants.debt_to_ebitda.compliant);
        assert!(!result.overall_compliant);
    }
}
