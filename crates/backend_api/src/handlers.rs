use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use chrono::{SecondsFormat, Utc};
use models::{
    CostAnalysisInput, CostAnalysisResult, CovenantInput, CovenantResult, DebtBrakeInput,
    DebtBrakeResult, DebtSnowballInput, DebtSnowballResult, FundingGuidanceInput,
    FundingGuidanceResult,
};

use crate::{state::AppState, Result};

/// POST /api/debt-brake
/// Returns the debt ceiling for the given annual revenue
pub async fn calculate_debt_brake(
    payload: std::result::Result<Json<DebtBrakeInput>, JsonRejection>,
) -> Result<Json<DebtBrakeResult>> {
    let Json(input) = payload?;
    Ok(Json(calculators::debt_brake(&input)))
}

/// POST /api/cost-analysis
/// Returns monthly payment, total and after-tax cost of a loan
pub async fn calculate_cost_analysis(
    payload: std::result::Result<Json<CostAnalysisInput>, JsonRejection>,
) -> Result<Json<CostAnalysisResult>> {
    let Json(input) = payload?;
    let result = calculators::cost_analysis(&input)?;
    Ok(Json(result))
}

/// POST /api/debt-snowball
/// Returns the debts in repayment order, highest interest rate first
pub async fn calculate_debt_snowball(
    payload: std::result::Result<Json<DebtSnowballInput>, JsonRejection>,
) -> Result<Json<DebtSnowballResult>> {
    let Json(input) = payload?;
    let result = calculators::debt_snowball(&input)?;
    Ok(Json(result))
}

/// POST /api/funding-guidance
/// Returns the funding programs matching the company size
pub async fn get_funding_guidance(
    State(state): State<AppState>,
    payload: std::result::Result<Json<FundingGuidanceInput>, JsonRejection>,
) -> Result<Json<FundingGuidanceResult>> {
    let Json(input) = payload?;
    let result = calculators::funding_guidance(&input, &state.settings.funding_programs);
    Ok(Json(result))
}

/// POST /api/covenant-tracking
/// Returns each covenant ratio with its threshold and the overall compliance
pub async fn calculate_covenants(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CovenantInput>, JsonRejection>,
) -> Result<Json<CovenantResult>> {
    let Json(input) = payload?;
    let result = calculators::covenant_tracking(&input, &state.settings.covenant_thresholds);
    Ok(Json(result))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
