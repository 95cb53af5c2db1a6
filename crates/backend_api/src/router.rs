use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{config::ServerConfig, handlers, pages, state::AppState};

/// Create the main application router with all pages and API endpoints
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Pages
        .route("/", get(pages::index))
        .route("/debt-brake", get(pages::debt_brake))
        .route("/cost-analysis", get(pages::cost_analysis))
        .route("/debt-equity", get(pages::debt_equity))
        .route("/debt-snowball", get(pages::debt_snowball))
        .route("/funding-guidance", get(pages::funding_guidance))
        .route("/covenant-tracking", get(pages::covenant_tracking))
        .route("/about", get(pages::about))
        .route("/donation", get(pages::donation))
        .route("/set_language/:lang", get(pages::set_language))
        // Calculation endpoints
        .route("/api/debt-brake", post(handlers::calculate_debt_brake))
        .route("/api/cost-analysis", post(handlers::calculate_cost_analysis))
        .route("/api/debt-snowball", post(handlers::calculate_debt_snowball))
        .route("/api/funding-guidance", post(handlers::get_funding_guidance))
        .route("/api/covenant-tracking", post(handlers::calculate_covenants))
        // Stylesheet and form script
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(pages::not_found)
        // Add shared state
        .with_state(state)
        // Add middleware
        .layer(DefaultBodyLimit::max(config.max_content_length))
        .layer(CatchPanicLayer::custom(pages::internal_error))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
