use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::{LogFormat, ServerConfig},
    i18n::{Locale, Translations},
    router::create_router,
    state::AppState,
};

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "backend_api=debug,calculators=debug,settings_loader=info,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// Loads settings and translations once; they stay fixed for the process lifetime.
pub fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let settings = settings_loader::load_settings_or_default(&config.settings_path)
        .context("Loading calculator settings")?;
    let translations =
        Translations::load(&config.translations_dir).context("Loading translations")?;
    tracing::info!(
        "Translations ready: {} German entries",
        translations.count(Locale::De)
    );

    Ok(AppState::new(settings, translations, config.cookie))
}

/// Run the web server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(config.log_format);

    let state = build_state(&config)?;
    let app = create_router(state, &config);

    let addr = config.listen_addr()?;
    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
