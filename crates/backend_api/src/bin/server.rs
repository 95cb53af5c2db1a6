use backend_api::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is optional; real environment variables take precedence
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    println!("SME Finance Toolkit");
    println!("===================");
    println!("Listening on: {}:{}", config.host, config.port);
    println!("Settings file: {}", config.settings_path.display());
    println!("Translations: {}", config.translations_dir.display());
    println!();

    run_server(config).await
}
