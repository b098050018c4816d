use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bmspa_faq_chatbot::{build_app, config::AppConfig, gemini::GeminiClient, AppState, SERVICE_NAME};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing GEMINI_API_KEY refuses to start.
    let config = AppConfig::from_env()?;

    let generator = Arc::new(GeminiClient::new(&config.gemini)?);
    let state = AppState { generator };

    let app = build_app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("{SERVICE_NAME} listening on http://{addr}");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
