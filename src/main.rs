mod app;
mod auth;
mod clock;
mod config;
mod correlation;
mod error;
mod extract;
mod foods;
mod meals;
mod preferences;
mod state;
mod suggestions;
mod symptoms;
#[cfg(test)]
mod testing;
mod window;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    if let Ok(env) = std::env::var("ENVIRONMENT") {
        dotenvy::from_filename(format!(".env.{env}")).ok();
    }

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "bellydiary=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    tracing::info!(
        origins = ?config.cors_allowed_origins,
        timezone = %config.suggestions.timezone,
        verify_tokens = config.jwt.secret.is_some(),
        "configuration loaded"
    );

    let (state, db) = AppState::init(config).await?;

    // Run migrations if present
    if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
        tracing::warn!(error = %e, "migration failed; continuing");
    }

    app::serve(app::build_app(state)).await
}
