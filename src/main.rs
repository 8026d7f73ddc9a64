
mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::*;
use portfolio_client::content::{PORTFOLIO, Portfolio};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "portfolio server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let sections = check_content(&PORTFOLIO)?;
    tracing::debug!(sections, "portfolio content validated");

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let config = ServerConfig::from_env(leptos_options.site_addr.port())?;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Refuse to serve content with duplicate anchors or untitled items.
/// Returns the number of sections.
fn check_content(portfolio: &Portfolio) -> Result<usize, ServerError> {
    portfolio.validate()?;
    Ok(portfolio.sections.len())
}
