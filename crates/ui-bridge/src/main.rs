//! UI Bridge - HTTP interface for the insight panel
//!
//! Responsibilities:
//! - Accepts a ledger via HTTP and answers with generated tips
//! - Always answers 200; failures come back as localized messages

mod config;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use common::{messages, InsightGenerator, Ledger};
use config::UiBridgeConfig;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct InsightResponse {
    insight: String,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt::init();

    info!("UI Bridge starting...");

    let config = UiBridgeConfig::parse();

    info!("Configuration loaded:");
    info!("  HTTP: {}:{}", config.http_host, config.http_port);
    info!("  LLM: {}", config.provider.provider);

    let generator = InsightGenerator::from_config(&config.provider.client_config());
    let app = router(generator);

    let listener =
        tokio::net::TcpListener::bind((config.http_host.as_str(), config.http_port)).await?;
    info!("UI Bridge listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("UI Bridge shutting down");
        })
        .await
}

fn router(generator: InsightGenerator) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/insights", post(insights))
        .with_state(generator)
}

async fn health_check() -> &'static str {
    "UI Bridge OK"
}

async fn insights(
    State(generator): State<InsightGenerator>,
    ledger: Result<Json<Ledger>, JsonRejection>,
) -> Json<InsightResponse> {
    let Json(ledger) = match ledger {
        Ok(ledger) => ledger,
        Err(rejection) => {
            warn!("Rejected insights request body: {}", rejection);
            return Json(InsightResponse {
                insight: messages::GENERATION_FAILED.to_string(),
            });
        }
    };

    let insight = generator
        .generate_insights(&ledger.transactions, &ledger.categories)
        .await;
    Json(InsightResponse { insight })
}
