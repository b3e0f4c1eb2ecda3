//! Spend Insights CLI
//!
//! Reads a ledger file, aggregates expenses and prints money-saving tips
//! generated by the configured text generation provider.

mod config;

use clap::Parser;
use common::{InsightGenerator, Ledger, SpendingSummary};
use config::CliConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = CliConfig::parse();

    let raw = tokio::fs::read_to_string(&config.ledger).await?;
    let ledger: Ledger = serde_json::from_str(&raw)?;

    info!(
        "Loaded {} transactions and {} categories from {}",
        ledger.transactions.len(),
        ledger.categories.len(),
        config.ledger.display()
    );

    if config.summary_only {
        let summary = SpendingSummary::from_transactions(&ledger.transactions, &ledger.categories)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let generator = InsightGenerator::from_config(&config.provider.client_config());
    info!("  LLM: {}", config.provider.provider);

    let insight = generator
        .generate_insights(&ledger.transactions, &ledger.categories)
        .await;
    println!("{}", insight);

    Ok(())
}
