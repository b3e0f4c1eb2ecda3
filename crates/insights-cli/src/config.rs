//! CLI configuration

use std::path::PathBuf;

use clap::Parser;
use common::ProviderArgs;

#[derive(Debug, Parser)]
#[command(name = "spend-insights")]
#[command(about = "Spend Insights - Money-saving tips from your recent expenses")]
pub struct CliConfig {
    /// Ledger JSON file with `transactions` and `categories`
    pub ledger: PathBuf,

    /// Print the aggregated spending summary instead of calling the provider
    #[arg(long)]
    pub summary_only: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let config = CliConfig::parse_from(["spend-insights", "ledger.json", "--summary-only"]);
        assert_eq!(config.ledger, PathBuf::from("ledger.json"));
        assert!(config.summary_only);
    }
}
