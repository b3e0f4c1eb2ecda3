//! UI Bridge configuration

use clap::Parser;
use common::ProviderArgs;

#[derive(Debug, Parser)]
#[command(name = "ui-bridge")]
#[command(about = "UI Bridge - HTTP endpoint serving spending insights to the UI")]
pub struct UiBridgeConfig {
    /// HTTP server host
    #[arg(long, env = "INSIGHTS_HTTP_HOST", default_value = "0.0.0.0")]
    pub http_host: String,

    /// HTTP server port
    #[arg(long, env = "INSIGHTS_HTTP_PORT", default_value = "3000")]
    pub http_port: u16,

    #[command(flatten)]
    pub provider: ProviderArgs,
}
