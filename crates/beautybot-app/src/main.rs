use anyhow::Result;
use clap::Parser;

use beautybot_app::{load_config, run_repl_mode, Cli};
use beautybot_http::HttpCompletionClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let config = load_config(&cli)?;

    let client = match cli.request_timeout() {
        Some(timeout) => HttpCompletionClient::with_timeout(config.endpoint.clone(), timeout)?,
        None => HttpCompletionClient::new(config.endpoint.clone()),
    };

    run_repl_mode(config, client).await
}
