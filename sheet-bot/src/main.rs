//! sheet-bot CLI: run the Telegram bot, or print the sheet headers to check credentials. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use sheet_bot::{print_headers, run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Headers => {
            let config = BotConfig::load_sheet_only()?;
            print_headers(config).await
        }
    }
}
