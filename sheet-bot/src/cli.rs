//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sheet-bot")]
#[command(about = "Telegram bot for browsing a Google Sheet", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the sheet's column headers and exit (checks Google credentials, no Telegram).
    Headers,
}
