mod cache;
mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod ui;
mod workflow;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::cmd::board::{self, BoardCommandArgs};
use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::board::{GroupingOption, SortOption};
use crate::error::AppResult;
use crate::infra::quicksell::QuickSellClient;

#[derive(Parser)]
#[command(name = "tix", author, version, about = "Terminal kanban board for a remote ticket API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch tickets and render the kanban board.
    Board(BoardArgs),
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct BoardArgs {
    /// Field used to bucket tickets into columns.
    #[arg(short, long, value_enum)]
    group_by: Option<GroupingOption>,
    /// Ordering applied to tickets within each column.
    #[arg(short, long, value_enum)]
    order_by: Option<SortOption>,
    /// Override the configured ticket source URL.
    #[arg(short, long)]
    source: Option<String>,
    /// Render from the last cached snapshot without fetching.
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config(args) => {
            config_cmd::run(args.command)?;
            Ok(())
        }
        Commands::Board(args) => run_board(args).await,
    }
}

async fn run_board(args: BoardArgs) -> AppResult<()> {
    let mut config = AppConfig::load()?;
    if let Some(source) = args.source {
        config.source_url = source;
    }

    let ticket_source = Arc::new(QuickSellClient::new(config.source_url.clone()));
    let context = AppContext::new(config, ticket_source);

    board::run(
        &context,
        BoardCommandArgs {
            group_by: args.group_by,
            order_by: args.order_by,
            offline: args.offline,
        },
    )
    .await
}
