mod config;
mod input;
mod render;
mod runner;

use std::path::PathBuf;
use clap::Parser;
use common::{log, logger};

use config::get_config_manager;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against an exhaustive minimax engine")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Let the engine play both sides
    #[arg(long)]
    self_play: bool,

    /// Search without alpha-beta cutoffs for this run
    #[arg(long)]
    exhaustive: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_or_create_config()?;
    log!("Loaded config: {:?}", config);

    if args.exhaustive {
        config.search.pruning = false;
    }

    runner::run_game(&config, args.self_play).await?;

    log!("Client shut down");
    Ok(())
}
