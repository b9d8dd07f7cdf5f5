mod command;
mod config;
mod embed;
mod render;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use donut_core::models::SortMode;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use command::Command;
use config::Config;
use session::Session;

/// Donut - DonutSMP auction house and player stats in your terminal.
#[derive(Parser, Debug)]
#[command(name = "donut")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Runs one command and exits; without one, reads slash commands from stdin
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Shows auction house listings
    Ah {
        /// Item to search for
        item: String,
        /// lowest_price, highest_price, recently_listed or last_listed
        #[arg(short, long, default_value = "lowest_price")]
        sort: SortMode,
    },
    /// Shows a player's stats
    Stats {
        player: String,
    },
}

impl From<CliCommand> for Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Ah { item, sort } => Command::Auction { item, sort },
            CliCommand::Stats { player } => Command::Stats { player },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::load().with_env();
    config.init_logging()?;

    let Some(api_config) = config.api_config() else {
        eprintln!("Error: {} not set.", config::API_KEY_VAR);
        eprintln!("Create a .env file with:");
        eprintln!("{}=your_key_here\n", config::API_KEY_VAR);
        if let Some(path) = Config::config_path() {
            eprintln!("or add \"api_key\" to {}", path.display());
        }
        std::process::exit(1);
    };

    tracing::info!(base_url = %api_config.base_url, "Starting");

    let mut session = Session::new(api_config, config.max_results);

    match cli.command {
        Some(command) => {
            let reply = session.handle(command.into()).await;
            print!("{}", reply);
        }
        None => run_interactive(&mut session).await?,
    }

    Ok(())
}

async fn run_interactive(session: &mut Session) -> Result<()> {
    println!("Type /help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                let quit = command == Command::Quit;
                let reply = session.handle(command).await;
                println!("{}", reply);
                if quit {
                    break;
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    tracing::info!("Stopped");
    Ok(())
}
