use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;

use routefinder_cli::commands::inspect::handle_inspect_command;
use routefinder_cli::commands::route::{handle_route_command, RouteCommandArgs, StrategyArg};
use routefinder_cli::logging::{init_logging, LoggingConfig};
use routefinder_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest-route queries over airport route datasets")]
struct Cli {
    /// Directory holding airports.csv and routes.csv.
    #[arg(long, global = true, env = "ROUTEFINDER_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two keys.
    Route {
        /// Origin key, e.g. LHR.
        #[arg(long = "from")]
        from: String,
        /// Destination key.
        #[arg(long = "to")]
        to: String,
        /// Priority ordering used by the search.
        #[arg(long, value_enum, default_value_t = StrategyArg::Cached)]
        strategy: StrategyArg,
    },
    /// Print graph counters, or the outgoing links of one key.
    Inspect {
        #[arg(long)]
        key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Route { from, to, strategy } => {
            let args = RouteCommandArgs { from, to, strategy };
            handle_route_command(&cli.data_dir, &args, cli.format).await
        }
        Command::Inspect { key } => {
            handle_inspect_command(&cli.data_dir, key.as_deref(), cli.format)
        }
    }
}
