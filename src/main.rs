use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lobby_loadtest::client::LobbyClient;
use lobby_loadtest::config::{AuthStyle, TargetConfig};
use lobby_loadtest::timers::{self, TimedEndpoint};
use lobby_loadtest::{dispatcher, relogin};

#[derive(Parser)]
#[command(name = "lobby-loadtest", version, about = "Ad-hoc load generator for the lobby service")]
struct Cli {
    /// Base URL of the target service.
    #[arg(long, global = true, default_value = "http://127.0.0.1:8080")]
    host: String,

    /// Deterministic seed for synthetic account data.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create accounts with concurrent workers and persist batch files.
    Generate {
        /// Number of concurrent workers.
        threads: usize,
        /// Account creation attempts per worker.
        per_thread: usize,
        /// Output filename prefix; worker i writes <PREFIX>_<i>.json.
        prefix: String,
    },
    /// Refresh the tokens of a previously written batch file in place.
    Relogin {
        /// Batch file written by `generate`.
        file: PathBuf,
    },
    /// Issue timed GET requests for every account in a batch file.
    Time {
        endpoint: TimedEndpoint,
        /// Batch file written by `generate`.
        file: PathBuf,
        /// Requests per account.
        #[arg(long, default_value_t = 1)]
        repeat: usize,
        /// Authorization header construction; defaults to the per-endpoint
        /// behavior observed against the real server.
        #[arg(long, value_enum)]
        auth_style: Option<AuthStyle>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = TargetConfig {
        base_url: cli.host,
        seed: cli.seed,
    };

    match cli.command {
        Command::Generate {
            threads,
            per_thread,
            prefix,
        } => dispatcher::run_workers(&config, threads, per_thread, &prefix).await,
        Command::Relogin { file } => {
            let client = LobbyClient::new(&config)?;
            relogin::refresh_tokens(&client, &file).await
        }
        Command::Time {
            endpoint,
            file,
            repeat,
            auth_style,
        } => {
            let client = LobbyClient::new(&config)?;
            let style = auth_style.unwrap_or_else(|| endpoint.default_auth_style());
            timers::time_endpoint(&client, endpoint, &file, style, repeat).await
        }
    }
}
