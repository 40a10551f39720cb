// Agent Relay - HTTP relay entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use agent_relay::{serve, AppState, ConfigService, SettingsUpdate};
use agent_relay_agent::ReplayTransport;

const DEFAULT_LOG_FILTER: &str =
    "agent_relay=info,agent_relay_agent=info,agent_relay_citations=info,tower_http=info";

#[derive(Parser, Debug)]
#[command(
    name = "agent-relay",
    version,
    about = "Relays chat messages to a knowledge-base agent and resolves its citations"
)]
struct Cli {
    /// JSON config file (defaults to ~/.agent-relay/config.json when present)
    #[arg(long, global = true, env = "AGENT_RELAY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP relay
    Serve {
        /// Address to bind (host:port)
        #[arg(long, env = "AGENT_RELAY_BIND")]
        bind: Option<String>,

        /// Event relay endpoint streaming the agent response as NDJSON
        #[arg(long, env = "AGENT_RELAY_ENDPOINT")]
        endpoint: Option<String>,

        /// Serve a recorded event log instead of calling the endpoint
        #[arg(long)]
        replay: Option<PathBuf>,
    },
    /// Aggregate a recorded event log once and print the response payload
    Replay {
        /// Recorded NDJSON event log
        file: PathBuf,

        #[arg(long, default_value = "Replay request")]
        message: String,

        #[arg(long)]
        session_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config_service = ConfigService::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Command::Serve {
            bind,
            endpoint,
            replay,
        } => {
            config_service
                .apply_update(SettingsUpdate {
                    bind_address: bind,
                    endpoint,
                    replay_path: replay,
                    ..Default::default()
                })
                .context("invalid command-line settings")?;

            let state = AppState::from_config(config_service.into_config())?;
            serve(state).await?;
        }
        Command::Replay {
            file,
            message,
            session_id,
        } => {
            let transport = Arc::new(ReplayTransport::new(file));
            let state = AppState::with_transport(config_service.into_config(), transport);
            let payload = state
                .relay()
                .invoke(Some(message.as_str()), session_id.as_deref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
