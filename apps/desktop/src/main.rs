use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{websocket_url, ClientEvent, ConnectionState, ProtocolClient};
use tokio::sync::{broadcast::error::RecvError, mpsc};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod config;
mod input;
mod terminal;

use config::load_settings;
use terminal::{describe_event, Output};

#[derive(Parser, Debug)]
#[command(about = "Play ultimate tic-tac-toe against a remote game server")]
struct Args {
    /// Game server websocket address; overrides config and environment.
    #[arg(long)]
    server_url: Option<String>,
    /// TOML settings file (defaults to ./desktop.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Disable ANSI colors.
    #[arg(long)]
    plain: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if args.plain {
        settings.color = false;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let url = websocket_url(&settings.server_url)?;
    let mut client = ProtocolClient::new();
    let mut events = client.subscribe_events();
    let (commands_tx, commands_rx) = mpsc::channel(32);

    let session = tokio::spawn(async move {
        let result = client.connect_and_run(&url, commands_rx).await;
        (client, result)
    });
    input::spawn_stdin_reader(commands_tx);

    loop {
        match events.recv().await {
            Ok(event) => {
                let closed = matches!(
                    event,
                    ClientEvent::ConnectionChanged(ConnectionState::Closed)
                );
                match describe_event(&event, settings.color) {
                    Some(Output::Stdout(text)) => println!("{text}"),
                    Some(Output::Stderr(text)) => eprintln!("{text}"),
                    None => {}
                }
                if closed {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "terminal fell behind client events");
            }
            Err(RecvError::Closed) => break,
        }
    }

    let (client, result) = session.await.context("game session task failed")?;
    result.context("game session ended with an error")?;
    if let Some(banner) = client.view().outcome_banner() {
        println!("Final result: {banner}");
    }
    Ok(())
}
