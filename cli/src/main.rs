//! Terminal front end: join one room and drive it from stdin.
//!
//! The room view is printed to stdout whenever it changes; logs go to stderr
//! (filter with `RUST_LOG`).

mod input;
mod render;

use std::sync::Arc;

use clap::Parser;
use pokerroom::config::ConfigError;
use pokerroom::control::ControlPlaneError;
use pokerroom::session::Lifecycle;
use pokerroom::{ClientConfig, HttpControlPlane, SessionError, SessionHandle, WsTransport, spawn_session};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use input::Input;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("control plane setup failed: {0}")]
    ControlPlane(#[from] ControlPlaneError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("session task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("session ended; run again to rejoin")]
    Ended,
}

#[derive(Parser, Debug)]
#[command(name = "pokerroom", about = "Join a planning-poker room from the terminal")]
struct Cli {
    /// Room service base URL. Defaults to `POKER_BASE_URL` or http://127.0.0.1:3000.
    #[arg(long, env = "POKER_BASE_URL")]
    base_url: Option<String>,

    /// Room hub WebSocket URL. Derived from the base URL when absent.
    #[arg(long, env = "POKER_WS_URL")]
    ws_url: Option<String>,

    #[arg(long, env = "POKER_ROOM")]
    room: String,

    #[arg(long, env = "POKER_NAME")]
    name: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    info!(base_url = %config.base_url, ws_url = %config.ws_url, "cli: starting");

    let control = Arc::new(HttpControlPlane::new(&config.base_url, config.request_timeout)?);
    let transport = Arc::new(WsTransport::from_config(&config));
    let (session, task) = spawn_session(control, transport, &config);

    session.join(&cli.room, &cli.name).await?;
    let result = run(&session).await;

    let left = session.leave().await;
    drop(session);
    task.await?;
    result.and(left.map_err(CliError::from))
}

fn build_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if let Some(ws_url) = cli.ws_url.as_deref() {
        ws_url.clone_into(&mut config.ws_url);
    }
    Ok(config)
}

async fn run(session: &SessionHandle) -> Result<(), CliError> {
    let mut views = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last = render::view(&views.borrow_and_update());
    println!("{last}");

    loop {
        tokio::select! {
            changed = views.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                let view = views.borrow_and_update().clone();
                let text = render::view(&view);
                if text != last {
                    println!("\n{text}");
                    last = text;
                }
                if view.phase == Lifecycle::Idle {
                    return Err(CliError::Ended);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("cli: stdin closed");
                    return Ok(());
                };
                match input::parse(&line) {
                    Ok(Input::Quit) => return Ok(()),
                    Ok(Input::Empty) => {}
                    Ok(Input::Help) => println!("{}", input::HELP),
                    Ok(Input::Status) => println!("{}", render::view(&session.view())),
                    Ok(command) => match dispatch(session, command).await {
                        Ok(()) => {}
                        Err(e) if e.is_fatal() => return Err(e.into()),
                        Err(e) => eprintln!("error: {e}"),
                    },
                    Err(e) => eprintln!("{e}"),
                }
            }
        }
    }
}

async fn dispatch(session: &SessionHandle, command: Input) -> Result<(), SessionError> {
    match command {
        Input::Vote(value) => session.vote(&value).await.map(|_| ()),
        Input::Reveal => session.reveal_toggle().await,
        Input::Clear => session.clear_all().await,
        Input::Dismiss(id) => {
            if !session.dismiss_notice(id).await? {
                eprintln!("no notice {id}");
            }
            Ok(())
        }
        Input::Status | Input::Help | Input::Quit | Input::Empty => Ok(()),
    }
}
