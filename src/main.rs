mod app;
mod generator;
mod render;
mod report;
mod state;
mod ui;

use crate::generator::Generator;
use crate::report::LogReporter;
use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use log::info;
use nba_api::NbaApi;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = AppSettings::load()?;
    let api = NbaApi::new(settings.endpoints.clone(), settings.timeout)?;
    let reporter = LogReporter::new(settings.sentry_dsn.as_deref());
    if settings.sentry_dsn.is_none() {
        info!("SENTRY_DSN not set; faults are only logged locally");
    }

    let state = AppState::new(Generator::new(Arc::new(api), Arc::new(reporter)));

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");

    axum::serve(listener, app::router(state)).await?;
    Ok(())
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("gamethread {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "gamethread - r/nba game thread generator

Usage:
  gamethread
  gamethread --help
  gamethread --version

Environment:
  PORT                      Port to listen on (default 5000)
  SENTRY_DSN                Error-tracking DSN that faults are tagged with
  GAMETHREAD_TIMEOUT_SECS   Timeout for each page fetch (default 10)
  GAMETHREAD_NBA_URL        Base URL of the league game-info site
  GAMETHREAD_ESPN_URL       Base URL of the team profile site
  GAMETHREAD_PREVIEW_URL    Base URL of the broadcast preview site
  RUST_LOG                  Log filter (default info)"
}
