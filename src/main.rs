use crate::app_config::AppConfig;
use crate::dispatcher::Dispatcher;
use crate::domain::ElevationAction;
use crate::epqs::EpqsClient;
use crate::host::{CoordinateTransform, StdoutClipboard};
use crate::input::parse_line;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tokio::sync::mpsc;
use tokio::task;
use tracing::{debug, info, warn};

mod app_config;
mod dispatcher;
mod domain;
mod epqs;
mod host;
mod input;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Stdout is the clipboard, keep logging on stderr
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = EpqsClient::new(epqs::new_client()?, config.epqs().url());
    let map_crs = config.core().map_crs();

    let (tx, rx) = mpsc::channel::<ElevationAction>(config.core().action_buffer_size());
    let mut dispatcher = Dispatcher::new(rx, client, Arc::new(StdoutClipboard));
    let dispatcher_handle = task::spawn(async move {
        dispatcher.listen().await;
    });
    info!("✅  Initialized dispatcher");
    info!("🔥 {} is up and running, map in {:?}", env!("CARGO_PKG_NAME"), map_crs);

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let (point, unit) = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("⚠️ Ignoring input '{}': {}", line.trim(), e);
                continue;
            }
        };

        let coordinate = map_crs.to_wgs84(point);
        debug!(?point, ?coordinate, "Transformed map point to WGS84");
        tx.send(ElevationAction::new(coordinate, unit)).await?;
    }

    drop(tx);
    dispatcher_handle.await?;
    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));

    Ok(())
}
