use crate::domain::{ElevationAction, MENU_TITLE};
use crate::epqs::EpqsClient;
use crate::host::Clipboard;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Text copied when no elevation could be determined.
pub const ABSENT_TEXT: &str = "N/A";

/// Hands out tickets, only the most recently issued one is current.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    counter: Arc<AtomicU64>,
}

#[derive(Debug)]
pub struct Ticket {
    id: u64,
    counter: Arc<AtomicU64>,
}

impl Generation {
    pub fn next(&self) -> Ticket {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            id,
            counter: self.counter.clone(),
        }
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.counter.load(Ordering::SeqCst) == self.id
    }
}

#[derive(Debug)]
pub struct Dispatcher {
    rx: Receiver<ElevationAction>,
    client: EpqsClient,
    clipboard: Arc<dyn Clipboard>,
    generation: Generation,
    // Held while superseding and while writing, so a write is never cut short
    write_lock: Arc<Mutex<()>>,
    in_flight: Option<JoinHandle<()>>,
}

impl Dispatcher {
    pub fn new(rx: Receiver<ElevationAction>, client: EpqsClient, clipboard: Arc<dyn Clipboard>) -> Self {
        Dispatcher {
            rx,
            client,
            clipboard,
            generation: Generation::default(),
            write_lock: Arc::new(Mutex::new(())),
            in_flight: None,
        }
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(action) = self.rx.recv().await {
            info!(coordinate = ?action.coordinate, "📋 {} {}", MENU_TITLE, action.label());

            let ticket = {
                let _guard = self.write_lock.lock().await;
                if let Some(previous) = self.in_flight.take() {
                    if !previous.is_finished() {
                        debug!("📋 Superseding the previous elevation query");
                        previous.abort();
                    }
                }
                self.generation.next()
            };

            let client = self.client.clone();
            let clipboard = self.clipboard.clone();
            let write_lock = self.write_lock.clone();
            self.in_flight = Some(tokio::spawn(async move {
                let elevation = client.query_elevation(action.coordinate.longitude, action.coordinate.latitude, action.unit).await;
                copy_if_current(&ticket, clipboard.as_ref(), &write_lock, elevation).await;
            }));
        }

        if let Some(last) = self.in_flight.take() {
            last.await.unwrap_or_else(|e| {
                if !e.is_cancelled() {
                    warn!("⚠️ Elevation query task failed: {}", e);
                }
            });
        }
    }
}

/// Copies the elevation unless a newer action took over while it was being queried.
///
/// An aborted task may still run up to here on another worker, so the ticket is checked again under the write lock.
async fn copy_if_current(ticket: &Ticket, clipboard: &dyn Clipboard, write_lock: &Mutex<()>, elevation: Option<f64>) -> bool {
    let _guard = write_lock.lock().await;
    if !ticket.is_current() {
        debug!("📋 Dropping the result of a superseded elevation query");
        return false;
    }
    clipboard.set_text(clipboard_text(elevation)).await;
    true
}

fn clipboard_text(elevation: Option<f64>) -> String {
    match elevation {
        Some(value) => {
            info!("📋 Copied elevation {}", value);
            value.to_string()
        }
        None => {
            info!("📋 No elevation available, copied '{}'", ABSENT_TEXT);
            ABSENT_TEXT.to_string()
        }
    }
}
