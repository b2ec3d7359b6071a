use async_trait::async_trait;
use std::fmt::Debug;
use tokio::io::{AsyncWriteExt, stdout};
use tracing::warn;

#[async_trait]
pub trait Clipboard: Debug + Send + Sync {
    async fn set_text(&self, text: String);
}

/// Stands in for a system clipboard by printing each copied text on its own line.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

#[async_trait]
impl Clipboard for StdoutClipboard {
    async fn set_text(&self, text: String) {
        let mut out = stdout();
        let line = format!("{}\n", text);
        if let Err(e) = out.write_all(line.as_bytes()).await {
            warn!("⚠️ Unable to write to the clipboard: {}", e);
            return;
        }
        out.flush().await.unwrap_or_else(|e| warn!("⚠️ Unable to flush the clipboard: {}", e));
    }
}
