mod clipboard;
mod transform;

pub use clipboard::{Clipboard, StdoutClipboard};
pub use transform::{CoordinateTransform, MapCrs};

#[cfg(test)]
pub use clipboard::recording::RecordingClipboard;
