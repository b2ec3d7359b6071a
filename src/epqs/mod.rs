mod client;
mod epqs_response;
mod query_url;

pub use client::{ElevationError, EpqsClient, new_client};
pub use query_url::DEFAULT_EPQS_URL;
