use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use std::time::Duration;
use thiserror::Error;

pub mod http;

pub use http::HttpVideoFetcher;

/// Upper bound on obtaining a response for the source video, and on each
/// wait for the next body chunk.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub type ByteStream = BoxStream<'static, Result<Bytes, std::io::Error>>;

/// A remote video whose body has not been read yet. Dropping it closes the
/// underlying connection.
pub struct FetchedVideo {
    pub content_type: String,
    pub content_length: Option<u64>,
    pub body: ByteStream,
}

impl std::fmt::Debug for FetchedVideo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchedVideo")
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Timed out after {}s fetching {url}", after.as_secs())]
    Timeout { url: String, after: Duration },

    #[error("Fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to fetch video: {0}")]
    Request(#[from] reqwest::Error),
}

#[async_trait]
pub trait VideoFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedVideo, FetchError>;
}
