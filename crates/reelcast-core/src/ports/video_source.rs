//! VideoSource port - the candidate-video collaborator.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Video;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("video source rejected the request: {reason}")]
    Rejected { reason: String },

    #[error("video source transport fault: {0}")]
    Transport(String),
}

/// Black-box source of candidate videos.
///
/// Errors stop at this boundary as a `SourceError`; they never panic
/// through into callers.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Search the provider and return up to `per_page` candidates in
    /// provider order.
    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<Video>, SourceError>;
}
