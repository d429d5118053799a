//! PostStore port - the durable record set, single source of truth.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Post;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable, ordered collection of posts with whole-set semantics.
///
/// Design principles:
/// - The store is the source of truth; callers re-load before every
///   derivation instead of trusting a cached copy.
/// - There is no row-level update: `save_all` replaces the full set, and
///   concurrent load-then-save pairs are last-writer-wins. Callers keep the
///   load→save window as short as possible.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All records in storage order. An empty store yields an empty vec;
    /// only genuine I/O failure is an error.
    async fn load_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Atomically replace the entire record set.
    async fn save_all(&self, posts: &[Post]) -> Result<(), StoreError>;
}
