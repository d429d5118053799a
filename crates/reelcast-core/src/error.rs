use thiserror::Error;

use crate::ports::{SourceError, StoreError};

/// Engine-level error for operations that must touch the collaborators
/// directly (the store, the video source).
///
/// Publish-protocol failures never surface here: the pipeline converts
/// them into `PublishOutcome::Failed` so one post's failure cannot abort a
/// lifecycle scan.
#[derive(Debug, Error)]
pub enum ReelcastError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Source(#[from] SourceError),
}
