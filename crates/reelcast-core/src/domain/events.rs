//! Domain events emitted on lifecycle transitions.

use chrono::{DateTime, Utc};

use super::ids::PostId;

/// An event the engine hands to the [`EventSink`](crate::ports::EventSink)
/// on each phase transition and terminal outcome.
///
/// The sink is a passive collaborator: emitting is infallible from the
/// engine's point of view and never influences control flow.
#[derive(Debug, Clone, PartialEq)]
pub enum PostEvent {
    /// The scheduler accepted a candidate and placed it in a slot.
    PostScheduled {
        post_id: PostId,
        scheduled_for: DateTime<Utc>,
    },

    /// A publish attempt began for a due post.
    PublishStarted { post_id: PostId },

    /// The media service created a container for the video.
    ContainerCreated {
        post_id: PostId,
        container_id: String,
    },

    /// One processing-status poll completed.
    ProcessingPolled {
        post_id: PostId,
        attempt: u32,
        status: String,
    },

    /// The container was published; the post reached its terminal success.
    PostPublished { post_id: PostId, media_id: String },

    /// The attempt ended in the terminal failure state.
    PostFailed { post_id: PostId, reason: String },

    /// A lifecycle run finished its scan.
    RunCompleted {
        processed: usize,
        posted: usize,
        failed: usize,
    },
}
