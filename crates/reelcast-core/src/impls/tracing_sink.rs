//! Event sink that forwards lifecycle events to `tracing`.

use tracing::{debug, info, warn};

use crate::domain::PostEvent;
use crate::ports::EventSink;

/// Structured-log sink: one `tracing` event per lifecycle event, fields
/// over formatted strings so subscribers can filter and aggregate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &PostEvent) {
        match event {
            PostEvent::PostScheduled {
                post_id,
                scheduled_for,
            } => {
                info!(post_id = %post_id, scheduled_for = %scheduled_for, "post scheduled");
            }
            PostEvent::PublishStarted { post_id } => {
                info!(post_id = %post_id, "publish attempt started");
            }
            PostEvent::ContainerCreated {
                post_id,
                container_id,
            } => {
                debug!(post_id = %post_id, container_id = %container_id, "container created");
            }
            PostEvent::ProcessingPolled {
                post_id,
                attempt,
                status,
            } => {
                debug!(post_id = %post_id, attempt, status = %status, "processing polled");
            }
            PostEvent::PostPublished { post_id, media_id } => {
                info!(post_id = %post_id, media_id = %media_id, "post published");
            }
            PostEvent::PostFailed { post_id, reason } => {
                warn!(post_id = %post_id, reason = %reason, "post failed");
            }
            PostEvent::RunCompleted {
                processed,
                posted,
                failed,
            } => {
                info!(processed, posted, failed, "lifecycle run completed");
            }
        }
    }
}
