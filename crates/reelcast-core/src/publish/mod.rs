//! Publish pipeline: drives one post through the three-phase protocol.

mod poll;

pub use poll::PollPolicy;

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{Post, PostEvent, PublishOutcome, Video};
use crate::ports::{ContainerRequest, ContainerStatus, EventSink, MediaError, MediaService};

/// Caption configuration for published media.
///
/// The attribution line is always derived from the video; headline and tag
/// line are deployment content, empty by default.
#[derive(Debug, Clone, Default)]
pub struct CaptionTemplate {
    pub headline: String,
    pub tags: String,
}

impl CaptionTemplate {
    pub fn render(&self, video: &Video) -> String {
        let mut parts = Vec::new();
        if !self.headline.is_empty() {
            parts.push(self.headline.clone());
        }
        parts.push(format!("Video by {}", video.attribution));
        if !self.tags.is_empty() {
            parts.push(self.tags.clone());
        }
        parts.join("\n\n")
    }
}

/// Why a single attempt ended short of publishing.
///
/// Internal to the pipeline: callers only ever see the rendered reason
/// string inside [`PublishOutcome::Failed`].
#[derive(Debug, Error)]
enum PhaseError {
    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("video processing failed")]
    Processing,

    #[error("video processing timed out after {attempts} polls")]
    Timeout { attempts: u32 },
}

/// Drives one post through container creation, the bounded processing
/// poll, and the publish call.
///
/// Every failure path, transport faults included, converges on
/// `PublishOutcome::Failed` with a reason; nothing escapes the pipeline as
/// an error or panic. There are no retries across phases: a rejection,
/// processing error or poll timeout ends the attempt.
pub struct PublishPipeline {
    media: Arc<dyn MediaService>,
    events: Arc<dyn EventSink>,
    poll: PollPolicy,
    caption: CaptionTemplate,
}

impl PublishPipeline {
    pub fn new(media: Arc<dyn MediaService>, events: Arc<dyn EventSink>) -> Self {
        Self {
            media,
            events,
            poll: PollPolicy::default_graph(),
            caption: CaptionTemplate::default(),
        }
    }

    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_caption(mut self, caption: CaptionTemplate) -> Self {
        self.caption = caption;
        self
    }

    /// Run one publish attempt to a terminal outcome.
    pub async fn publish(&self, post: &Post) -> PublishOutcome {
        self.events.emit(&PostEvent::PublishStarted { post_id: post.id });

        match self.attempt(post).await {
            Ok(media_id) => {
                self.events.emit(&PostEvent::PostPublished {
                    post_id: post.id,
                    media_id: media_id.clone(),
                });
                PublishOutcome::published(media_id)
            }
            Err(err) => {
                let reason = err.to_string();
                self.events.emit(&PostEvent::PostFailed {
                    post_id: post.id,
                    reason: reason.clone(),
                });
                PublishOutcome::failed(reason)
            }
        }
    }

    async fn attempt(&self, post: &Post) -> Result<String, PhaseError> {
        // Phase 1: create the staging container.
        let caption = self.caption.render(&post.video);
        let container = self
            .media
            .create_container(ContainerRequest {
                video_url: &post.video.url,
                caption: &caption,
                credentials: &post.credentials,
            })
            .await?;
        self.events.emit(&PostEvent::ContainerCreated {
            post_id: post.id,
            container_id: container.to_string(),
        });

        // Phase 2: wait for processing, bounded by the poll policy.
        for attempt in 1..=self.poll.max_attempts {
            tokio::time::sleep(self.poll.interval).await;

            let status = self
                .media
                .container_status(&container, &post.credentials)
                .await?;
            self.events.emit(&PostEvent::ProcessingPolled {
                post_id: post.id,
                attempt,
                status: status.as_str().to_string(),
            });

            match status {
                ContainerStatus::Finished => {
                    // Phase 3: publish the processed container.
                    let media_id = self
                        .media
                        .publish_container(&container, &post.credentials)
                        .await?;
                    return Ok(media_id);
                }
                ContainerStatus::Error => return Err(PhaseError::Processing),
                ContainerStatus::InProgress(_) => {}
            }
        }

        Err(PhaseError::Timeout {
            attempts: self.poll.max_attempts,
        })
    }
}
