//! Scheduler: assigns future publish slots to candidate videos.

mod policy;

pub use policy::SchedulePolicy;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{Credentials, Post, PostEvent, PostStatus, Video};
use crate::error::ReelcastError;
use crate::ports::{Clock, EventSink, IdGenerator, PostStore};

/// Places newly discovered videos into future publish slots.
///
/// Placement extends from an anchor: the latest slot any pending post
/// already holds, or "now" when the queue of pending posts is empty. Each
/// accepted candidate gets the next slot after the anchor, so batches pack
/// one per day without colliding with earlier batches.
///
/// The store is re-loaded on every call; the scheduler keeps no copy of the
/// record set between operations.
pub struct Scheduler {
    store: Arc<dyn PostStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    events: Arc<dyn EventSink>,
    policy: SchedulePolicy,
}

impl Scheduler {
    pub fn new(
        store: Arc<dyn PostStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        events: Arc<dyn EventSink>,
        policy: SchedulePolicy,
    ) -> Self {
        Self {
            store,
            clock,
            ids,
            events,
            policy,
        }
    }

    /// Schedule up to `max_count` of `candidates`, in input order.
    ///
    /// Returns the newly created posts. Zero accepted candidates leave the
    /// store untouched (no write at all).
    pub async fn schedule(
        &self,
        candidates: &[Video],
        max_count: usize,
        credentials: &Credentials,
    ) -> Result<Vec<Post>, ReelcastError> {
        let mut all = self.store.load_all().await?;
        let anchor = latest_pending_slot(&all).unwrap_or_else(|| self.clock.now());

        let mut created = Vec::new();
        for (index, video) in candidates.iter().take(max_count).enumerate() {
            let scheduled_for = self.policy.slot(anchor, index as i64 + 1);
            let post = Post::new(
                self.ids.post_id(),
                video.clone(),
                scheduled_for,
                credentials.clone(),
            );
            self.events.emit(&PostEvent::PostScheduled {
                post_id: post.id,
                scheduled_for,
            });
            created.push(post);
        }

        if created.is_empty() {
            return Ok(created);
        }

        all.extend(created.iter().cloned());
        self.store.save_all(&all).await?;
        Ok(created)
    }

    /// Schedule a single video into the next free slot.
    pub async fn schedule_one(
        &self,
        video: Video,
        credentials: &Credentials,
    ) -> Result<Post, ReelcastError> {
        let mut all = self.store.load_all().await?;
        let anchor = latest_pending_slot(&all).unwrap_or_else(|| self.clock.now());
        let scheduled_for = self.policy.slot(anchor, 1);

        let post = Post::new(self.ids.post_id(), video, scheduled_for, credentials.clone());
        self.events.emit(&PostEvent::PostScheduled {
            post_id: post.id,
            scheduled_for,
        });

        all.push(post.clone());
        self.store.save_all(&all).await?;
        Ok(post)
    }
}

/// Latest slot held by any pending post, the anchor for new placements.
fn latest_pending_slot(posts: &[Post]) -> Option<DateTime<Utc>> {
    posts
        .iter()
        .filter(|p| p.status == PostStatus::Pending)
        .map(|p| p.scheduled_for)
        .max()
}
