//! Post record and its lifecycle state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::PostId;
use super::video::{Credentials, Video};

/// Lifecycle state of a post.
///
/// State transitions:
/// - Pending -> Posted
/// - Pending -> Failed
///
/// Terminal states are never left, and nothing skips past Pending. The
/// store persists these as the lowercase strings `pending` / `posted` /
/// `failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Waiting for its slot; the only state eligible for a publish attempt.
    Pending,

    /// Published to the target account.
    Posted,

    /// A publish attempt ran and ended in failure.
    Failed,
}

impl PostStatus {
    /// Is this a terminal state (no further transitions)?
    pub fn is_terminal(self) -> bool {
        matches!(self, PostStatus::Posted | PostStatus::Failed)
    }
}

/// One scheduled publish attempt binding a video to a future slot.
///
/// Design:
/// - The store is the single source of truth; nothing in the engine keeps
///   an authoritative in-memory copy across operations.
/// - State transitions happen via methods, not direct field writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub video: Video,
    pub scheduled_for: DateTime<Utc>,
    pub status: PostStatus,
    pub credentials: Credentials,
}

impl Post {
    /// Create a fresh pending post.
    pub fn new(
        id: PostId,
        video: Video,
        scheduled_for: DateTime<Utc>,
        credentials: Credentials,
    ) -> Self {
        Self {
            id,
            video,
            scheduled_for,
            status: PostStatus::Pending,
            credentials,
        }
    }

    /// Eligible for a publish attempt: still pending and its slot has passed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == PostStatus::Pending && self.scheduled_for <= now
    }

    /// Mark as published. Only valid from Pending.
    pub fn mark_posted(&mut self) {
        debug_assert_eq!(self.status, PostStatus::Pending);
        self.status = PostStatus::Posted;
    }

    /// Mark as failed. Only valid from Pending.
    pub fn mark_failed(&mut self) {
        debug_assert_eq!(self.status, PostStatus::Pending);
        self.status = PostStatus::Failed;
    }
}
