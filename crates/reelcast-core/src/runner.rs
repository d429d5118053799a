//! Lifecycle runner: scans for due posts and settles them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::PostEvent;
use crate::error::ReelcastError;
use crate::ports::{Clock, EventSink, PostStore};
use crate::publish::PublishPipeline;

/// Result of one lifecycle run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Posts that were due and went through a publish attempt.
    pub processed: usize,
    pub posted: usize,
    pub failed: usize,
}

/// Processes due pending posts, one at a time, in storage order.
///
/// Designed for idempotent periodic invocation (the trigger itself lives
/// outside the engine): terminal posts are never revisited, not-yet-due
/// pending posts are skipped until a later run, and the mutated set is
/// persisted exactly once after the scan. Sequential processing bounds the
/// external service to a single in-flight publish.
pub struct LifecycleRunner {
    store: Arc<dyn PostStore>,
    clock: Arc<dyn Clock>,
    pipeline: PublishPipeline,
    events: Arc<dyn EventSink>,
}

impl LifecycleRunner {
    pub fn new(
        store: Arc<dyn PostStore>,
        clock: Arc<dyn Clock>,
        pipeline: PublishPipeline,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            store,
            clock,
            pipeline,
            events,
        }
    }

    /// Scan the store once and settle every due post.
    ///
    /// A failed publish is recorded on its post and the scan continues;
    /// only store I/O can abort a run.
    pub async fn run(&self) -> Result<RunReport, ReelcastError> {
        let mut posts = self.store.load_all().await?;
        let now = self.clock.now();

        let mut report = RunReport::default();
        for post in posts.iter_mut() {
            if !post.is_due(now) {
                continue;
            }

            let outcome = self.pipeline.publish(post).await;
            if outcome.is_published() {
                post.mark_posted();
                report.posted += 1;
            } else {
                post.mark_failed();
                report.failed += 1;
            }
            report.processed += 1;
        }

        if report.processed > 0 {
            self.store.save_all(&posts).await?;
        }

        self.events.emit(&PostEvent::RunCompleted {
            processed: report.processed,
            posted: report.posted,
            failed: report.failed,
        });
        Ok(report)
    }
}
