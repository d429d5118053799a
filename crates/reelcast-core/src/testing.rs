//! Shared test doubles for engine tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use ulid::Ulid;

use crate::domain::{Credentials, Post, PostId, Video};
use crate::ports::{ContainerId, ContainerRequest, ContainerStatus, MediaError, MediaService};

pub fn sample_video() -> Video {
    Video {
        id: 101,
        url: "https://cdn.example/101.mp4".to_string(),
        image: "https://cdn.example/101.jpg".to_string(),
        duration: 21,
        attribution: "Jo Reel".to_string(),
    }
}

pub fn sample_credentials() -> Credentials {
    Credentials::new("test-token", "acct-test")
}

pub fn sample_post() -> Post {
    Post::new(
        PostId::from_ulid(Ulid::new()),
        sample_video(),
        Utc::now(),
        sample_credentials(),
    )
}

/// Scripted [`MediaService`] double.
///
/// Each call is counted; container-status responses come from a scripted
/// queue and fall back to `default_status` once the script is exhausted, so
/// timeout tests can let "still processing" repeat forever.
pub struct ScriptedMedia {
    create: Result<ContainerId, MediaError>,
    statuses: Mutex<VecDeque<ContainerStatus>>,
    default_status: ContainerStatus,
    status_error: Option<MediaError>,
    publish: Result<String, MediaError>,
    create_calls: AtomicU32,
    status_calls: AtomicU32,
    publish_calls: AtomicU32,
    last_caption: Mutex<Option<String>>,
}

impl ScriptedMedia {
    pub fn new() -> Self {
        Self {
            create: Ok(ContainerId("container-1".to_string())),
            statuses: Mutex::new(VecDeque::new()),
            default_status: ContainerStatus::InProgress("IN_PROGRESS".to_string()),
            status_error: None,
            publish: Ok("media-1".to_string()),
            create_calls: AtomicU32::new(0),
            status_calls: AtomicU32::new(0),
            publish_calls: AtomicU32::new(0),
            last_caption: Mutex::new(None),
        }
    }

    pub fn with_create(mut self, result: Result<ContainerId, MediaError>) -> Self {
        self.create = result;
        self
    }

    pub fn with_statuses(self, statuses: Vec<ContainerStatus>) -> Self {
        *self.statuses.lock().unwrap() = statuses.into();
        self
    }

    pub fn with_default_status(mut self, status: ContainerStatus) -> Self {
        self.default_status = status;
        self
    }

    pub fn with_status_error(mut self, error: MediaError) -> Self {
        self.status_error = Some(error);
        self
    }

    pub fn with_publish(mut self, result: Result<String, MediaError>) -> Self {
        self.publish = result;
        self
    }

    pub fn create_calls(&self) -> u32 {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn status_calls(&self) -> u32 {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn publish_calls(&self) -> u32 {
        self.publish_calls.load(Ordering::SeqCst)
    }

    pub fn last_caption(&self) -> Option<String> {
        self.last_caption.lock().unwrap().clone()
    }
}

impl Default for ScriptedMedia {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaService for ScriptedMedia {
    async fn create_container(
        &self,
        request: ContainerRequest<'_>,
    ) -> Result<ContainerId, MediaError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_caption.lock().unwrap() = Some(request.caption.to_string());
        self.create.clone()
    }

    async fn container_status(
        &self,
        _id: &ContainerId,
        _credentials: &Credentials,
    ) -> Result<ContainerStatus, MediaError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.status_error {
            return Err(error.clone());
        }
        Ok(self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default_status.clone()))
    }

    async fn publish_container(
        &self,
        _id: &ContainerId,
        _credentials: &Credentials,
    ) -> Result<String, MediaError> {
        self.publish_calls.fetch_add(1, Ordering::SeqCst);
        self.publish.clone()
    }
}
