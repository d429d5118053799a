//! MediaService port - the external three-phase publish collaborator.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Credentials;

/// Server-side staging resource id handed back by container creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerId(pub String);

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Processing state of a container, as reported by one status poll.
///
/// Anything the service says that is neither `FINISHED` nor `ERROR` keeps
/// the poll loop going; the original string is preserved for observability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerStatus {
    Finished,
    Error,
    InProgress(String),
}

impl ContainerStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "FINISHED" => Self::Finished,
            "ERROR" => Self::Error,
            other => Self::InProgress(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Finished => "FINISHED",
            Self::Error => "ERROR",
            Self::InProgress(code) => code,
        }
    }
}

/// Parameters for container creation.
#[derive(Debug, Clone)]
pub struct ContainerRequest<'a> {
    /// Publicly reachable URL of the media file.
    pub video_url: &'a str,
    /// Caption to attach to the published media.
    pub caption: &'a str,
    pub credentials: &'a Credentials,
}

#[derive(Debug, Clone, Error)]
pub enum MediaError {
    /// The service answered with a non-success response.
    #[error("media service rejected the request: {reason}")]
    Rejected { reason: String },

    /// The transport call succeeded but the expected identifier is absent.
    /// Treated as failure exactly like a rejection.
    #[error("media service response is missing the {field} id")]
    MissingId { field: &'static str },

    /// Network-level fault before a response could be read.
    #[error("media service transport fault: {0}")]
    Transport(String),
}

/// The eventually-consistent publish service:
/// create a container, wait for it to finish processing, publish it.
///
/// All three operations may fail with a non-success response, and a
/// transport-success response without the expected id is a failure too.
#[async_trait]
pub trait MediaService: Send + Sync {
    async fn create_container(
        &self,
        request: ContainerRequest<'_>,
    ) -> Result<ContainerId, MediaError>;

    async fn container_status(
        &self,
        id: &ContainerId,
        credentials: &Credentials,
    ) -> Result<ContainerStatus, MediaError>;

    async fn publish_container(
        &self,
        id: &ContainerId,
        credentials: &Credentials,
    ) -> Result<String, MediaError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("FINISHED", ContainerStatus::Finished)]
    #[case("ERROR", ContainerStatus::Error)]
    #[case("IN_PROGRESS", ContainerStatus::InProgress("IN_PROGRESS".to_string()))]
    #[case("EXPIRED", ContainerStatus::InProgress("EXPIRED".to_string()))]
    fn status_codes_map_to_poll_outcomes(#[case] code: &str, #[case] expected: ContainerStatus) {
        assert_eq!(ContainerStatus::from_code(code), expected);
        assert_eq!(ContainerStatus::from_code(code).as_str(), code);
    }
}
