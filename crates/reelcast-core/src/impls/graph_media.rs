//! Graph-API media service client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Credentials;
use crate::ports::{ContainerId, ContainerRequest, ContainerStatus, MediaError, MediaService};

const DEFAULT_BASE_URL: &str = "https://graph.facebook.com/v18.0";

/// [`MediaService`] implementation against a Graph-API-shaped endpoint:
/// `POST {base}/{account}/media`, `GET {base}/{container}?fields=status_code`,
/// `POST {base}/{account}/media_publish`.
///
/// The base URL is configurable so sandboxes and tests can point elsewhere.
pub struct GraphMediaClient {
    base_url: String,
    client: reqwest::Client,
}

/// Container creation request body.
#[derive(Debug, Serialize)]
struct CreateContainerBody<'a> {
    media_type: &'static str,
    video_url: &'a str,
    caption: &'a str,
    access_token: &'a str,
}

/// Publish request body.
#[derive(Debug, Serialize)]
struct PublishBody<'a> {
    creation_id: &'a str,
    access_token: &'a str,
}

/// Response shape shared by container creation and publish: both answer
/// with the created resource's id. The id is optional on purpose; the
/// service can answer 200 with an error payload instead.
#[derive(Debug, Deserialize)]
struct IdResponse {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status_code: Option<String>,
}

impl GraphMediaClient {
    pub fn new() -> Result<Self, MediaError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MediaError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, MediaError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Rejected {
                reason: format!("{status}: {body}"),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| MediaError::Transport(format!("decoding response: {e}")))
    }
}

#[async_trait]
impl MediaService for GraphMediaClient {
    async fn create_container(
        &self,
        request: ContainerRequest<'_>,
    ) -> Result<ContainerId, MediaError> {
        let url = format!(
            "{}/{}/media",
            self.base_url, request.credentials.account_id
        );
        let response = self
            .client
            .post(url)
            .json(&CreateContainerBody {
                media_type: "REELS",
                video_url: request.video_url,
                caption: request.caption,
                access_token: &request.credentials.access_token,
            })
            .send()
            .await
            .map_err(|e| MediaError::Transport(e.to_string()))?;

        let body: IdResponse = Self::decode(response).await?;
        body.id
            .map(ContainerId)
            .ok_or(MediaError::MissingId { field: "container" })
    }

    async fn container_status(
        &self,
        id: &ContainerId,
        credentials: &Credentials,
    ) -> Result<ContainerStatus, MediaError> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self
            .client
            .get(url)
            .query(&[
                ("fields", "status_code"),
                ("access_token", credentials.access_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MediaError::Transport(e.to_string()))?;

        let body: StatusResponse = Self::decode(response).await?;
        // An answer without a status code is neither finished nor failed;
        // the poll loop keeps going.
        Ok(body
            .status_code
            .as_deref()
            .map(ContainerStatus::from_code)
            .unwrap_or_else(|| ContainerStatus::InProgress("UNKNOWN".to_string())))
    }

    async fn publish_container(
        &self,
        id: &ContainerId,
        credentials: &Credentials,
    ) -> Result<String, MediaError> {
        let url = format!(
            "{}/{}/media_publish",
            self.base_url, credentials.account_id
        );
        let response = self
            .client
            .post(url)
            .json(&PublishBody {
                creation_id: &id.0,
                access_token: &credentials.access_token,
            })
            .send()
            .await
            .map_err(|e| MediaError::Transport(e.to_string()))?;

        let body: IdResponse = Self::decode(response).await?;
        body.id.ok_or(MediaError::MissingId { field: "media" })
    }
}
