//! Stock-footage search client.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::Video;
use crate::ports::{SourceError, VideoSource};

const DEFAULT_BASE_URL: &str = "https://api.pexels.com";

/// [`VideoSource`] implementation against a Pexels-shaped search API
/// (API key in the `Authorization` header, portrait-orientation search).
pub struct StockFootageClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    videos: Vec<ProviderVideo>,
}

#[derive(Debug, Deserialize)]
struct ProviderVideo {
    id: u64,
    image: String,
    duration: u32,
    user: ProviderUser,
    #[serde(default)]
    video_files: Vec<ProviderFile>,
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ProviderFile {
    link: String,
}

impl ProviderVideo {
    fn into_video(self) -> Video {
        Video {
            id: self.id,
            // A hit without files keeps an empty URL; the publish attempt
            // for it fails at the media service, not here.
            url: self
                .video_files
                .into_iter()
                .next()
                .map(|f| f.link)
                .unwrap_or_default(),
            image: self.image,
            duration: self.duration,
            attribution: self.user.name,
        }
    }
}

impl StockFootageClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client,
        })
    }
}

#[async_trait]
impl VideoSource for StockFootageClient {
    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<Video>, SourceError> {
        let url = format!("{}/videos/search", self.base_url);
        let response = self
            .client
            .get(url)
            .header("Authorization", &self.api_key)
            .query(&[
                ("query", query),
                ("per_page", &per_page.to_string()),
                ("orientation", "portrait"),
            ])
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Rejected {
                reason: format!("{status}: {body}"),
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Transport(format!("decoding response: {e}")))?;
        Ok(body.videos.into_iter().map(ProviderVideo::into_video).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_first_file_link_and_attribution() {
        let payload = r#"{
            "videos": [{
                "id": 857251,
                "image": "https://images.example/857251.jpg",
                "duration": 14,
                "user": { "name": "Nia Kino" },
                "video_files": [
                    { "link": "https://videos.example/857251-hd.mp4" },
                    { "link": "https://videos.example/857251-sd.mp4" }
                ]
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(payload).unwrap();
        let videos: Vec<Video> = response
            .videos
            .into_iter()
            .map(ProviderVideo::into_video)
            .collect();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, 857251);
        assert_eq!(videos[0].url, "https://videos.example/857251-hd.mp4");
        assert_eq!(videos[0].attribution, "Nia Kino");
    }

    #[test]
    fn a_hit_without_files_keeps_an_empty_url() {
        let payload = r#"{
            "videos": [{
                "id": 1,
                "image": "https://images.example/1.jpg",
                "duration": 9,
                "user": { "name": "A" }
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(payload).unwrap();
        let video = response.videos.into_iter().next().unwrap().into_video();
        assert_eq!(video.url, "");
    }

    #[test]
    fn empty_response_yields_no_candidates() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.videos.is_empty());
    }
}
