//! # YouTube Integration Module
//!
//! Read-only access to the YouTube Data API v3, limited to what a playlist
//! conversion needs:
//!
//! - `GET /playlistItems` - video titles of a playlist, page by page
//! - `GET /playlists` - the playlist's own title
//!
//! Requests authenticate with an API key from [`YouTubeConfig`]. There is no
//! retry logic; a failed page ends the listing (see [`playlist`]).

pub mod playlist;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{Error, Res, config::YouTubeConfig, converter::PlaylistSource};

/// YouTube Data API client authenticated with an API key.
pub struct YouTubeClient {
    config: YouTubeConfig,
    client: Client,
}

impl YouTubeClient {
    pub fn new(config: YouTubeConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Builds a client from `YOUTUBE_API_KEY` and `YOUTUBE_API_URL`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Configuration`] when the API key is missing.
    pub fn from_env() -> Res<Self> {
        Ok(Self::new(YouTubeConfig::from_env()?))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Res<T> {
        let api_url = format!("{url}/{endpoint}", url = self.config.api_url);

        let response = self
            .client
            .get(&api_url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::from_response("YouTube", response).await);
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PlaylistSource for YouTubeClient {
    async fn list_titles(&self, playlist_id: &str) -> Res<Vec<String>> {
        self.get_playlist_titles(playlist_id).await
    }

    async fn playlist_title(&self, playlist_id: &str) -> Res<Option<String>> {
        self.get_playlist_name(playlist_id).await
    }
}
