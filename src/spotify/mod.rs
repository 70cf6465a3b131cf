//! # Spotify Integration Module
//!
//! Client for the parts of the Spotify Web API a conversion touches. It
//! authenticates with a bearer token obtained elsewhere and wraps the HTTP
//! calls behind the crate's collaborator traits:
//!
//! ```text
//! Converter / Resolver
//!          ↓
//! CatalogSearch, PlaylistSink
//!          ↓
//! SpotifyClient (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Endpoints
//!
//! - [`search`] - `GET /search?type=track`
//! - [`playlist`] - `GET /me`, `POST /users/{user_id}/playlists`,
//!   `POST /playlists/{playlist_id}/tracks`
//!
//! ## Error Handling
//!
//! Every call is a single request. A `401 Unauthorized` becomes
//! [`Error::Authentication`] so a conversion can stop at once; any other
//! non-success status becomes [`Error::Api`], and network or decoding
//! failures become [`Error::Http`].

pub mod playlist;
pub mod search;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{
    Error, Res,
    config::{SpotifyConfig, SpotifyCredentials},
    converter::PlaylistSink,
    matching::CatalogSearch,
    types::MatchCandidate,
};

/// Authenticated Spotify Web API client.
///
/// Holds one `reqwest::Client` for connection reuse. The access token is
/// attached to every request as a bearer token and is never refreshed; an
/// expired token surfaces as [`Error::Authentication`].
pub struct SpotifyClient {
    config: SpotifyConfig,
    credentials: SpotifyCredentials,
    client: Client,
}

impl SpotifyClient {
    /// Creates a client from validated configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - API base URL, usually from [`SpotifyConfig::from_env`]
    /// * `credentials` - Bearer token checked by [`SpotifyCredentials::new`]
    ///
    /// # Example
    ///
    /// ```
    /// use syntify::config::{SpotifyConfig, SpotifyCredentials};
    /// use syntify::spotify::SpotifyClient;
    ///
    /// let credentials = SpotifyCredentials::new("BQC...")?;
    /// let spotify = SpotifyClient::new(SpotifyConfig::default(), credentials);
    /// ```
    pub fn new(config: SpotifyConfig, credentials: SpotifyCredentials) -> Self {
        Self {
            config,
            credentials,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{uri}/{path}", uri = self.config.api_url)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.url(path))
            .bearer_auth(self.credentials.access_token())
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.url(path))
            .bearer_auth(self.credentials.access_token())
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Res<T> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::from_response("Spotify", response).await);
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogSearch for SpotifyClient {
    async fn search(&self, query: &str, limit: u32) -> Res<Vec<MatchCandidate>> {
        self.search_tracks(query, limit).await
    }
}

#[async_trait]
impl PlaylistSink for SpotifyClient {
    async fn create_playlist(&self, name: &str) -> Res<String> {
        Ok(self.create(name).await?.id)
    }

    async fn add_tracks(&self, playlist_id: &str, identifiers: &[String]) -> Res<()> {
        self.add_track_uris(playlist_id, identifiers).await
    }
}
