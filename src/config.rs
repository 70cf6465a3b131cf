//! Configuration management for the YouTube to Spotify converter.
//!
//! Configuration is read from environment variables and `.env` files once at
//! startup and turned into explicit structs that are handed to the client
//! constructors. Validation happens here, so a missing credential surfaces as
//! [`Error::Configuration`] before any request is made.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`syntify/.env`)
//! 4. Application defaults (API base URLs only)

use std::{env, path::PathBuf};

use crate::{Error, Res};

pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from `.env` files.
///
/// Creates the `syntify` folder in the platform-specific local data directory
/// if it doesn't exist yet, then loads `.env` from the working directory and
/// from that folder. Both files are optional; `dotenv` never overrides a
/// variable that is already set, so the process environment wins.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/syntify/.env`
/// - macOS: `~/Library/Application Support/syntify/.env`
/// - Windows: `%LOCALAPPDATA%/syntify/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or if an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            return Err(e.to_string());
        }
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Location of the user-level `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("syntify/.env");
    path
}

/// Settings for the YouTube Data API client.
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub api_url: String,
}

impl YouTubeConfig {
    /// Validates explicit settings.
    ///
    /// # Arguments
    ///
    /// * `api_key` - YouTube Data API v3 key, must not be blank
    /// * `api_url` - API base URL; a trailing slash is removed
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for a blank key.
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Res<Self> {
        Ok(Self {
            api_key: required("YOUTUBE_API_KEY", Some(api_key.into()))?,
            api_url: trim_url(api_url.into()),
        })
    }

    /// Reads `YOUTUBE_API_KEY` (required) and `YOUTUBE_API_URL`.
    pub fn from_env() -> Res<Self> {
        Self::new(
            required("YOUTUBE_API_KEY", var("YOUTUBE_API_KEY"))?,
            var("YOUTUBE_API_URL").unwrap_or_else(|| DEFAULT_YOUTUBE_API_URL.to_string()),
        )
    }
}

/// Settings for the Spotify Web API client.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub api_url: String,
}

impl SpotifyConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: trim_url(api_url.into()),
        }
    }

    /// Reads `SPOTIFY_API_URL`, falling back to the public Web API.
    pub fn from_env() -> Self {
        Self::new(var("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string()))
    }
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SPOTIFY_API_URL)
    }
}

/// Bearer token obtained outside of this tool.
#[derive(Clone)]
pub struct SpotifyCredentials {
    access_token: String,
}

impl SpotifyCredentials {
    /// Wraps a bearer token.
    ///
    /// # Arguments
    ///
    /// * `access_token` - Token with the `playlist-modify-public` scope
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for a blank token or the literal `None`
    /// that an unset shell variable leaves behind.
    ///
    /// # Example
    ///
    /// ```
    /// use syntify::config::SpotifyCredentials;
    ///
    /// assert!(SpotifyCredentials::new("").is_err());
    /// let creds = SpotifyCredentials::new("BQC-token")?;
    /// assert_eq!(creds.access_token(), "BQC-token");
    /// ```
    pub fn new(access_token: impl Into<String>) -> Res<Self> {
        let access_token = required("SPOTIFY_ACCESS_TOKEN", Some(access_token.into()))?;
        if access_token == "None" {
            return Err(Error::Configuration(
                "Not authenticated with Spotify. Provide a valid access token.".to_string(),
            ));
        }

        Ok(Self { access_token })
    }

    /// Uses `token` when given, otherwise `SPOTIFY_ACCESS_TOKEN`.
    pub fn resolve(token: Option<String>) -> Res<Self> {
        Self::new(required(
            "SPOTIFY_ACCESS_TOKEN",
            token.or_else(|| var("SPOTIFY_ACCESS_TOKEN")),
        )?)
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

// never print the token
impl std::fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("access_token", &"***")
            .finish()
    }
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn required(name: &str, value: Option<String>) -> Res<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::Configuration(format!(
            "Missing {name}. Set it in the environment or in {}.",
            env_path().display()
        ))),
    }
}

fn trim_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
