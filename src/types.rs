use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One catalog search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    /// `"<artist> - <track>"`, only used for scoring.
    pub display: String,
    /// Opaque reference handed to the playlist sink, e.g. `spotify:track:...`.
    pub identifier: String,
}

impl MatchCandidate {
    pub fn new(display: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            identifier: identifier.into(),
        }
    }
}

/// Artist/track guess for a cleaned title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub artist: Option<String>,
    pub track: String,
}

/// Search strategy of the resolver, in the order they are tried.
///
/// - `Structured` - `artist:<artist> track:<track>` field search, accepted
///   above a score of 70
/// - `FreeText` - the whole clean title, accepted above 65
/// - `TrackOnly` - the track part alone, first result accepted unscored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Structured,
    FreeText,
    TrackOnly,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Structured => "structured",
            Strategy::FreeText => "free-text",
            Strategy::TrackOnly => "track-only",
        };
        write!(f, "{}", name)
    }
}

/// Result of resolving one title. A miss is an outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Found {
        identifier: String,
        strategy: Strategy,
        /// `None` for the unscored track-only fallback.
        score: Option<u8>,
    },
    NotFound,
}

impl MatchOutcome {
    pub fn identifier(&self) -> Option<&str> {
        match self {
            MatchOutcome::Found { identifier, .. } => Some(identifier),
            MatchOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MatchOutcome::Found { .. })
    }
}

/// A source title together with the track it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub title: String,
    pub identifier: String,
    pub strategy: Strategy,
    pub score: Option<u8>,
}

/// Outcome of a whole conversion.
///
/// Every source title is in exactly one of `found` or `not_found`, so
/// `found.len() + not_found.len() == total_videos`. The counts stay valid
/// when writing to the destination playlist failed; that failure is kept in
/// `add_error`.
#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    /// `None` on a dry run.
    pub playlist_id: Option<String>,
    pub total_videos: usize,
    pub found: Vec<ResolvedTitle>,
    pub not_found: Vec<String>,
    /// Why the resolved tracks could not be added, if they could not.
    pub add_error: Option<String>,
}

impl ConversionSummary {
    /// Identifiers of all found tracks in playlist order, ready for
    /// [`crate::converter::PlaylistSink::add_tracks`].
    pub fn identifiers(&self) -> Vec<String> {
        self.found.iter().map(|r| r.identifier.clone()).collect()
    }
}

#[derive(Tabled)]
pub struct TitleTableRow {
    pub position: usize,
    pub title: String,
}

#[derive(Tabled)]
pub struct InspectTableRow {
    pub title: String,
    pub clean: String,
    pub artist: String,
    pub track: String,
}

#[derive(Tabled)]
pub struct ResolveTableRow {
    pub title: String,
    pub strategy: String,
    pub score: String,
    pub identifier: String,
}

#[derive(Tabled)]
pub struct NotFoundTableRow {
    pub title: String,
}

// YouTube Data API v3

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub snippet: Option<PlaylistItemSnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub title: Option<String>,
    pub video_owner_channel_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistsResponse {
    #[serde(default)]
    pub items: Vec<YouTubePlaylist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubePlaylist {
    pub id: String,
    pub snippet: Option<YouTubePlaylistSnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubePlaylistSnippet {
    pub title: String,
}

// Spotify Web API

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}
