//! Playlist conversion.
//!
//! Reads the titles of a source playlist, resolves each one against the
//! catalog and writes the matches into a new destination playlist. Titles are
//! handled one at a time in playlist order, so progress events arrive in a
//! stable order and the catalog never sees more than one search at a time.

use async_trait::async_trait;

use crate::{
    Res,
    matching::{self, CatalogSearch},
    types::{ConversionSummary, MatchOutcome, ResolvedTitle},
};

pub const DEFAULT_PLAYLIST_NAME: &str = "Syntify Playlist";

/// Where video titles come from.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// All usable titles of the playlist, in playlist order.
    async fn list_titles(&self, playlist_id: &str) -> Res<Vec<String>>;

    /// Name of the playlist, if the source exposes it.
    async fn playlist_title(&self, playlist_id: &str) -> Res<Option<String>>;
}

/// Where resolved tracks go.
#[async_trait]
pub trait PlaylistSink: Send + Sync {
    /// Creates an empty playlist and returns its id.
    async fn create_playlist(&self, name: &str) -> Res<String>;

    async fn add_tracks(&self, playlist_id: &str, identifiers: &[String]) -> Res<()>;
}

/// Progress of a running conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionEvent {
    TitlesFetched { playlist_id: String, count: usize },
    PlaylistCreated { playlist_id: String, name: String },
    Searching { position: usize, title: String },
    Resolved { title: String, identifier: String },
    Unresolved { title: String },
    TracksAdded { playlist_id: String, count: usize },
    AddFailed { playlist_id: String, message: String },
    NoTracksFound,
}

#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source_playlist_id: String,
    pub playlist_name: String,
    /// Resolve only; neither create a playlist nor add tracks.
    pub dry_run: bool,
}

/// Playlist name derived from the source, e.g. `"Syntified: Road Trip"`.
pub fn default_playlist_name(source_title: Option<&str>) -> String {
    match source_title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => format!("Syntified: {}", title),
        None => DEFAULT_PLAYLIST_NAME.to_string(),
    }
}

/// Runs a conversion and reports every step to `on_event`.
///
/// Each title ends up in exactly one of `found` or `not_found` before any
/// track is written. A title whose search fails is counted as not found and
/// the run carries on. Configuration and authentication errors during the
/// search abort the run.
///
/// When nothing matched, the destination playlist stays empty and no add
/// request is made. A failing add does not discard the work done so far: the
/// summary is returned with [`ConversionSummary::add_error`] set.
///
/// # Errors
///
/// Fails if the source titles cannot be listed, the destination playlist
/// cannot be created, or a search error is fatal (see
/// [`crate::Error::is_fatal`]).
pub async fn convert<P, C, K, F>(
    source: &P,
    catalog: &C,
    sink: &K,
    request: &ConversionRequest,
    mut on_event: F,
) -> Res<ConversionSummary>
where
    P: PlaylistSource + ?Sized,
    C: CatalogSearch + ?Sized,
    K: PlaylistSink + ?Sized,
    F: FnMut(&ConversionEvent),
{
    let titles = source.list_titles(&request.source_playlist_id).await?;
    on_event(&ConversionEvent::TitlesFetched {
        playlist_id: request.source_playlist_id.clone(),
        count: titles.len(),
    });

    let mut summary = ConversionSummary {
        total_videos: titles.len(),
        ..Default::default()
    };

    if !request.dry_run {
        let playlist_id = sink.create_playlist(&request.playlist_name).await?;
        on_event(&ConversionEvent::PlaylistCreated {
            playlist_id: playlist_id.clone(),
            name: request.playlist_name.clone(),
        });
        summary.playlist_id = Some(playlist_id);
    }

    for (position, title) in titles.into_iter().enumerate() {
        on_event(&ConversionEvent::Searching {
            position: position + 1,
            title: title.clone(),
        });

        match matching::resolve(&title, catalog).await? {
            MatchOutcome::Found {
                identifier,
                strategy,
                score,
            } => {
                on_event(&ConversionEvent::Resolved {
                    title: title.clone(),
                    identifier: identifier.clone(),
                });
                summary.found.push(ResolvedTitle {
                    title,
                    identifier,
                    strategy,
                    score,
                });
            }
            MatchOutcome::NotFound => {
                on_event(&ConversionEvent::Unresolved {
                    title: title.clone(),
                });
                summary.not_found.push(title);
            }
        }
    }

    if summary.found.is_empty() {
        on_event(&ConversionEvent::NoTracksFound);
        return Ok(summary);
    }

    if let Some(playlist_id) = summary.playlist_id.clone() {
        match sink.add_tracks(&playlist_id, &summary.identifiers()).await {
            Ok(()) => on_event(&ConversionEvent::TracksAdded {
                playlist_id,
                count: summary.found.len(),
            }),
            Err(e) => {
                let message = e.to_string();
                on_event(&ConversionEvent::AddFailed {
                    playlist_id,
                    message: message.clone(),
                });
                summary.add_error = Some(message);
            }
        }
    }

    Ok(summary)
}
