use indicatif::ProgressBar;
use tabled::Table;

use crate::{
    converter::{self, ConversionEvent, ConversionRequest, PlaylistSource},
    error, info, success,
    types::NotFoundTableRow,
    utils, warning,
};

pub async fn convert(
    playlist: String,
    name: Option<String>,
    token: Option<String>,
    dry_run: bool,
) {
    let playlist_id = match utils::parse_playlist_id(&playlist) {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    // both clients are validated before the first request
    let youtube = super::youtube_client();
    let spotify = super::spotify_client(token);

    let playlist_name = match name {
        Some(name) => name,
        None => {
            let source_title = match youtube.playlist_title(&playlist_id).await {
                Ok(title) => title,
                Err(e) => {
                    warning!("Could not fetch playlist info for {}: {}", playlist_id, e);
                    None
                }
            };
            converter::default_playlist_name(source_title.as_deref())
        }
    };

    info!("Starting conversion for playlist: {}", playlist_name);
    info!("Fetching videos from YouTube playlist ID: {}", playlist_id);

    let request = ConversionRequest {
        source_playlist_id: playlist_id,
        playlist_name,
        dry_run,
    };

    let mut pb: Option<ProgressBar> = None;
    let result = converter::convert(&youtube, &spotify, &spotify, &request, |event| {
        match event {
            ConversionEvent::TitlesFetched { count, .. } => {
                info!("Found {} videos in the playlist", count);
                pb = Some(utils::progress_bar(*count));
            }
            ConversionEvent::PlaylistCreated { playlist_id, name } => {
                above(pb.as_ref(), || {
                    success!("Created Spotify playlist {} with ID: {}", name, playlist_id)
                });
            }
            ConversionEvent::Searching { title, .. } => {
                if let Some(pb) = &pb {
                    pb.set_message(title.clone());
                }
            }
            ConversionEvent::Resolved { .. } | ConversionEvent::Unresolved { .. } => {
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }
            ConversionEvent::TracksAdded { count, .. } => {
                above(pb.as_ref(), || success!("Added {} tracks to the playlist", count));
            }
            ConversionEvent::AddFailed { playlist_id, message } => {
                above(pb.as_ref(), || {
                    warning!("Could not add tracks to playlist {}: {}", playlist_id, message)
                });
            }
            ConversionEvent::NoTracksFound => {
                above(pb.as_ref(), || warning!("Could not find any tracks on Spotify"));
            }
        }
    })
    .await;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => error!("Conversion failed: {}", e),
    };

    info!(
        "Found {} tracks on Spotify out of {} videos",
        summary.found.len(),
        summary.total_videos
    );

    if !summary.not_found.is_empty() {
        warning!("Could not find {} tracks", summary.not_found.len());
        let rows: Vec<NotFoundTableRow> = summary
            .not_found
            .iter()
            .map(|title| NotFoundTableRow {
                title: title.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if let Some(e) = &summary.add_error {
        error!("Tracks were not added to the playlist: {}", e);
    }

    match (&summary.playlist_id, summary.found.is_empty()) {
        (Some(id), false) => success!("Playlist {} created successfully!", id),
        (None, _) => info!("Dry run, no playlist was created."),
        _ => {}
    }
}

// Prints without tearing a live progress bar.
fn above(pb: Option<&ProgressBar>, print: impl FnOnce()) {
    match pb {
        Some(pb) => pb.suspend(print),
        None => print(),
    }
}
