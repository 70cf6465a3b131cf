use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use url::Url;

use crate::{
    Error, Res,
    types::{MatchOutcome, ResolveTableRow},
};

/// Extracts the playlist id from a YouTube URL or returns a bare id as is.
///
/// Accepts anything carrying a `list=` query parameter, e.g.
/// `https://www.youtube.com/playlist?list=PL123` or
/// `https://youtube.com/watch?v=abc&list=PL123&index=2`.
pub fn parse_playlist_id(input: &str) -> Res<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::InvalidPlaylist("empty playlist reference".to_string()));
    }

    if !input.contains("://") {
        if input.contains(['/', '?', '&', '=']) {
            return Err(Error::InvalidPlaylist(format!(
                "{} is neither a playlist id nor a URL",
                input
            )));
        }
        return Ok(input.to_string());
    }

    let url = Url::parse(input).map_err(|e| Error::InvalidPlaylist(format!("{}: {}", input, e)))?;

    url.query_pairs()
        .find(|(key, value)| key == "list" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| {
            Error::InvalidPlaylist(format!("{} has no list= parameter", input))
        })
}

/// Ticking spinner for a single request of unknown length.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Bar over `len` titles; the message shows the title being searched.
pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{bar:30.blue/white}] {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb
}

pub fn resolve_table_row(title: &str, outcome: &MatchOutcome) -> ResolveTableRow {
    match outcome {
        MatchOutcome::Found {
            identifier,
            strategy,
            score,
        } => ResolveTableRow {
            title: title.to_string(),
            strategy: strategy.to_string(),
            score: score.map_or_else(|| "-".to_string(), |s| s.to_string()),
            identifier: identifier.clone(),
        },
        MatchOutcome::NotFound => ResolveTableRow {
            title: title.to_string(),
            strategy: "not found".to_string(),
            score: "-".to_string(),
            identifier: "-".to_string(),
        },
    }
}
