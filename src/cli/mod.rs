//! # CLI Module
//!
//! User-facing commands of `syntify`. Each command builds the clients it
//! needs from configuration, runs one library operation and renders the
//! result with the coloured status macros, progress bars and tables.
//!
//! ## Commands
//!
//! - [`convert`] - Convert a YouTube playlist into a new Spotify playlist
//! - [`titles`] - List the video titles of a YouTube playlist
//! - [`inspect`] - Show how titles are cleaned and split, without any request
//! - [`resolve`] - Look titles up on Spotify without creating a playlist
//!
//! ## Usage Patterns
//!
//! ```bash
//! syntify convert "https://www.youtube.com/playlist?list=PL..."  # Full conversion
//! syntify convert PL... --name "Road Trip" --dry-run             # Preview matches
//! syntify titles PL...                                           # What YouTube returns
//! syntify inspect "Artist - Song (Official Video)"               # Offline check
//! syntify resolve "Artist - Song (Official Video)"               # Single lookups
//! ```
//!
//! Configuration errors are fatal and reported before any request is sent.
//! Titles that cannot be matched are listed at the end of a conversion.

mod convert;
mod inspect;
mod resolve;
mod titles;

pub use convert::convert;
pub use inspect::inspect;
pub use resolve::resolve;
pub use titles::titles;

use crate::{
    config::{SpotifyConfig, SpotifyCredentials, YouTubeConfig},
    error,
    spotify::SpotifyClient,
    youtube::YouTubeClient,
};

fn youtube_client() -> YouTubeClient {
    match YouTubeConfig::from_env() {
        Ok(config) => YouTubeClient::new(config),
        Err(e) => error!("{}", e),
    }
}

fn spotify_client(token: Option<String>) -> SpotifyClient {
    match SpotifyCredentials::resolve(token) {
        Ok(credentials) => SpotifyClient::new(SpotifyConfig::from_env(), credentials),
        Err(e) => error!("{}", e),
    }
}
