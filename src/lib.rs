//! YouTube to Spotify Playlist Converter
//!
//! This library reads the video titles of a YouTube playlist, guesses the song
//! behind every title and looks it up in the Spotify catalog, then writes the
//! matches into a freshly created Spotify playlist.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Environment loading and validated client configuration
//! - `converter` - Sequential playlist conversion and progress events
//! - `error` - Crate error type
//! - `matching` - Title cleaning, artist/track extraction, scoring and resolution
//! - `spotify` - Spotify Web API client (catalog search, playlist writes)
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `youtube` - YouTube Data API client (playlist listing)
//!
//! # Example
//!
//! ```
//! use syntify::matching;
//!
//! let clean = matching::normalize("Rick Astley - Never Gonna Give You Up (Official Video)");
//! assert_eq!(clean, "Rick Astley - Never Gonna Give You Up");
//! ```

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod matching;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod youtube;

pub use error::Error;

/// Result of every fallible operation in the crate.
///
/// [`Error`] keeps configuration, authentication and transport failures
/// apart so callers can decide which of them abort a conversion.
pub type Res<T> = std::result::Result<T, Error>;

// Status output. Every line carries a coloured marker so progress, matches
// and problems stay apart in a long conversion log.

/// `[o] message` in blue, for progress.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// `[✓] message` in green, for completed steps.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// `[!] message` in red, then exits with status 1.
///
/// Only for failures nothing can recover from, such as a missing API key.
/// Library code returns [`Error`] instead; the CLI decides when to exit.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// `[!] message` in yellow, for problems that only affect one title or page.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
