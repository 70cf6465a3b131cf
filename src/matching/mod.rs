//! # Matching Module
//!
//! Turns a noisy YouTube video title into a catalog track identifier.
//!
//! ```text
//! raw title ──normalize──▶ clean title ──extract──▶ artist / track guess
//!                                 │                        │
//!                                 └────────┬───────────────┘
//!                                          ▼
//!                 resolve: Structured ▶ FreeText ▶ TrackOnly ▶ NotFound
//!                                          │
//!                                 CatalogSearch::search
//! ```
//!
//! - [`normalize`] strips decorative noise ("Official Video", "(HD)", dates).
//! - [`extract`] splits the clean title into artist and track.
//! - [`score`] and [`best_match`] rate search results against the clean title.
//! - [`resolve`] runs the search strategies in order and stops at the first
//!   accepted candidate.
//!
//! Everything except [`resolve`] is pure. [`resolve`] talks to the catalog
//! through the [`CatalogSearch`] trait so it can be driven by the Spotify
//! client or by a fake in tests.

mod extract;
mod normalize;
mod resolve;
mod score;

use async_trait::async_trait;

use crate::{Res, types::MatchCandidate};

pub use extract::extract;
pub use normalize::normalize;
pub use resolve::{STRATEGIES, resolve};
pub use score::{best_match, score};

/// Text search over a track catalog.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Returns up to `limit` candidates in the catalog's relevance order.
    async fn search(&self, query: &str, limit: u32) -> Res<Vec<MatchCandidate>>;
}
