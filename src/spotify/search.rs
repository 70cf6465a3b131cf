use crate::{
    Res,
    types::{MatchCandidate, SearchResponse, Track},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Searches the catalog for tracks.
    ///
    /// # Arguments
    ///
    /// * `query` - Free text, or Spotify field filters such as
    ///   `artist:Rick Astley track:Never Gonna Give You Up`
    /// * `limit` - Maximum number of results (1-50)
    ///
    /// # Returns
    ///
    /// Candidates in Spotify's relevance order, possibly empty. The
    /// identifier of each candidate is the track URI.
    ///
    /// # Example
    ///
    /// ```
    /// let candidates = spotify.search_tracks("artist:Daft Punk track:Get Lucky", 5).await?;
    /// for c in &candidates {
    ///     println!("{} -> {}", c.display, c.identifier);
    /// }
    /// ```
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Res<Vec<MatchCandidate>> {
        let limit = limit.to_string();
        let request = self
            .get("search")
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())]);

        let response = Self::send::<SearchResponse>(request).await?;
        Ok(candidates_from(response))
    }
}

/// Maps a search response onto match candidates.
pub fn candidates_from(response: SearchResponse) -> Vec<MatchCandidate> {
    response
        .tracks
        .map(|page| page.items.iter().map(candidate_from_track).collect())
        .unwrap_or_default()
}

/// `"<first artist> - <track>"`; tracks without artists show the name only.
pub fn candidate_from_track(track: &Track) -> MatchCandidate {
    let display = match track.artists.first() {
        Some(artist) => format!("{} - {}", artist.name, track.name),
        None => track.name.clone(),
    };
    MatchCandidate::new(display, track.uri.clone())
}
