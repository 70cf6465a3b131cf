use crate::{
    Res,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, User,
    },
};

use super::SpotifyClient;

pub const PLAYLIST_DESCRIPTION: &str = "Created with Syntify - YouTube to Spotify converter";

/// Spotify accepts at most 100 URIs per request.
const MAX_TRACKS_PER_REQUEST: usize = 100;

impl SpotifyClient {
    /// Profile of the user owning the access token.
    pub async fn current_user(&self) -> Res<User> {
        Self::send::<User>(self.get("me")).await
    }

    /// Creates a public playlist for the current user.
    ///
    /// Looks up the user behind the token first, since playlists are created
    /// under `users/{user_id}`. The playlist gets [`PLAYLIST_DESCRIPTION`].
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the new playlist
    ///
    /// # Returns
    ///
    /// The created playlist as Spotify reports it, including its id.
    pub async fn create(&self, name: &str) -> Res<CreatePlaylistResponse> {
        let user = self.current_user().await?;

        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: PLAYLIST_DESCRIPTION.to_string(),
            public: true,
        };

        let request = self
            .post(&format!("users/{user_id}/playlists", user_id = user.id))
            .json(&body);

        Self::send::<CreatePlaylistResponse>(request).await
    }

    /// Appends tracks to a playlist, 100 at a time. Does nothing for an
    /// empty list.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Id returned by [`SpotifyClient::create`]
    /// * `uris` - Track URIs in the order they should appear
    ///
    /// # Errors
    ///
    /// Stops at the first rejected chunk. Chunks sent before it stay in the
    /// playlist.
    pub async fn add_track_uris(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        for chunk in uris.chunks(MAX_TRACKS_PER_REQUEST) {
            let body = AddTrackToPlaylistRequest {
                uris: chunk.to_vec(),
            };

            let request = self
                .post(&format!("playlists/{playlist_id}/tracks"))
                .json(&body);

            Self::send::<AddTrackToPlaylistResponse>(request).await?;
        }

        Ok(())
    }
}
