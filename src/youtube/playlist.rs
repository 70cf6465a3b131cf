use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    Error, Res,
    types::{PlaylistItem, PlaylistItemsResponse, PlaylistsResponse},
    warning,
};

use super::YouTubeClient;

/// Titles YouTube shows in place of videos that are gone.
pub const UNAVAILABLE_TITLES: [&str; 2] = ["Deleted video", "Private video"];

const PAGE_SIZE: &str = "50";

static TOPIC_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*-\s*Topic$").unwrap());

impl YouTubeClient {
    /// Collects every video title of a playlist in playlist order.
    ///
    /// Follows `nextPageToken` until the last page. Deleted and private
    /// videos are skipped, and titles get the uploader prepended where that
    /// helps (see [`augment_title`]).
    ///
    /// # Errors
    ///
    /// A failing first page is returned as an error. When a later page fails
    /// the titles collected so far are returned and a warning is printed.
    pub async fn get_playlist_titles(&self, playlist_id: &str) -> Res<Vec<String>> {
        if playlist_id.trim().is_empty() {
            return Err(Error::InvalidPlaylist("empty playlist id".to_string()));
        }

        let mut titles: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut first_page = true;

        loop {
            let mut params = vec![
                ("part", "snippet"),
                ("maxResults", PAGE_SIZE),
                ("playlistId", playlist_id),
            ];
            if let Some(token) = &page_token {
                params.push(("pageToken", token.as_str()));
            }

            let page = match self
                .get::<PlaylistItemsResponse>("playlistItems", &params)
                .await
            {
                Ok(page) => page,
                Err(e) if first_page => return Err(e),
                Err(e) => {
                    warning!("Stopped reading playlist {} early: {}", playlist_id, e);
                    break;
                }
            };
            first_page = false;

            titles.extend(page.items.iter().filter_map(item_title));

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        Ok(titles)
    }

    /// Title of the playlist itself.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Bare playlist id, e.g. `PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf`
    ///
    /// # Returns
    ///
    /// `None` if YouTube does not return the playlist, which happens for
    /// private playlists and auto-generated mixes.
    ///
    /// # Example
    ///
    /// ```
    /// let youtube = YouTubeClient::from_env()?;
    /// let name = youtube.get_playlist_name("PL123").await?;
    /// let target = converter::default_playlist_name(name.as_deref());
    /// ```
    pub async fn get_playlist_name(&self, playlist_id: &str) -> Res<Option<String>> {
        let response = self
            .get::<PlaylistsResponse>("playlists", &[("part", "snippet"), ("id", playlist_id)])
            .await?;

        Ok(response
            .items
            .into_iter()
            .find_map(|p| p.snippet.map(|s| s.title)))
    }
}

/// Display title for one playlist entry, `None` for unavailable videos.
pub fn item_title(item: &PlaylistItem) -> Option<String> {
    let snippet = item.snippet.as_ref()?;
    let title = snippet.title.as_deref()?;
    if is_unavailable(title) {
        return None;
    }

    Some(augment_title(
        title,
        snippet.video_owner_channel_title.as_deref(),
    ))
}

pub fn is_unavailable(title: &str) -> bool {
    UNAVAILABLE_TITLES.contains(&title)
}

/// Prepends the uploader to a title that lacks an artist.
///
/// Auto-generated "Artist - Topic" channels lose their suffix first. The
/// channel is only added when the title has no `" - "` separator and does
/// not mention the channel already.
pub fn augment_title(title: &str, channel: Option<&str>) -> String {
    let Some(channel) = channel else {
        return title.to_string();
    };

    let channel = TOPIC_SUFFIX.replace(channel, "");
    if channel.is_empty() || title.contains(channel.as_ref()) || title.contains(" - ") {
        return title.to_string();
    }

    format!("{} - {}", channel, title)
}
