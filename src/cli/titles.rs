use tabled::Table;

use crate::{converter::PlaylistSource, error, success, types::TitleTableRow, utils};

pub async fn titles(playlist: String) {
    let playlist_id = match utils::parse_playlist_id(&playlist) {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let youtube = super::youtube_client();

    let pb = utils::spinner("Fetching videos from YouTube...");
    let titles = youtube.list_titles(&playlist_id).await;
    pb.finish_and_clear();

    let titles = match titles {
        Ok(titles) => titles,
        Err(e) => error!("Failed to fetch playlist {}: {}", playlist_id, e),
    };

    let rows: Vec<TitleTableRow> = titles
        .into_iter()
        .enumerate()
        .map(|(i, title)| TitleTableRow {
            position: i + 1,
            title,
        })
        .collect();

    success!("Found {} videos in YouTube playlist", rows.len());
    println!("{}", Table::new(rows));
}
