use tabled::Table;

use crate::{error, matching, types::ResolveTableRow, utils};

pub async fn resolve(titles: Vec<String>, token: Option<String>) {
    let spotify = super::spotify_client(token);

    let pb = utils::progress_bar(titles.len());
    let mut rows: Vec<ResolveTableRow> = Vec::new();

    for title in titles {
        pb.set_message(title.clone());
        let outcome = match matching::resolve(&title, &spotify).await {
            Ok(outcome) => outcome,
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to search Spotify: {}", e);
            }
        };
        rows.push(utils::resolve_table_row(&title, &outcome));
        pb.inc(1);
    }

    pb.finish_and_clear();
    println!("{}", Table::new(rows));
}
