use tabled::Table;

use crate::{matching, types::InspectTableRow};

pub fn inspect(titles: Vec<String>) {
    let rows: Vec<InspectTableRow> = titles
        .into_iter()
        .map(|title| {
            let clean = matching::normalize(&title);
            let extraction = matching::extract(&clean);
            InspectTableRow {
                title,
                clean,
                artist: extraction.artist.unwrap_or_else(|| "-".to_string()),
                track: extraction.track,
            }
        })
        .collect();

    println!("{}", Table::new(rows));
}
