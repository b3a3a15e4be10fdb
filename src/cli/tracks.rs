use std::path::PathBuf;

use tabled::Table;

use crate::{
    error, logfile,
    types::TrackTableRow,
    utils,
};

pub async fn tracks(file: PathBuf) {
    let tracks = match logfile::load(&file).await {
        Ok(tracks) => tracks,
        Err(e) => error!("Cannot parse {}: {}", file.display(), e),
    };

    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            date: utils::format_timestamp(t.timestamp),
            artist: t.artist.clone(),
            title: t.title.clone(),
            album: t.album.clone().unwrap_or_default(),
            rating: t.rating.to_string(),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
