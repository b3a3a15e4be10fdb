use std::collections::BTreeMap;

use crate::{
    types::{ScrobbleResponse, ScrobbleTrack},
    utils,
};

use super::client::{ApiError, LastfmClient};

/// Maps a parsed log entry to the `track.scrobble` parameter set.
///
/// The submitted timestamp is the log's device-local timestamp adjusted by
/// the UTC offset. Album and MusicBrainz id are only sent when the log
/// carried them.
pub fn scrobble_params(
    track: &ScrobbleTrack,
    session_key: &str,
    utc_offset: i64,
) -> BTreeMap<&'static str, String> {
    let mut params = BTreeMap::new();
    params.insert("method", "track.scrobble".to_string());
    params.insert("sk", session_key.to_string());
    params.insert("artist", track.artist.clone());
    params.insert("track", track.title.clone());
    params.insert(
        "timestamp",
        utils::adjust_timestamp(track.timestamp, utc_offset).to_string(),
    );
    params.insert("trackNumber", track.track_number.to_string());
    params.insert("duration", track.duration.to_string());

    if let Some(album) = &track.album {
        params.insert("album", album.clone());
    }
    if let Some(mbid) = &track.mbid {
        params.insert("mbid", mbid.clone());
    }

    params
}

/// Submits a single track entry as a scrobble.
pub async fn submit(
    client: &LastfmClient,
    session_key: &str,
    track: &ScrobbleTrack,
    utc_offset: i64,
) -> Result<ScrobbleResponse, ApiError> {
    let params = scrobble_params(track, session_key, utc_offset);
    let json = client.post(params).await?;
    let response: ScrobbleResponse = serde_json::from_value(json)?;
    Ok(response)
}
