use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{self, Config},
    error, info,
    lastfm::{client::LastfmClient, scrobble as lastfm_scrobble},
    logfile,
    management::SessionManager,
    success,
    types::ScrobbleTrack,
};

pub async fn scrobble(file: PathBuf, utc_offset: i64) {
    let cfg = match Config::load(None).await {
        Ok(cfg) => cfg,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let session_mgr = match SessionManager::load(cfg.user.clone(), config::cache_dir()).await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "No cached session for {}. Please run scroblcli auth\n Error: {}",
                cfg.user, e
            );
        }
    };

    let session_key = match session_mgr.session_key() {
        Some(key) => key.to_string(),
        None => error!(
            "Session cache for {} is empty. Please run scroblcli auth",
            session_mgr.user()
        ),
    };

    let tracks = match logfile::load(&file).await {
        Ok(tracks) => tracks,
        Err(e) => error!("Cannot parse {}: {}", file.display(), e),
    };

    let total_entries = tracks.len();
    let listened: Vec<ScrobbleTrack> = tracks.into_iter().filter(|t| t.is_listened()).collect();

    if listened.is_empty() {
        info!(
            "No fully listened entries in {} ({} total). Nothing to submit.",
            file.display(),
            total_entries
        );
        return;
    }

    info!(
        "Submitting {} of {} entries from {}...",
        listened.len(),
        total_entries,
        file.display()
    );

    let client = LastfmClient::new(cfg.api_key.clone(), cfg.api_secret.clone());

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let total = listened.len();
    let mut accepted = 0;
    let mut ignored = 0;

    // one request at a time, in log order
    for (count, track) in listened.iter().enumerate() {
        pb.set_message(format!(
            "Scrobbling {artist} - {title} ({count}/{total})",
            artist = track.artist,
            title = track.title,
            count = count + 1,
            total = total
        ));

        match lastfm_scrobble::submit(&client, &session_key, track, utc_offset).await {
            Ok(receipt) => {
                accepted += receipt.scrobbles.attr.accepted;
                ignored += receipt.scrobbles.attr.ignored;
            }
            Err(e) => {
                pb.finish_and_clear();
                error!(
                    "Failed to scrobble {artist} - {title} after {count} of {total} submissions: {error}",
                    artist = track.artist,
                    title = track.title,
                    count = count,
                    total = total,
                    error = e
                );
            }
        }
    }

    pb.finish_and_clear();
    success!(
        "Submitted {} scrobbles ({} accepted, {} ignored).",
        total,
        accepted,
        ignored
    );
}
