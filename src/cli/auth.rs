use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::timeout;

use crate::{
    config::{self, Config},
    error, info,
    lastfm::{auth as lastfm_auth, client::LastfmClient},
    management::SessionManager,
    success, warning,
};

const CONFIRM_TIMEOUT: Duration = Duration::from_secs(300);

/// Performs the session-key handshake and caches the result.
///
/// This is the out-of-band authorization step: request a one-time token,
/// send the operator to the authorize URL, wait for confirmation, exchange
/// the token for a session key and persist it. Subsequent runs find the
/// cached key and skip the handshake entirely.
pub async fn auth() {
    let cfg = match Config::load(None).await {
        Ok(cfg) => cfg,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let mut session_mgr = SessionManager::new(cfg.user.clone(), config::cache_dir());
    if session_mgr.exists() {
        info!(
            "A session for {} is already cached. Delete the session file to re-authorize.",
            cfg.user
        );
        return;
    }

    let client = LastfmClient::new(cfg.api_key.clone(), cfg.api_secret.clone());

    let token = match lastfm_auth::get_token(&client).await {
        Ok(token) => token,
        Err(e) => error!("Failed to request a token: {}", e),
    };

    // Open the authorization URL in the default browser
    let url = lastfm_auth::authorize_url(client.api_key(), &token);
    if webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }

    info!("Grant access in your browser, then press Enter here to continue...");
    if !wait_for_confirmation().await {
        error!("Authorization timed out.");
    }

    let session = match lastfm_auth::get_session(&client, &token).await {
        Ok(session) => session,
        Err(e) => error!("Failed to exchange the token for a session: {}", e),
    };

    session_mgr.set_key(session.key.clone());
    if let Err(e) = session_mgr.persist().await {
        error!("Failed to save session to cache: {}", e);
    }

    success!("Authenticated as {}.", session.name);
}

/// Blocks on operator input, bounded so an abandoned handshake cannot hang
/// the process forever.
async fn wait_for_confirmation() -> bool {
    let mut line = String::new();
    let mut reader = BufReader::new(tokio::io::stdin());

    matches!(
        timeout(CONFIRM_TIMEOUT, reader.read_line(&mut line)).await,
        Ok(Ok(_))
    )
}
