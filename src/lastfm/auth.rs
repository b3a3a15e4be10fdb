use std::collections::BTreeMap;

use crate::types::{Session, SessionResponse, TokenResponse};

use super::client::{ApiError, LastfmClient};

pub const AUTH_URL: &str = "https://www.last.fm/api/auth/";

/// Requests a one-time token via `auth.getToken`.
///
/// The token is worthless until the user authorizes it in the browser; it
/// expires after 60 minutes or on first session exchange.
pub async fn get_token(client: &LastfmClient) -> Result<String, ApiError> {
    let mut params = BTreeMap::new();
    params.insert("method", "auth.getToken".to_string());

    let json = client.get(params).await?;
    let response: TokenResponse = serde_json::from_value(json)?;
    Ok(response.token)
}

/// Builds the URL where the operator grants this application access.
pub fn authorize_url(api_key: &str, token: &str) -> String {
    format!(
        "{auth_url}?api_key={api_key}&token={token}",
        auth_url = AUTH_URL,
        api_key = api_key,
        token = token
    )
}

/// Exchanges an authorized token for a session via `auth.getSession`.
///
/// Fails with API error 14 when the token has not been authorized yet.
pub async fn get_session(client: &LastfmClient, token: &str) -> Result<Session, ApiError> {
    let mut params = BTreeMap::new();
    params.insert("method", "auth.getSession".to_string());
    params.insert("token", token.to_string());

    let json = client.get(params).await?;
    let response: SessionResponse = serde_json::from_value(json)?;
    Ok(response.session)
}
