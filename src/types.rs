use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Listened,
    Skipped,
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Listened => write!(f, "listened"),
            Rating::Skipped => write!(f, "skipped"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrobbleTrack {
    pub artist: String,
    pub album: Option<String>,
    pub title: String,
    pub track_number: u32,
    pub duration: u32,
    pub rating: Rating,
    pub timestamp: i64,
    pub mbid: Option<String>,
}

impl ScrobbleTrack {
    pub fn is_listened(&self) -> bool {
        self.rating == Rating::Listened
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub session: Session,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrobbleResponse {
    pub scrobbles: Scrobbles,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scrobbles {
    #[serde(rename = "@attr")]
    pub attr: ScrobbleAttr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrobbleAttr {
    pub accepted: u32,
    pub ignored: u32,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub date: String,
    pub artist: String,
    pub title: String,
    pub album: String,
    pub rating: String,
}
