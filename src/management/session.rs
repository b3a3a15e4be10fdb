use std::path::PathBuf;

#[derive(Debug)]
pub enum SessionError {
    IoError(std::io::Error),
    CriticalError(String),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::IoError(err)
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::IoError(e) => write!(f, "{}", e),
            SessionError::CriticalError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

/// Cache of the long-lived session key, one file per user.
///
/// The file holds nothing but the raw key; a revoked key is invalidated by
/// deleting the file out of band.
pub struct SessionManager {
    user: String,
    cache_dir: PathBuf,
    key: Option<String>,
}

impl SessionManager {
    pub fn new(user: String, cache_dir: PathBuf) -> Self {
        Self {
            user,
            cache_dir,
            key: None,
        }
    }

    pub async fn load(user: String, cache_dir: PathBuf) -> Result<Self, SessionError> {
        let mut manager = Self::new(user, cache_dir);
        let content = async_fs::read_to_string(manager.session_path())
            .await
            .map_err(SessionError::IoError)?;

        let key = content.trim().to_string();
        if key.is_empty() {
            return Err(SessionError::CriticalError(
                "session cache file is empty".to_string(),
            ));
        }

        manager.key = Some(key);
        Ok(manager)
    }

    pub fn exists(&self) -> bool {
        self.session_path().is_file()
    }

    pub fn set_key(&mut self, key: String) {
        self.key = Some(key);
    }

    pub fn session_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub async fn persist(&self) -> Result<(), SessionError> {
        let Some(key) = &self.key else {
            return Err(SessionError::CriticalError(
                "no session key to persist".to_string(),
            ));
        };

        let path = self.session_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(SessionError::IoError)?;
        }

        async_fs::write(&path, key)
            .await
            .map_err(SessionError::IoError)
    }

    fn session_path(&self) -> PathBuf {
        let mut path = self.cache_dir.clone();
        path.push(format!("sessions/{user}.session", user = self.user));
        path
    }
}
