//! Session resolution and persistence
//!
//! Handles resolving which session to use for commands based on:
//! - Explicit --session flag
//! - BACKNAV_SESSION environment variable
//! - Default session name
//!
//! A session is one simulated browser tab: its history stack plus the
//! screens currently mounted, saved as a JSON file per session.

use std::fs;
use std::path::PathBuf;

use log::info;
use serde::{Deserialize, Serialize};

use crate::app::MountedScreen;
use crate::config::Config;
use crate::error::{NavError, Result};
use crate::history::HistoryStack;

/// Session name
pub type SessionId = String;

// =============================================================================
// Session Resolver
// =============================================================================

/// Resolves the session ID to use for a command
pub struct SessionResolver {
    config: Config,
}

impl SessionResolver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Resolve the session ID to use
    ///
    /// Priority order:
    /// 1. Explicit session name (from --session flag)
    /// 2. Default session name from config (already env-aware)
    pub fn resolve(&self, explicit_session: Option<&str>) -> Result<SessionId> {
        let session = explicit_session.unwrap_or(self.config.default_session.as_str());

        if !validate_session_name(session) {
            return Err(NavError::InvalidSession(format!(
                "{:?} (use 1-64 alphanumeric, '-' or '_' characters)",
                session
            )));
        }

        Ok(session.to_string())
    }
}

/// Validate a session name
pub fn validate_session_name(name: &str) -> bool {
    const MAX_LENGTH: usize = 64;

    if name.is_empty() || name.len() > MAX_LENGTH {
        return false;
    }

    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

// =============================================================================
// Session Store
// =============================================================================

/// Saved state of one simulated tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    pub history: HistoryStack,
    #[serde(default)]
    pub screens: Vec<MountedScreen>,
}

/// Loads and saves session files under the configured state directory
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, session: &str) -> PathBuf {
        self.dir.join(format!("{}.json", session))
    }

    pub fn exists(&self, session: &str) -> bool {
        self.path_for(session).is_file()
    }

    pub fn load(&self, session: &str) -> Result<SessionFile> {
        let path = self.path_for(session);
        if !path.is_file() {
            return Err(NavError::SessionNotFound(session.to_string()));
        }

        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, session: &str, file: &SessionFile) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(session);
        let text = serde_json::to_string_pretty(file)?;
        fs::write(&path, text)?;
        info!("saved session {} to {}", session, path.display());
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SESSION_NAME;
    use crate::history::MemoryHistory;

    #[test]
    fn validate_session_name_accepts_alphanumeric() {
        assert!(validate_session_name("session123"));
        assert!(validate_session_name("Session"));
        assert!(validate_session_name("123"));
    }

    #[test]
    fn validate_session_name_accepts_dashes_and_underscores() {
        assert!(validate_session_name("my-session"));
        assert!(validate_session_name("my_session"));
    }

    #[test]
    fn validate_session_name_rejects_empty_and_path_chars() {
        assert!(!validate_session_name(""));
        assert!(!validate_session_name("my session"));
        assert!(!validate_session_name("../etc"));
        assert!(!validate_session_name("my/session"));
    }

    #[test]
    fn validate_session_name_enforces_max_length() {
        assert!(validate_session_name(&"a".repeat(64)));
        assert!(!validate_session_name(&"a".repeat(65)));
    }

    #[test]
    fn resolver_prefers_explicit_session() {
        let resolver = SessionResolver::new(Config::default());
        assert_eq!(resolver.resolve(Some("work")).unwrap(), "work");
    }

    #[test]
    fn resolver_falls_back_to_config_default() {
        let resolver = SessionResolver::new(Config::default());
        assert_eq!(resolver.resolve(None).unwrap(), DEFAULT_SESSION_NAME);

        let resolver = SessionResolver::new(Config {
            default_session: "from-env".to_string(),
            ..Default::default()
        });
        assert_eq!(resolver.resolve(None).unwrap(), "from-env");
    }

    #[test]
    fn resolver_rejects_invalid_names() {
        let resolver = SessionResolver::new(Config::default());
        let err = resolver.resolve(Some("bad name")).unwrap_err();
        assert!(matches!(err, NavError::InvalidSession(_)));
    }

    #[test]
    fn store_round_trips_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("sessions"));
        let file = SessionFile {
            history: MemoryHistory::new("/modal").snapshot(),
            screens: vec![MountedScreen {
                route: "/".to_string(),
                back_url: Some("/home".to_string()),
            }],
        };

        assert!(!store.exists("tab1"));
        store.save("tab1", &file).unwrap();
        assert!(store.exists("tab1"));
        assert_eq!(store.load("tab1").unwrap(), file);
    }

    #[test]
    fn store_load_missing_session_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        let err = store.load("nope").unwrap_err();
        assert!(matches!(err, NavError::SessionNotFound(_)));
    }

    #[test]
    fn store_load_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        std::fs::write(store.path_for("bad"), "{not json").unwrap();
        let err = store.load("bad").unwrap_err();
        assert!(matches!(err, NavError::SerializationError(_)));
    }
}
