//! Configuration for the backnav simulator
//!
//! Handles configuration loading from environment variables and defaults.

use std::path::PathBuf;

use log::warn;

// =============================================================================
// Constants
// =============================================================================

/// Environment variable for the session state directory
pub const ENV_STATE_DIR: &str = "BACKNAV_STATE_DIR";

/// Environment variable for the session name
pub const ENV_SESSION_NAME: &str = "BACKNAV_SESSION";

/// Environment variable for the comma-separated screen routes
pub const ENV_SCREENS: &str = "BACKNAV_SCREENS";

/// Environment variable for the log filter
pub const ENV_LOG: &str = "BACKNAV_LOG";

/// Default session name
pub const DEFAULT_SESSION_NAME: &str = "default";

/// Screens mounted below the root by default
pub const DEFAULT_SCREENS: &[&str] = &["/modal"];

// =============================================================================
// Config Struct
// =============================================================================

/// Simulator configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one JSON file per session
    pub state_dir: PathBuf,

    /// Default session name to use
    pub default_session: String,

    /// Screen routes below the root, e.g. `/modal`
    pub screens: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: std::env::temp_dir().join("backnav"),
            default_session: DEFAULT_SESSION_NAME.to_string(),
            screens: DEFAULT_SCREENS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(state_dir) = lookup(ENV_STATE_DIR) {
            config.state_dir = PathBuf::from(state_dir);
        }

        if let Some(session_name) = lookup(ENV_SESSION_NAME) {
            config.default_session = session_name;
        }

        if let Some(screens) = lookup(ENV_SCREENS) {
            config.screens = parse_screens(&screens);
        }

        config
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Load the global simulator configuration
pub fn load_config() -> Config {
    Config::from_env()
}

/// Parse a comma-separated route list. Routes must be absolute; trailing
/// slashes are dropped.
pub fn parse_screens(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|route| !route.is_empty())
        .filter_map(|route| {
            if !route.starts_with('/') {
                warn!("ignoring screen route {:?}: must start with '/'", route);
                return None;
            }
            let trimmed = route.trim_end_matches('/');
            Some(if trimmed.is_empty() { "/" } else { trimmed }.to_string())
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config_has_correct_values() {
        let config = Config::default();
        assert_eq!(config.state_dir, std::env::temp_dir().join("backnav"));
        assert_eq!(config.default_session, DEFAULT_SESSION_NAME);
        assert_eq!(config.screens, vec!["/modal"]);
    }

    #[test]
    fn from_vars_loads_state_dir() {
        let config = Config::from_vars(vars(&[(ENV_STATE_DIR, "/tmp/nav-test")]));
        assert_eq!(config.state_dir, PathBuf::from("/tmp/nav-test"));
    }

    #[test]
    fn from_vars_loads_session_name() {
        let config = Config::from_vars(vars(&[(ENV_SESSION_NAME, "work")]));
        assert_eq!(config.default_session, "work");
    }

    #[test]
    fn from_vars_loads_screens() {
        let config = Config::from_vars(vars(&[(ENV_SCREENS, "/modal, /profile/,settings")]));
        assert_eq!(config.screens, vec!["/modal", "/profile"]);
    }

    #[test]
    fn from_vars_uses_defaults_when_unset() {
        let config = Config::from_vars(vars(&[]));
        assert_eq!(config.default_session, DEFAULT_SESSION_NAME);
        assert_eq!(config.screens, vec!["/modal"]);
    }

    #[test]
    fn parse_screens_handles_empty_and_root() {
        assert!(parse_screens("").is_empty());
        assert!(parse_screens(" , ").is_empty());
        assert_eq!(parse_screens("/"), vec!["/"]);
    }
}
