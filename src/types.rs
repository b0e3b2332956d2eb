//! Shared type definitions
//!
//! Location state is owned by the router and opaque to this crate, so it is
//! carried as a raw `serde_json::Value` and narrowed on read (see `state`).

use serde::{Deserialize, Serialize};

use crate::app::MountedScreen;
use crate::resolver::BackResolution;

// =============================================================================
// Location Types
// =============================================================================

/// Opaque state payload attached to a history entry. `Null` means absent.
pub type LocationState = serde_json::Value;

/// The router's view of the current history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub state: LocationState,
}

impl Location {
    pub fn new(path: impl Into<String>, state: LocationState) -> Self {
        Self {
            path: path.into(),
            state,
        }
    }
}

/// Options for a path navigation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigateOptions {
    /// State to attach to the target entry (`None` clears it)
    pub state: Option<LocationState>,
    /// Overwrite the current entry instead of pushing a new one
    pub replace: bool,
}

impl NavigateOptions {
    pub fn with_state(state: LocationState) -> Self {
        Self {
            state: Some(state),
            replace: false,
        }
    }

    pub fn replace_with(state: LocationState) -> Self {
        Self {
            state: Some(state),
            replace: true,
        }
    }
}

/// A navigation request as issued to a router
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NavigationTarget {
    /// Absolute or relative path
    Path(String),
    /// Relative history movement, negative is backward
    Delta(i32),
}

// =============================================================================
// Tab Report
// =============================================================================

/// Snapshot of a simulated tab after a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabReport {
    pub path: String,
    pub state: LocationState,
    /// Zero-based cursor into the history stack
    pub index: usize,
    pub entry_count: usize,
    pub screens: Vec<MountedScreen>,
    /// Envelope a link from here would carry
    pub back_url_state: LocationState,
    /// What the back action would do now
    pub back_action: BackResolution,
    /// Back action applied by this command, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied: Option<BackResolution>,
}

// =============================================================================
// Command Response
// =============================================================================

/// Result of a simulator command, printed by the output formatter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
