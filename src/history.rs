//! In-memory browser history
//!
//! A `Router` backed by a plain entry stack with a cursor. Behaves like the
//! browser history API: pushes drop forward entries, replaces overwrite the
//! current entry, and out-of-range deltas are ignored.

use std::cell::RefCell;

use log::debug;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::router::Router;
use crate::types::{LocationState, NavigateOptions};

// =============================================================================
// History Entry
// =============================================================================

/// A single history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique key, regenerated on every push or replace
    pub key: String,
    pub path: String,
    #[serde(default)]
    pub state: LocationState,
    pub created_at: String,
}

impl HistoryEntry {
    pub fn new(path: impl Into<String>, state: LocationState) -> Self {
        Self {
            key: Uuid::new_v4().simple().to_string(),
            path: path.into(),
            state,
            created_at: current_timestamp(),
        }
    }
}

/// Serializable snapshot of a history stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStack {
    pub entries: Vec<HistoryEntry>,
    pub index: usize,
}

// =============================================================================
// Memory History
// =============================================================================

#[derive(Debug)]
pub struct MemoryHistory {
    stack: RefCell<HistoryStack>,
}

impl MemoryHistory {
    /// Start a fresh history with a single stateless entry at `path`
    pub fn new(path: &str) -> Self {
        let path = resolve_path("/", path);
        Self {
            stack: RefCell::new(HistoryStack {
                entries: vec![HistoryEntry::new(path, LocationState::Null)],
                index: 0,
            }),
        }
    }

    /// Restore a saved stack. An empty stack falls back to `/` and an
    /// out-of-bounds cursor is clamped to the last entry.
    pub fn from_stack(mut stack: HistoryStack) -> Self {
        if stack.entries.is_empty() {
            return Self::new("/");
        }
        if stack.index >= stack.entries.len() {
            stack.index = stack.entries.len() - 1;
        }
        Self {
            stack: RefCell::new(stack),
        }
    }

    pub fn snapshot(&self) -> HistoryStack {
        self.stack.borrow().clone()
    }

    pub fn entry_count(&self) -> usize {
        self.stack.borrow().entries.len()
    }

    pub fn index(&self) -> usize {
        self.stack.borrow().index
    }

    pub fn current_entry(&self) -> HistoryEntry {
        let stack = self.stack.borrow();
        stack.entries[stack.index].clone()
    }
}

impl Router for MemoryHistory {
    fn current_path(&self) -> String {
        let stack = self.stack.borrow();
        stack.entries[stack.index].path.clone()
    }

    fn current_state(&self) -> LocationState {
        let stack = self.stack.borrow();
        stack.entries[stack.index].state.clone()
    }

    fn navigate(&self, target: &str, options: NavigateOptions) {
        let mut stack = self.stack.borrow_mut();
        let index = stack.index;
        let path = resolve_path(&stack.entries[index].path, target);
        let entry = HistoryEntry::new(path, options.state.unwrap_or(LocationState::Null));

        if options.replace {
            stack.entries[index] = entry;
        } else {
            stack.entries.truncate(index + 1);
            stack.entries.push(entry);
            stack.index = index + 1;
        }
    }

    fn go(&self, delta: i32) {
        let mut stack = self.stack.borrow_mut();
        let target = stack.index as i64 + i64::from(delta);

        if delta == 0 || target < 0 || target >= stack.entries.len() as i64 {
            debug!(
                "ignoring history delta {} at index {} of {}",
                delta,
                stack.index,
                stack.entries.len()
            );
            return;
        }

        stack.index = target as usize;
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Resolve `target` against `current`.
///
/// Absolute targets are normalized, relative ones are joined onto the current
/// path with `.` and `..` segments applied. The empty target is the current
/// path.
pub fn resolve_path(current: &str, target: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    if !target.starts_with('/') {
        segments.extend(current.split('/').filter(|s| !s.is_empty()));
    }

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    format!("/{}", segments.join("/"))
}

fn current_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

// =============================================================================
// Tests
// =============================================================================
