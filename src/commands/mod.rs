//! Command implementations for the backnav CLI
//!
//! Each command module handles:
//! - Loading the session's tab
//! - Driving the router and screen host
//! - Saving the tab and reporting where it ended up

pub mod back;
pub mod history;
pub mod navigate;
pub mod open;
pub mod reload;
pub mod status;
pub mod up;
pub mod utils;

pub use back::BackCommand;
pub use history::back::HistoryBackCommand;
pub use history::forward::HistoryForwardCommand;
pub use navigate::NavigateCommand;
pub use open::OpenCommand;
pub use reload::ReloadCommand;
pub use status::StatusCommand;
pub use up::UpCommand;

use crate::app::ScreenHost;
use crate::error::Result;
use crate::history::MemoryHistory;
use crate::resolver::BackResolution;
use crate::session::{SessionFile, SessionId, SessionStore};
use crate::types::{CommandResponse, TabReport};

pub trait Execute {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse>;
}

pub struct CommandContext {
    pub store: SessionStore,
    pub session_id: SessionId,
    pub screens: Vec<String>,
}

impl CommandContext {
    pub fn new(store: SessionStore, session_id: SessionId, screens: Vec<String>) -> Self {
        Self {
            store,
            session_id,
            screens,
        }
    }

    /// A fresh tab on `path`, not yet mounted
    pub fn new_tab(&self, path: &str) -> Tab {
        Tab {
            history: MemoryHistory::new(path),
            host: ScreenHost::new(self.screens.clone()),
        }
    }

    /// Load the session's tab
    pub fn load(&self) -> Result<Tab> {
        let file = self.store.load(&self.session_id)?;
        Ok(Tab {
            history: MemoryHistory::from_stack(file.history),
            host: ScreenHost::with_mounted(self.screens.clone(), file.screens),
        })
    }

    /// Save the tab and report its state
    pub fn finish(&self, tab: Tab, applied: Option<BackResolution>) -> Result<CommandResponse> {
        let report = tab.report(applied);
        self.store.save(&self.session_id, &tab.into_file())?;
        Ok(CommandResponse::ok(serde_json::to_value(report)?))
    }

    /// Load the tab, run `action` against it, save and report
    pub fn with_tab<F>(&self, action: F) -> Result<CommandResponse>
    where
        F: FnOnce(&mut Tab) -> Option<BackResolution>,
    {
        let mut tab = self.load()?;
        let applied = action(&mut tab);
        self.finish(tab, applied)
    }
}

// =============================================================================
// Tab
// =============================================================================

/// One simulated browser tab: router plus mounted screens
pub struct Tab {
    pub history: MemoryHistory,
    pub host: ScreenHost,
}

impl Tab {
    pub fn report(&self, applied: Option<BackResolution>) -> TabReport {
        let screen = self.host.active_screen(&self.history);
        let entry = self.history.current_entry();

        TabReport {
            path: entry.path,
            state: entry.state,
            index: self.history.index(),
            entry_count: self.history.entry_count(),
            screens: self.host.mounted().to_vec(),
            back_url_state: screen.create_back_url_state(),
            back_action: screen.resolve_back(),
            applied,
        }
    }

    /// Reconcile mounted screens after the router moved
    pub fn sync(&mut self) {
        self.host.sync(&self.history);
    }

    pub fn into_file(self) -> SessionFile {
        SessionFile {
            history: self.history.snapshot(),
            screens: self.host.into_mounted(),
        }
    }
}
