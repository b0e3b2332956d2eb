use log::info;

use crate::commands::utils::validate_path;
use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::CommandResponse;

/// Start a fresh tab, replacing any saved one for the session
pub struct OpenCommand {
    pub path: String,
}

impl OpenCommand {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl Execute for OpenCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        validate_path(&self.path)?;

        if ctx.store.exists(&ctx.session_id) {
            info!("discarding previous tab for session {}", ctx.session_id);
        }

        let mut tab = ctx.new_tab(&self.path);
        tab.host.mount_root(&tab.history);
        ctx.finish(tab, None)
    }
}
