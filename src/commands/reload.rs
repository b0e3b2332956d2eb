use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::CommandResponse;

/// Reload: in-memory screens are lost, the history survives and the root
/// remounts on the current entry
#[derive(Default)]
pub struct ReloadCommand {}

impl Execute for ReloadCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        ctx.with_tab(|tab| {
            tab.host.mount_root(&tab.history);
            None
        })
    }
}
