use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::CommandResponse;

#[derive(Default)]
pub struct UpCommand {}

impl Execute for UpCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        ctx.with_tab(|tab| {
            tab.host.active_screen(&tab.history).navigate_up_one_path();
            tab.sync();
            None
        })
    }
}
