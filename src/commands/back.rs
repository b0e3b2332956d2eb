use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::CommandResponse;

/// The app's back button, handled by the innermost mounted screen
#[derive(Default)]
pub struct BackCommand {}

impl Execute for BackCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        ctx.with_tab(|tab| {
            let resolution = tab.host.active_screen(&tab.history).on_back();
            tab.sync();
            Some(resolution)
        })
    }
}
