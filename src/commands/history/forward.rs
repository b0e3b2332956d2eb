use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::router::Router;
use crate::types::CommandResponse;

#[derive(Default)]
pub struct HistoryForwardCommand {}

impl Execute for HistoryForwardCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        let mut tab = ctx.load()?;
        if tab.history.index() + 1 >= tab.history.entry_count() {
            return Ok(CommandResponse::failed("no later history entry"));
        }

        tab.history.go(1);
        tab.sync();
        ctx.finish(tab, None)
    }
}
