use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::router::Router;
use crate::types::CommandResponse;

#[derive(Default)]
pub struct HistoryBackCommand {}

impl Execute for HistoryBackCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        let mut tab = ctx.load()?;
        if tab.history.index() == 0 {
            return Ok(CommandResponse::failed("no earlier history entry"));
        }

        tab.history.go(-1);
        tab.sync();
        ctx.finish(tab, None)
    }
}
