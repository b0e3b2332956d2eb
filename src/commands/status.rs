use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::CommandResponse;

#[derive(Default)]
pub struct StatusCommand {}

impl Execute for StatusCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        let tab = ctx.load()?;
        Ok(CommandResponse::ok(serde_json::to_value(tab.report(None))?))
    }
}
