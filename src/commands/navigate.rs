use crate::commands::utils::validate_path;
use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::router::Router;
use crate::types::{CommandResponse, NavigateOptions};

pub struct NavigateCommand {
    pub path: String,
    pub with_back: bool,
    pub replace: bool,
}

impl NavigateCommand {
    pub fn new(path: String, with_back: bool, replace: bool) -> Self {
        Self {
            path,
            with_back,
            replace,
        }
    }
}

impl Execute for NavigateCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        validate_path(&self.path)?;

        ctx.with_tab(|tab| {
            if self.with_back {
                tab.host
                    .active_screen(&tab.history)
                    .navigate_with_back_url(&self.path);
            } else {
                let options = NavigateOptions {
                    state: None,
                    replace: self.replace,
                };
                tab.history.navigate(&self.path, options);
            }
            tab.sync();
            None
        })
    }
}
