//! backnav
//!
//! Back-navigation memory for single-page routers. A screen can remember
//! where the user came from and return there deterministically, even though
//! the browser history stack cannot be inspected and a reload wipes any
//! in-memory stack. Return addresses travel in router location state.
//!
//! The core is router-agnostic (`Router`, `mark_landing`, `BackNavigation`);
//! `MemoryHistory`, `ScreenHost` and the CLI simulate a browser tab around it.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod landing;
pub mod output;
pub mod resolver;
pub mod router;
pub mod session;
pub mod state;
pub mod types;

// Re-exports for convenience
pub use app::{MountedScreen, ScreenHost};
pub use cli::{Cli, Commands, HistoryCommands};
pub use config::Config;
pub use error::{NavError, Result};
pub use history::MemoryHistory;
pub use landing::mark_landing;
pub use output::OutputFormatter;
pub use resolver::{BackNavigation, BackResolution, parent_path};
pub use router::Router;
pub use session::{SessionResolver, SessionStore};
pub use state::{build_return_state, extract_back_url, extract_landing_flag, is_landing_route};
pub use types::{CommandResponse, Location, LocationState, NavigateOptions, NavigationTarget};

use commands::Execute;

// =============================================================================
// Main Entry Point
// =============================================================================

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // 1. Load configuration
    let config = config::load_config();

    // 2. Resolve session
    let session_id = SessionResolver::new(config.clone()).resolve(cli.session.as_deref())?;

    // 3. Create command context
    let store = SessionStore::new(config.state_dir.clone());
    let ctx = commands::CommandContext::new(store, session_id, config.screens.clone());

    // 4. Match on command and execute
    let response = match cli.command {
        Commands::Open(args) => commands::OpenCommand::new(args.path).execute(&ctx)?,
        Commands::Navigate(args) => {
            commands::NavigateCommand::new(args.path, args.with_back, args.replace)
                .execute(&ctx)?
        }
        Commands::Back => commands::BackCommand::default().execute(&ctx)?,
        Commands::Up => commands::UpCommand::default().execute(&ctx)?,
        Commands::Reload => commands::ReloadCommand::default().execute(&ctx)?,
        Commands::History(HistoryCommands::Back) => {
            commands::HistoryBackCommand::default().execute(&ctx)?
        }
        Commands::History(HistoryCommands::Forward) => {
            commands::HistoryForwardCommand::default().execute(&ctx)?
        }
        Commands::Status => commands::StatusCommand::default().execute(&ctx)?,
    };

    // 5. Format and print output
    let output_format = match cli.output {
        cli::OutputFormat::Human => output::OutputFormat::Human,
        cli::OutputFormat::Json => output::OutputFormat::Json,
        cli::OutputFormat::Quiet => output::OutputFormat::Quiet,
    };
    let formatter = OutputFormatter::new(output_format);
    print_and_check(&response, &formatter)
}

/// Print a response and turn a failed one into an error
pub fn print_and_check(response: &CommandResponse, formatter: &OutputFormatter) -> Result<()> {
    formatter.print_response(response)?;

    if response.success {
        Ok(())
    } else {
        Err(NavError::CommandFailed(
            response
                .error
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string()),
        ))
    }
}
