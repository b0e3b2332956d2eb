//! CLI argument parsing using clap
//!
//! Each command is one user action against a simulated browser tab.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// backnav - back-navigation simulator for single-page routers
#[derive(Debug, Parser)]
#[command(name = "backnav")]
#[command(
    version,
    about = "Back-navigation simulator for single-page routers",
    long_about = None,
    after_help = "QUICK START:\n  backnav open /\n  backnav navigate --with-back /modal\n  backnav navigate /modal/page1\n  backnav status\n  backnav back\n\nA reload on a deep page lands there with no return address:\n  backnav open /modal/page2\n  backnav back            # goes to /\n\nENVIRONMENT VARIABLES:\n  BACKNAV_SESSION    Default session name\n  BACKNAV_STATE_DIR  Directory for session files\n  BACKNAV_SCREENS    Comma-separated screen routes (default: /modal)\n  BACKNAV_LOG        Log filter (default: warn)"
)]
pub struct Cli {
    /// Session name to use (overrides BACKNAV_SESSION env var)
    #[arg(short, long, global = true)]
    pub session: Option<String>,

    /// Output format: human (plain text), json (JSON), quiet (errors only)
    #[arg(short, long, global = true, value_enum, default_value = "human")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a fresh tab on a path (first load)
    #[command(
        long_about = "Start a fresh tab on a path, as if the URL was typed in.\n\nThe root mounts, stamps the entry as the landing route and every matching screen mounts.\n\nEXAMPLES:\n  backnav open /\n  backnav open /modal/page2"
    )]
    Open(PathArgs),

    /// Navigate to a path
    #[command(
        long_about = "Navigate to a path from the current screen.\n\nEXAMPLES:\n  backnav navigate /modal/page1\n  backnav navigate --with-back /modal\n  backnav navigate --replace /settings"
    )]
    Navigate(NavigateArgs),

    /// Trigger the app's back action
    #[command(
        long_about = "Trigger the innermost screen's back action: its return address, the root for a landing route, or one step back in history."
    )]
    Back,

    /// Navigate to the parent path
    Up,

    /// Reload the page on the current entry
    Reload,

    /// Browser history buttons
    #[command(subcommand)]
    History(HistoryCommands),

    /// Show the current location and what back would do
    Status,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommands {
    /// Browser back button
    Back,

    /// Browser forward button
    Forward,
}

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Absolute path, e.g. /modal/page1
    pub path: String,
}

#[derive(Debug, Args)]
pub struct NavigateArgs {
    /// Absolute path, e.g. /modal/page1
    pub path: String,

    /// Attach the current path as the destination's return address
    #[arg(short = 'b', long, conflicts_with = "replace")]
    pub with_back: bool,

    /// Replace the current entry instead of pushing a new one
    #[arg(short, long)]
    pub replace: bool,
}

// =============================================================================
// Parse Function
// =============================================================================

/// Parse command line arguments
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parse command line arguments from iterator (for testing)
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
