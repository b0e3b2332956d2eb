//! Output formatting for the backnav CLI
//!
//! Handles formatting command responses for terminal display.
//! Supports human-readable, JSON and quiet output.

use crate::error::Result;
use crate::resolver::BackResolution;
use crate::types::{CommandResponse, TabReport};

// =============================================================================
// Output Format
// =============================================================================

/// Supported output formats
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

// =============================================================================
// Output Formatter
// =============================================================================

/// Formats command responses for display
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter with the given format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format and print a command response
    pub fn print_response(&self, response: &CommandResponse) -> Result<()> {
        if response.success {
            let output = self.format_success(response)?;
            if !output.is_empty() {
                println!("{}", output);
            }
        } else {
            let output = self.format_error(response)?;
            eprintln!("{}", output);
        }
        Ok(())
    }

    /// Format a success response
    fn format_success(&self, response: &CommandResponse) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Human => match &response.data {
                Some(data) => match serde_json::from_value::<TabReport>(data.clone()) {
                    Ok(report) => format_report(&report),
                    Err(_) => serde_json::to_string_pretty(data)?,
                },
                None => "Success".to_string(),
            },
            OutputFormat::Json => serde_json::to_string(response)?,
            OutputFormat::Quiet => String::new(),
        })
    }

    /// Format an error response
    fn format_error(&self, response: &CommandResponse) -> Result<String> {
        let error_msg = response.error.as_deref().unwrap_or("Unknown error");
        Ok(match self.format {
            OutputFormat::Human => format!("Error: {}", error_msg),
            OutputFormat::Json => serde_json::to_string(response)?,
            OutputFormat::Quiet => error_msg.to_string(),
        })
    }
}

// =============================================================================
// Specialized Formatters
// =============================================================================

/// Describe a back resolution in words
pub fn describe_resolution(resolution: &BackResolution) -> String {
    match resolution {
        BackResolution::ExplicitReturn(path) => format!("return to {}", path),
        BackResolution::ToRoot => "go to / (landing route)".to_string(),
        BackResolution::HistoryRelative(delta) => format!("history step {}", delta),
    }
}

/// Format a tab report for human-readable output
pub fn format_report(report: &TabReport) -> String {
    let mut output = String::new();

    if let Some(applied) = &report.applied {
        output.push_str(&format!("Back: {}\n\n", describe_resolution(applied)));
    }

    output.push_str(&format!(
        "Location: {}  (entry {} of {})\n",
        report.path,
        report.index + 1,
        report.entry_count
    ));
    output.push_str(&format!("State:    {}\n", report.state));
    output.push_str("Screens:\n");
    for screen in &report.screens {
        output.push_str(&format!(
            "  {:<16} backUrl: {}\n",
            screen.route,
            screen.back_url.as_deref().unwrap_or("undefined")
        ));
    }
    output.push_str(&format!("Link state: {}\n", report.back_url_state));
    output.push_str(&format!(
        "On back:    {}",
        describe_resolution(&report.back_action)
    ));

    output
}

// =============================================================================
// Tests
// =============================================================================
