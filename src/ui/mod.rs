//! Terminal output for the diagnostic report.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes, CI and captured output
//! - [`MockUI`] for asserting on output in tests
//!
//! All report output goes to stdout.
//!
//! # Example
//!
//! ```
//! use tavily_doctor::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("TAVILY MCP DIAGNOSTIC");
//! ui.success("All checks passed");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DoctorTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display an informational message (step titles, discovered files).
    fn info(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Start a spinner for a slow operation (network, subprocess).
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
///
/// Spinners are transient: the outcome of the operation is reported
/// through the [`UserInterface`] once the spinner is cleared.
pub trait SpinnerHandle {
    /// Stop the spinner and remove it from the terminal.
    fn clear(&mut self);
}
