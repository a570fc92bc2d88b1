//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use tavily_doctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.info("Checking the MCP configuration");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.has_info("MCP configuration"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::{SpinnerHandle, UserInterface};

/// Kind of a captured line, in the order lines were shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Message,
    Info,
    Success,
    Warning,
    Error,
    Header,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    infos: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    transcript: Vec<(LineKind, String)>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured info messages.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Every line shown, in order, tagged with its kind.
    pub fn transcript(&self) -> &[(LineKind, String)] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific info message was shown.
    pub fn has_info(&self, msg: &str) -> bool {
        self.infos.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.infos.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.spinners.clear();
        self.transcript.clear();
    }

    fn record(&mut self, kind: LineKind, msg: &str) {
        self.transcript.push((kind, msg.to_string()));
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.record(LineKind::Message, msg);
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
        self.record(LineKind::Info, msg);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.record(LineKind::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.record(LineKind::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.record(LineKind::Error, msg);
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.record(LineKind::Header, title);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }
}

/// Mock spinner that records whether it was cleared.
#[derive(Debug, Default)]
pub struct MockSpinner {
    cleared: bool,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the spinner was cleared.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}

impl SpinnerHandle for MockSpinner {
    fn clear(&mut self) {
        self.cleared = true;
    }
}
