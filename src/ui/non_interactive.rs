//! Non-interactive UI for pipes, CI and headless environments.

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes plain lines to stdout with the same icons as the terminal UI,
/// without colors or spinners.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("ℹ {}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        println!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        println!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("🔍 {}", title);
            println!("{}", "=".repeat(title.chars().count() + 3));
        }
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_mode_keeps_errors() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        ui.info("1. Checking the Node.js environment");
        ui.warning("Tavily API responded with status: 500");
        ui.error("Tavily API not reachable");
    }

    #[test]
    fn noop_spinner_methods() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let mut spinner = ui.start_spinner("test");
        spinner.clear();
    }
}
