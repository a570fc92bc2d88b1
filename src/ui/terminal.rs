//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, DoctorTheme, NonInteractiveUI, OutputMode, ProgressSpinner, SpinnerHandle,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: DoctorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_info(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}

/// Create the appropriate UI based on environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_terminal_ui_hides_spinners() {
        let mut ui = TerminalUI::new(OutputMode::Quiet);
        let mut spinner = ui.start_spinner("POST https://api.tavily.com/search");
        spinner.clear();
    }

    #[test]
    fn create_ui_non_interactive_writes_without_panicking() {
        let mut ui = create_ui(false, OutputMode::Quiet);
        ui.show_header("ADVANCED TAVILY MCP DIAGNOSTIC");
        ui.error("Node.js not found in PATH");
    }
}
