//! Diagnostic orchestration.
//!
//! [`Diagnostic::run`] executes the checks in fixed order and stops at the
//! first one that fails. Every outcome is reported through the
//! [`UserInterface`]; the returned [`RunOutcome`] only records which check
//! failed, for the process exit code.

use tracing::{debug, info};

use crate::api::TavilyClient;
use crate::checks::{check_runtime, probe_server, Check};
use crate::config::{ApiKey, ConfigLocator, DoctorSettings};
use crate::error::{DoctorError, Result};
use crate::ui::UserInterface;

/// Header printed before the first check.
pub const REPORT_TITLE: &str = "ADVANCED TAVILY MCP DIAGNOSTIC";

/// Banner printed when every check passed.
pub const SUCCESS_BANNER: &str = "DIAGNOSTIC PASSED!";

/// What to do once the integration is known to work.
const NEXT_STEPS: [&str; 3] = [
    "1. Save mcp.json",
    "2. Reload VS Code",
    "3. Try: 'Search Tavily: test'",
];

/// Result of a full diagnostic run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All checks passed.
    Passed,
    /// The given check failed; later checks did not run.
    Failed(Check),
}

impl RunOutcome {
    /// Whether every check passed.
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Passed)
    }

    /// Process exit code: 0 on success, 1 on any failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Passed => 0,
            RunOutcome::Failed(_) => 1,
        }
    }

    /// The check that failed, if any.
    pub fn failed_check(&self) -> Option<Check> {
        match self {
            RunOutcome::Passed => None,
            RunOutcome::Failed(check) => Some(*check),
        }
    }
}

/// Runs the four checks against one set of settings.
///
/// # Example
///
/// ```no_run
/// use tavily_doctor::config::DoctorSettings;
/// use tavily_doctor::runner::Diagnostic;
/// use tavily_doctor::ui::{create_ui, OutputMode};
///
/// let mut ui = create_ui(true, OutputMode::Normal);
/// let outcome = Diagnostic::new(DoctorSettings::default()).run(ui.as_mut());
/// std::process::exit(outcome.exit_code() as i32);
/// ```
pub struct Diagnostic {
    settings: DoctorSettings,
}

impl Diagnostic {
    /// Create a diagnostic for the given settings.
    pub fn new(settings: DoctorSettings) -> Self {
        Self { settings }
    }

    /// Run all checks in order, stopping at the first failure.
    pub fn run(&self, ui: &mut dyn UserInterface) -> RunOutcome {
        ui.show_header(REPORT_TITLE);

        start(ui, Check::Runtime);
        if let Err(e) = check_runtime(&self.settings, ui) {
            return fail(ui, Check::Runtime, Some(&e));
        }

        start(ui, Check::Configuration);
        let key = match self.locate_key(ui) {
            Some(key) => key,
            None => return fail(ui, Check::Configuration, None),
        };

        start(ui, Check::Api);
        if let Err(e) = self.check_api(&key, ui) {
            return fail(ui, Check::Api, Some(&e));
        }
        ui.success("Tavily API is working (HTTP 200)");

        start(ui, Check::Server);
        if let Err(e) = self.check_server(ui) {
            return fail(ui, Check::Server, Some(&e));
        }
        ui.success("Tavily MCP server is reachable");

        ui.message("");
        ui.success(SUCCESS_BANNER);
        ui.message("Tavily MCP should work correctly.");
        ui.message("");
        ui.message("Final steps:");
        for step in NEXT_STEPS {
            ui.message(step);
        }

        info!("All diagnostic checks passed");
        RunOutcome::Passed
    }

    /// Search the candidate files for a non-empty key.
    fn locate_key(&self, ui: &mut dyn UserInterface) -> Option<ApiKey> {
        let locator = ConfigLocator::new(self.settings.candidate_paths.clone());
        locator.locate(ui).filter(|key| !key.is_empty())
    }

    fn check_api(&self, key: &ApiKey, ui: &mut dyn UserInterface) -> Result<()> {
        let client = TavilyClient::from_settings(&self.settings)?;
        let mut spinner = ui.start_spinner(&format!("POST {}", client.url()));
        let result = client.probe(key, &self.settings.test_query, self.settings.max_results);
        spinner.clear();
        result
    }

    fn check_server(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let mut spinner = ui.start_spinner(&format!(
            "{} {}",
            self.settings.package_runner.program,
            self.settings.server_args.join(" ")
        ));
        let result = probe_server(&self.settings);
        spinner.clear();
        result
    }
}

fn start(ui: &mut dyn UserInterface, check: Check) {
    debug!(check = ?check, "Starting check");
    ui.info(&format!("{}. {}", check.number(), check.title()));
}

fn fail(ui: &mut dyn UserInterface, check: Check, error: Option<&DoctorError>) -> RunOutcome {
    if let Some(e) = error {
        if e.is_warning() {
            ui.warning(&e.to_string());
        } else {
            ui.error(&e.to_string());
        }
    }
    ui.error(check.failure_summary());
    info!(check = ?check, "Diagnostic stopped at failed check");
    RunOutcome::Failed(check)
}
