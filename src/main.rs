//! tavily-doctor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tavily_doctor::cli::Cli;
use tavily_doctor::config::DoctorSettings;
use tavily_doctor::runner::Diagnostic;
use tavily_doctor::shell::is_ci;
use tavily_doctor::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries the diagnostic report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tavily_doctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tavily_doctor=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("tavily-doctor starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), cli.output_mode());

    let outcome = Diagnostic::new(DoctorSettings::default()).run(ui.as_mut());
    ExitCode::from(outcome.exit_code())
}
