//! Tavily MCP server probe.
//!
//! Asks the package runner to fetch the server package and print its help.
//! A zero exit status means the package resolves and starts.

use tracing::debug;

use crate::config::DoctorSettings;
use crate::error::{DoctorError, Result};
use crate::shell::{execute, CommandOptions, ExecError};

/// Run the MCP server package with `--help` under the probe timeout.
pub fn probe_server(settings: &DoctorSettings) -> Result<()> {
    let runner = &settings.package_runner;
    let options = CommandOptions::with_timeout(settings.server_timeout);

    let result = execute(&runner.program, &settings.server_args, &options).map_err(|e| match e {
        ExecError::TimedOut { timeout, .. } => DoctorError::ServerTimeout { timeout },
        other => DoctorError::ServerProbeFailed {
            message: other.to_string(),
        },
    })?;

    if result.success {
        debug!(elapsed_ms = result.duration.as_millis(), "MCP server probe passed");
        return Ok(());
    }

    Err(DoctorError::ServerFailed {
        code: result.exit_code,
        stderr: result.stderr.trim_end().to_string(),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::Tool;
    use std::time::{Duration, Instant};

    /// Settings that run `sh -c <script>` in place of the package runner.
    fn settings_running(script: &str, timeout: Duration) -> DoctorSettings {
        DoctorSettings {
            package_runner: Tool::new("sh", "sh"),
            server_args: vec!["-c".to_string(), script.to_string()],
            server_timeout: timeout,
            ..DoctorSettings::default()
        }
    }

    #[test]
    fn zero_exit_is_success() {
        let settings = settings_running("echo usage: server-tavily", Duration::from_secs(10));
        assert!(probe_server(&settings).is_ok());
    }

    #[test]
    fn non_zero_exit_surfaces_stderr() {
        let settings = settings_running(
            "echo 'module not found' >&2; exit 1",
            Duration::from_secs(10),
        );

        let err = probe_server(&settings).unwrap_err();

        assert!(matches!(err, DoctorError::ServerFailed { code: Some(1), .. }));
        assert!(err.to_string().contains("module not found"));
    }

    #[test]
    fn hang_past_timeout_is_timeout() {
        let settings = settings_running("sleep 31", Duration::from_millis(300));
        let started = Instant::now();

        let err = probe_server(&settings).unwrap_err();

        assert!(matches!(err, DoctorError::ServerTimeout { .. }));
        assert!(err.to_string().contains("Timed out"));
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn exit_with_output_still_held_open_is_timeout() {
        let settings = settings_running("sleep 6 & exit 0", Duration::from_millis(500));
        let started = Instant::now();

        let err = probe_server(&settings).unwrap_err();

        assert!(matches!(err, DoctorError::ServerTimeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn missing_runner_is_probe_failure() {
        let settings = DoctorSettings {
            package_runner: Tool::new("definitely-not-npx-xyz", "npx"),
            ..DoctorSettings::default()
        };

        let err = probe_server(&settings).unwrap_err();

        assert!(matches!(err, DoctorError::ServerProbeFailed { .. }));
        assert!(err.to_string().contains("Error while testing the MCP server"));
    }
}
