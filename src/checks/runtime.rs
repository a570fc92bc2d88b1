//! Node.js runtime check.
//!
//! Confirms the runtime and its package manager are installed by asking
//! each for its version.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::{DoctorSettings, Tool};
use crate::error::{DoctorError, Result};
use crate::shell::{execute, CommandOptions};
use crate::ui::UserInterface;

static VERSION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").unwrap());

/// Versions reported by the runtime and its package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeVersions {
    /// Trimmed output of `<runtime> --version`.
    pub runtime: String,
    /// Trimmed output of `<package manager> --version`.
    pub package_manager: String,
}

/// Check the runtime, then its package manager, reporting each version.
///
/// Stops at the first tool that is missing or fails.
pub fn check_runtime(
    settings: &DoctorSettings,
    ui: &mut dyn UserInterface,
) -> Result<RuntimeVersions> {
    let runtime = tool_version(&settings.runtime, settings)?;
    ui.success(&format!("{}: {}", settings.runtime.display, runtime));

    let package_manager = tool_version(&settings.package_manager, settings)?;
    ui.success(&format!(
        "{}: {}",
        settings.package_manager.display, package_manager
    ));

    Ok(RuntimeVersions {
        runtime,
        package_manager,
    })
}

/// Run `<tool> --version` and return its trimmed output.
pub fn tool_version(tool: &Tool, settings: &DoctorSettings) -> Result<String> {
    let args = ["--version".to_string()];
    // Any failure to run the tool at all counts as "not on PATH".
    let result = execute(&tool.program, &args, &CommandOptions::default()).map_err(|e| {
        debug!(program = %tool.program, error = %e, "Version check could not run");
        DoctorError::RuntimeNotFound {
            display: settings.runtime.display.clone(),
        }
    })?;

    if !result.success {
        debug!(
            program = %tool.program,
            code = ?result.exit_code,
            stderr = %result.stderr.trim(),
            "Version check failed"
        );
        return Err(DoctorError::RuntimeUnavailable {
            runtime: settings.runtime.display.clone(),
            package_manager: settings.package_manager.display.clone(),
        });
    }

    let version = result.stdout.trim().to_string();
    debug!(
        program = %tool.program,
        version = ?parse_version(&version),
        "Version check passed"
    );
    Ok(version)
}

/// Extract the first `MAJOR.MINOR.PATCH` number from version output.
///
/// # Example
///
/// ```
/// use tavily_doctor::checks::runtime::parse_version;
///
/// assert_eq!(parse_version("v20.11.0"), Some((20, 11, 0)));
/// assert_eq!(parse_version("unknown"), None);
/// ```
pub fn parse_version(output: &str) -> Option<(u32, u32, u32)> {
    let caps = VERSION_NUMBER.captures(output)?;
    let part = |i: usize| caps.get(i)?.as_str().parse().ok();
    Some((part(1)?, part(2)?, part(3)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_version_node_style() {
        assert_eq!(parse_version("v18.19.1\n"), Some((18, 19, 1)));
    }

    #[test]
    fn parse_version_npm_style() {
        assert_eq!(parse_version("10.2.4"), Some((10, 2, 4)));
    }

    #[test]
    fn parse_version_takes_first_match() {
        assert_eq!(parse_version("node 1.2.3 (built with 4.5.6)"), Some((1, 2, 3)));
    }

    #[test]
    fn parse_version_none_without_number() {
        assert_eq!(parse_version(""), None);
        assert_eq!(parse_version("v20"), None);
    }

    #[cfg(unix)]
    mod fake_tools {
        use super::super::*;
        use crate::ui::MockUI;
        use std::os::unix::fs::PermissionsExt;
        use std::path::Path;
        use tempfile::TempDir;

        fn script(dir: &Path, name: &str, body: &str) -> String {
            let path = dir.join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().into_owned()
        }

        fn settings(runtime: String, package_manager: String) -> DoctorSettings {
            DoctorSettings {
                runtime: Tool::new(runtime, "Node.js"),
                package_manager: Tool::new(package_manager, "npm"),
                ..DoctorSettings::default()
            }
        }

        #[test]
        fn both_tools_present_reports_versions() {
            let temp = TempDir::new().unwrap();
            let node = script(temp.path(), "node", "echo v20.11.0");
            let npm = script(temp.path(), "npm", "echo 10.2.4");
            let mut ui = MockUI::new();

            let versions = check_runtime(&settings(node, npm), &mut ui).unwrap();

            assert_eq!(versions.runtime, "v20.11.0");
            assert_eq!(versions.package_manager, "10.2.4");
            assert!(ui.has_success("Node.js: v20.11.0"));
            assert!(ui.has_success("npm: 10.2.4"));
        }

        #[test]
        fn missing_runtime_is_not_found() {
            let temp = TempDir::new().unwrap();
            let npm = script(temp.path(), "npm", "echo 10.2.4");
            let node = temp.path().join("node").to_string_lossy().into_owned();
            let mut ui = MockUI::new();

            let err = check_runtime(&settings(node, npm), &mut ui).unwrap_err();

            assert_eq!(err.to_string(), "Node.js not found in PATH");
            assert!(ui.successes().is_empty());
        }

        #[test]
        fn failing_package_manager_is_not_installed() {
            let temp = TempDir::new().unwrap();
            let node = script(temp.path(), "node", "echo v20.11.0");
            let npm = script(temp.path(), "npm", "echo broken >&2; exit 1");
            let mut ui = MockUI::new();

            let err = check_runtime(&settings(node, npm), &mut ui).unwrap_err();

            assert_eq!(err.to_string(), "Node.js or npm is not installed");
            assert!(ui.has_success("Node.js: v20.11.0"));
            assert!(!ui.has_success("npm"));
        }
    }
}
