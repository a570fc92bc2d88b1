//! Fixed settings for the diagnostic.
//!
//! Everything the checks need to know about the outside world lives here:
//! where to look for the MCP settings file, which endpoint to call, which
//! executables to run and how long to wait for them. [`DoctorSettings::default`]
//! yields the production values; tests construct their own.

use std::path::PathBuf;
use std::time::Duration;

/// Settings file written by a VS Code instance running in a temp profile.
pub const TMP_SETTINGS_PATH: &str = "/tmp/vscode-user/User/settings.json";

/// Settings file relative to the user's home directory.
pub const HOME_SETTINGS_PATH: &str = ".vscode/User/settings.json";

/// Workspace-level MCP config.
pub const WORKSPACE_MCP_PATH: &str = "/workspaces/SwapBack/mcp.json";

/// Tavily search endpoint used to validate the key.
pub const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";

/// Top-level key holding the map of MCP servers.
pub const SERVERS_KEY: &str = "cline.mcpServers";

/// Name of the server entry to inspect.
pub const SERVER_NAME: &str = "tavily";

/// Key of the per-server environment map.
pub const ENV_KEY: &str = "env";

/// Credential key inside the server's environment map.
pub const API_KEY_NAME: &str = "TAVILY_API_KEY";

/// npm package providing the Tavily MCP server.
pub const SERVER_PACKAGE: &str = "@modelcontextprotocol/server-tavily";

/// An external tool the diagnostic runs, with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// Executable name or path.
    pub program: String,
    /// Name used in messages (e.g., "Node.js").
    pub display: String,
}

impl Tool {
    /// Create a tool description.
    pub fn new(program: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            display: display.into(),
        }
    }
}

/// All constants the four checks depend on.
#[derive(Debug, Clone)]
pub struct DoctorSettings {
    /// Settings files to search, in priority order.
    pub candidate_paths: Vec<PathBuf>,

    /// Search endpoint for the API probe.
    pub api_url: String,

    /// Query sent with the API probe.
    pub test_query: String,

    /// Result limit sent with the API probe.
    pub max_results: u32,

    /// HTTP timeout for the API probe.
    pub api_timeout: Duration,

    /// The JavaScript runtime.
    pub runtime: Tool,

    /// The runtime's package manager.
    pub package_manager: Tool,

    /// The package runner used to start the MCP server.
    pub package_runner: Tool,

    /// Arguments passed to the package runner.
    pub server_args: Vec<String>,

    /// Timeout for the MCP server probe.
    pub server_timeout: Duration,
}

impl Default for DoctorSettings {
    fn default() -> Self {
        Self {
            candidate_paths: default_candidate_paths(),
            api_url: TAVILY_SEARCH_URL.to_string(),
            test_query: "test".to_string(),
            max_results: 1,
            api_timeout: Duration::from_secs(10),
            runtime: Tool::new("node", "Node.js"),
            package_manager: Tool::new("npm", "npm"),
            package_runner: Tool::new("npx", "npx"),
            server_args: vec![
                "-y".to_string(),
                SERVER_PACKAGE.to_string(),
                "--help".to_string(),
            ],
            server_timeout: Duration::from_secs(30),
        }
    }
}

/// The three candidate settings files, in the order they are searched.
///
/// The home-relative entry falls back to a literal `~` when the home
/// directory cannot be determined; such a path never exists, so the
/// locator simply skips it.
pub fn default_candidate_paths() -> Vec<PathBuf> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    vec![
        PathBuf::from(TMP_SETTINGS_PATH),
        home.join(HOME_SETTINGS_PATH),
        PathBuf::from(WORKSPACE_MCP_PATH),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_searches_three_candidates_in_order() {
        let paths = default_candidate_paths();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], PathBuf::from(TMP_SETTINGS_PATH));
        assert!(paths[1].ends_with(".vscode/User/settings.json"));
        assert_eq!(paths[2], PathBuf::from(WORKSPACE_MCP_PATH));
    }

    #[test]
    fn default_timeouts() {
        let settings = DoctorSettings::default();
        assert_eq!(settings.api_timeout, Duration::from_secs(10));
        assert_eq!(settings.server_timeout, Duration::from_secs(30));
    }

    #[test]
    fn default_api_request() {
        let settings = DoctorSettings::default();
        assert_eq!(settings.api_url, "https://api.tavily.com/search");
        assert_eq!(settings.test_query, "test");
        assert_eq!(settings.max_results, 1);
    }

    #[test]
    fn default_tools() {
        let settings = DoctorSettings::default();
        assert_eq!(settings.runtime.program, "node");
        assert_eq!(settings.runtime.display, "Node.js");
        assert_eq!(settings.package_manager.program, "npm");
        assert_eq!(settings.package_runner.program, "npx");
    }

    #[test]
    fn default_server_args_fetch_package_with_help() {
        let settings = DoctorSettings::default();
        assert_eq!(
            settings.server_args,
            vec!["-y", "@modelcontextprotocol/server-tavily", "--help"]
        );
    }
}
