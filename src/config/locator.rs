//! MCP settings discovery.
//!
//! Searches a fixed list of candidate settings files for the Tavily API
//! key. The first file that yields a complete key wins; any problem with a
//! file (unreadable, bad JSON, missing key at any level) is reported and
//! the search moves on to the next candidate.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::credential::ApiKey;
use crate::config::settings::{
    default_candidate_paths, API_KEY_NAME, ENV_KEY, SERVERS_KEY, SERVER_NAME,
};
use crate::ui::UserInterface;

/// Why a candidate settings file did not yield an API key.
#[derive(Debug, Error)]
pub enum ConfigIssue {
    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("JSON syntax error in: {}", path.display())]
    Syntax { path: PathBuf, message: String },

    /// No MCP server map at the top level.
    #[error("cline.mcpServers configuration missing")]
    ServersMissing,

    /// The server map has no Tavily entry.
    #[error("Tavily configuration missing")]
    ServerMissing,

    /// The Tavily entry has no usable key in its environment.
    #[error("Tavily API key missing from configuration")]
    KeyMissing,
}

impl ConfigIssue {
    /// Whether the MCP server map itself was found before the problem.
    pub fn servers_detected(&self) -> bool {
        matches!(self, ConfigIssue::ServerMissing | ConfigIssue::KeyMissing)
    }
}

/// Searches candidate settings files for the Tavily API key.
///
/// # Example
///
/// ```
/// use tavily_doctor::config::ConfigLocator;
/// use tavily_doctor::ui::MockUI;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// let path = temp.path().join("mcp.json");
/// std::fs::write(
///     &path,
///     r#"{"cline.mcpServers": {"tavily": {"env": {"TAVILY_API_KEY": "tvly-abc"}}}}"#,
/// )
/// .unwrap();
///
/// let mut ui = MockUI::new();
/// let key = ConfigLocator::new(vec![path]).locate(&mut ui).unwrap();
/// assert_eq!(key.expose(), "tvly-abc");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    candidates: Vec<PathBuf>,
}

impl ConfigLocator {
    /// Create a locator over the given candidates, searched in order.
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// The candidate paths, in search order.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Return the key from the first candidate that holds a complete one.
    ///
    /// Missing files are skipped silently. Every other problem is reported
    /// through `ui` and the search continues. Returns `None` if no
    /// candidate matched.
    pub fn locate(&self, ui: &mut dyn UserInterface) -> Option<ApiKey> {
        for path in &self.candidates {
            if !path.exists() {
                debug!(path = %path.display(), "Candidate settings file does not exist");
                continue;
            }

            ui.info(&format!("Configuration found: {}", path.display()));

            match read_api_key(path) {
                Ok(key) => {
                    ui.success("MCP configuration detected");
                    ui.success(&format!("Tavily API key found: {}", key.preview()));
                    return Some(key);
                }
                Err(issue) => {
                    debug!(path = %path.display(), error = ?issue, "Candidate rejected");
                    if issue.servers_detected() {
                        ui.success("MCP configuration detected");
                    }
                    ui.error(&issue.to_string());
                }
            }
        }

        None
    }
}

impl Default for ConfigLocator {
    fn default() -> Self {
        Self::new(default_candidate_paths())
    }
}

/// Read a single settings file and extract the Tavily API key.
pub fn read_api_key(path: &Path) -> Result<ApiKey, ConfigIssue> {
    let content = fs::read_to_string(path).map_err(|source| ConfigIssue::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value = serde_json::from_str(&content).map_err(|e| ConfigIssue::Syntax {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    extract_api_key(&document)
}

/// Walk `cline.mcpServers` → `tavily` → `env` → `TAVILY_API_KEY`.
///
/// Levels that exist but have the wrong JSON type count as missing.
pub fn extract_api_key(document: &Value) -> Result<ApiKey, ConfigIssue> {
    let servers = document
        .get(SERVERS_KEY)
        .filter(|v| v.is_object())
        .ok_or(ConfigIssue::ServersMissing)?;

    let server = servers
        .get(SERVER_NAME)
        .ok_or(ConfigIssue::ServerMissing)?;

    server
        .get(ENV_KEY)
        .and_then(|env| env.get(API_KEY_NAME))
        .and_then(Value::as_str)
        .map(ApiKey::new)
        .ok_or(ConfigIssue::KeyMissing)
}
