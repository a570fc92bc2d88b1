//! MCP settings discovery and the diagnostic's own settings.
//!
//! - Fixed paths, endpoint, commands and timeouts in [`settings`]
//! - Candidate file search in [`locator`]
//! - The API key type in [`credential`]
//!
//! # Settings File Locations
//!
//! The Tavily API key is searched for in this order:
//! 1. `/tmp/vscode-user/User/settings.json`
//! 2. `~/.vscode/User/settings.json`
//! 3. `/workspaces/SwapBack/mcp.json`

pub mod credential;
pub mod locator;
pub mod settings;

pub use credential::ApiKey;
pub use locator::{extract_api_key, read_api_key, ConfigIssue, ConfigLocator};
pub use settings::{default_candidate_paths, DoctorSettings, Tool};
