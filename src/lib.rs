//! tavily-doctor - Diagnose a local Tavily MCP integration.
//!
//! Runs four checks in order and stops at the first failure:
//!
//! 1. Node.js and npm are installed
//! 2. A VS Code / MCP settings file holds the Tavily API key
//! 3. The Tavily search API accepts the key
//! 4. The Tavily MCP server package can be run with `npx`
//!
//! # Modules
//!
//! - [`api`] - Tavily search API probe
//! - [`checks`] - Runtime and MCP server checks, and the check order
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings discovery, API key handling and fixed settings
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Runs the checks with fail-fast semantics
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use tavily_doctor::config::extract_api_key;
//!
//! let settings: serde_json::Value = serde_json::from_str(
//!     r#"{"cline.mcpServers": {"tavily": {"env": {"TAVILY_API_KEY": "tvly-123456789"}}}}"#,
//! )
//! .unwrap();
//! let key = extract_api_key(&settings).unwrap();
//! assert_eq!(key.preview(), "tvly-123...");
//! ```

pub mod api;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{DoctorError, Result};
