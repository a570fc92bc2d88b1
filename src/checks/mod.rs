//! The individual diagnostic checks.
//!
//! Each check can be called on its own; [`crate::runner`] runs them in
//! the order of [`Check::ALL`] and stops at the first failure.
//!
//! - [`runtime`] - Node.js and npm are installed
//! - [`server`] - the MCP server package runs
//!
//! The configuration and API checks live in [`crate::config`] and
//! [`crate::api`].

pub mod runtime;
pub mod server;

pub use runtime::{check_runtime, parse_version, RuntimeVersions};
pub use server::probe_server;

/// The four checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// Node.js runtime and npm are installed.
    Runtime,
    /// The MCP settings hold a Tavily API key.
    Configuration,
    /// The Tavily API accepts the key.
    Api,
    /// The Tavily MCP server package runs.
    Server,
}

impl Check {
    /// All checks in run order.
    pub const ALL: [Check; 4] = [Check::Runtime, Check::Configuration, Check::Api, Check::Server];

    /// 1-based position in the run order.
    pub fn number(self) -> usize {
        match self {
            Check::Runtime => 1,
            Check::Configuration => 2,
            Check::Api => 3,
            Check::Server => 4,
        }
    }

    /// Title shown when the check starts.
    pub fn title(self) -> &'static str {
        match self {
            Check::Runtime => "Checking the Node.js environment",
            Check::Configuration => "Checking the MCP configuration",
            Check::Api => "Testing the Tavily API",
            Check::Server => "Testing the Tavily MCP server",
        }
    }

    /// Summary shown after the check's own error when it fails.
    pub fn failure_summary(self) -> &'static str {
        match self {
            Check::Runtime => "Required Node.js environment missing",
            Check::Configuration => "MCP configuration invalid or missing",
            Check::Api => "Tavily API not reachable",
            Check::Server => "Tavily MCP server not working",
        }
    }
}
