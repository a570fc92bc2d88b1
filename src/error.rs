//! Error types for diagnostic checks.
//!
//! This module defines [`DoctorError`], the error type returned by every
//! check, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each failure kind the diagnostic can report has its own variant
//! - The `Display` text of a variant is the message shown to the user
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::time::Duration;
use thiserror::Error;

/// Core error type for diagnostic checks.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// The runtime or its package manager is not on PATH.
    #[error("{display} not found in PATH")]
    RuntimeNotFound { display: String },

    /// The runtime or its package manager ran but did not report a version.
    #[error("{runtime} or {package_manager} is not installed")]
    RuntimeUnavailable {
        runtime: String,
        package_manager: String,
    },

    /// The search API rejected the credential.
    #[error("Invalid Tavily API key (HTTP 401)")]
    CredentialRejected,

    /// The search API answered with a status other than 200 or 401.
    #[error("Tavily API responded with status: {status}")]
    UnexpectedResponse { status: u16 },

    /// The search API could not be reached at all.
    #[error("Failed to connect to the Tavily API: {message}")]
    ApiUnreachable { message: String },

    /// The MCP server probe exited with a non-zero status.
    #[error("MCP server error: {stderr}")]
    ServerFailed { code: Option<i32>, stderr: String },

    /// The MCP server probe did not finish in time.
    #[error("Timed out while testing the MCP server (after {}s)", timeout.as_secs())]
    ServerTimeout { timeout: Duration },

    /// The MCP server probe could not be run.
    #[error("Error while testing the MCP server: {message}")]
    ServerProbeFailed { message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DoctorError {
    /// Whether this failure is reported as a warning rather than an error.
    ///
    /// An unexpected status from the API is still a failed check, but the
    /// key itself was not rejected.
    pub fn is_warning(&self) -> bool {
        matches!(self, DoctorError::UnexpectedResponse { .. })
    }
}

/// Result type alias for diagnostic operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
