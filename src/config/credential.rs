//! The Tavily API key.

use std::fmt;

/// Number of leading characters shown when confirming a key.
const PREVIEW_CHARS: usize = 8;

/// An API key read from the MCP settings.
///
/// The full value is only available through [`ApiKey::expose`]. `Debug`
/// is redacted so the key cannot end up in logs by accident.
///
/// # Example
///
/// ```
/// use tavily_doctor::config::ApiKey;
///
/// let key = ApiKey::new("tvly-abcdef123456");
/// assert_eq!(key.preview(), "tvly-abc...");
/// assert!(!format!("{:?}", key).contains("123456"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The full key, for sending to the API.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the key is an empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First eight characters followed by `...`.
    pub fn preview(&self) -> String {
        let head: String = self.0.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}
