//! Configuration for address list parsing.

/// Configuration for [`AddressList::parse_with_config`](crate::AddressList::parse_with_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Whether empty entries are skipped.
    ///
    /// Empty entries come from an empty input, a trailing `;`, or `;;`.
    /// When false they are rejected as missing the method separator.
    /// Default: true
    pub skip_empty_entries: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            skip_empty_entries: true,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that rejects empty entries.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            skip_empty_entries: false,
        }
    }

    /// Enables or disables skipping of empty entries.
    #[must_use]
    pub const fn with_skip_empty_entries(mut self, skip: bool) -> Self {
        self.skip_empty_entries = skip;
        self
    }
}
