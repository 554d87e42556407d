use crate::error::SqbResult;
use crate::ident::QuoteStyle;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Per-builder configuration.
///
/// Statement logging is disabled by default and only has an effect when the
/// crate is compiled with the `tracing` feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Quoting applied to table names and INSERT/UPDATE column names.
    pub quote_style: QuoteStyle,
    /// Whether each build emits a `tracing` event.
    pub log_statements: bool,
    /// Truncate logged SQL (in bytes, cut on a char boundary). `None` means no truncation.
    pub max_log_sql_length: Option<usize>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::None,
            log_statements: false,
            max_log_sql_length: Some(200),
        }
    }
}

impl BuildConfig {
    /// Create a new configuration with defaults (no quoting, logging disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Example
    /// ```
    /// use sqb::{BuildConfig, QuoteStyle};
    ///
    /// let config = BuildConfig::from_json(r#"{"quote_style": "backtick"}"#)?;
    /// assert_eq!(config.quote_style, QuoteStyle::Backtick);
    /// assert!(!config.log_statements);
    /// # Ok::<(), sqb::SqbError>(())
    /// ```
    pub fn from_json(json: &str) -> SqbResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the identifier quoting style.
    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    /// Emit a `tracing` event for every build.
    pub fn enable_logging(mut self) -> Self {
        self.log_statements = true;
        self
    }

    /// Stop emitting build events.
    pub fn disable_logging(mut self) -> Self {
        self.log_statements = false;
        self
    }

    /// Set maximum logged SQL length.
    pub fn with_max_log_sql_length(mut self, len: usize) -> Self {
        self.max_log_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_log_sql_length = None;
        self
    }

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn truncate_sql<'a>(&self, sql: &'a str) -> Cow<'a, str> {
        match self.max_log_sql_length {
            Some(max) if sql.len() > max => {
                let mut end = max;
                while end > 0 && !sql.is_char_boundary(end) {
                    end -= 1;
                }
                Cow::Owned(format!("{}...", &sql[..end]))
            }
            _ => Cow::Borrowed(sql),
        }
    }
}
