use serde::{Deserialize, Serialize};

use crate::error::{DiffError, Result};

/// Rendering and traversal settings for a diff.
///
/// The defaults reproduce the plain algorithm: absent values render as the
/// empty string, collapsed scalar sequences are joined with `,`, and nesting
/// depth is not limited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Display string for the absent sentinel.
    pub absent_placeholder: String,
    /// Separator used when a scalar sequence is collapsed into one value.
    pub sequence_separator: String,
    /// Maximum number of nested objects entered at once, the root included.
    /// `None` disables the guard; self-referential instances then recurse
    /// without bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            absent_placeholder: String::new(),
            sequence_separator: ",".to_owned(),
            max_depth: None,
        }
    }
}

impl DiffConfig {
    /// Parse a configuration from a TOML document. Missing keys keep their
    /// defaults.
    ///
    /// ```
    /// use shapediff_types::DiffConfig;
    ///
    /// let config = DiffConfig::from_toml_str("max_depth = 8").unwrap();
    /// assert_eq!(config.max_depth, Some(8));
    /// assert_eq!(config.sequence_separator, ",");
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| DiffError::Config(e.to_string()))
    }

    /// Render this configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| DiffError::Config(e.to_string()))
    }

    /// Set the display string for absent values.
    pub fn with_absent_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.absent_placeholder = placeholder.into();
        self
    }

    /// Set the separator for collapsed scalar sequences.
    pub fn with_sequence_separator(mut self, separator: impl Into<String>) -> Self {
        self.sequence_separator = separator.into();
        self
    }

    /// Limit nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
