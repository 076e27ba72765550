use crate::error::{MicrodataError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default bound on element nesting during the scope walk
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How a property value is resolved for tags listed in the attribute table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ValuePolicy {
    /// Use the table attribute, falling back to the element's text when it is missing
    #[default]
    Standard,

    /// Use the table attribute only; a missing attribute yields empty text
    AttributeOnly,
}

/// How repeated tokens in one `itemprop` attribute are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ItempropTokens {
    /// Each distinct name is assigned once (`itemprop="name name"` sets `name` once)
    #[default]
    Unique,

    /// Every token is assigned, so a repeated name gets the value repeatedly
    Every,
}

/// Options controlling extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Maximum element nesting, counted from the extraction root
    pub max_depth: usize,

    /// Attribute-table precedence for property values
    pub value_policy: ValuePolicy,

    /// Treatment of repeated `itemprop` tokens
    pub itemprop_tokens: ItempropTokens,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            value_policy: ValuePolicy::Standard,
            itemprop_tokens: ItempropTokens::Unique,
        }
    }
}

impl ExtractOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the nesting bound
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder method: set the value policy
    pub fn value_policy(mut self, value_policy: ValuePolicy) -> Self {
        self.value_policy = value_policy;
        self
    }

    /// Builder method: set how repeated `itemprop` tokens are treated
    pub fn itemprop_tokens(mut self, itemprop_tokens: ItempropTokens) -> Self {
        self.itemprop_tokens = itemprop_tokens;
        self
    }

    /// Parse and validate options from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| MicrodataError::ConfigInvalid(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MicrodataError::ConfigInvalid(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(MicrodataError::ConfigInvalid(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
