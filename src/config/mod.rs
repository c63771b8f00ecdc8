//! Configuration document model
//!
//! The registry consumes a deserialized element tree rather than raw text;
//! `serde_json` is the parsing collaborator. Free-form element properties
//! ride in a flattened map so appender and layout kinds can pick out the
//! keys they understand, mirroring a loosely typed property bag.

use crate::core::error::{LoggerError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Free-form properties attached to an appender or layout element.
///
/// Scalar values may arrive as their native JSON type or as strings;
/// accessors coerce both forms.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, Value>);

impl Properties {
    #[must_use]
    pub fn string(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn integer(&self, key: &str) -> Option<u64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Some(true),
                "false" | "0" | "no" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }
}

/// One `appender` element: required `name` and `type` attributes, an
/// optional `layout` child, and arbitrary property children.
///
/// The attributes deserialize as options so a malformed element can be
/// skipped during load instead of failing the whole document.
#[derive(Debug, Deserialize)]
pub struct AppenderElement {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub layout: Option<LayoutElement>,
    #[serde(flatten)]
    pub properties: Properties,
}

/// A `layout` child element: a `type` attribute plus property children.
#[derive(Debug, Deserialize)]
pub struct LayoutElement {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub properties: Properties,
}

/// A `root` or `logger` element. `name` is required for non-root loggers
/// and may contain `*`/`?` wildcards.
#[derive(Debug, Deserialize)]
pub struct LoggerElement {
    pub name: Option<String>,
    pub level: Option<String>,
    #[serde(default, rename = "appender-ref")]
    pub appender_refs: Vec<String>,
}

/// The whole configuration document.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub appenders: Vec<AppenderElement>,
    #[serde(default)]
    pub root: Option<LoggerElement>,
    #[serde(default)]
    pub loggers: Vec<LoggerElement>,
}

impl ConfigDocument {
    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::ConfigParse`] when the file is missing or the
    /// document is malformed; the caller leaves its active configuration
    /// untouched in that case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| LoggerError::config_parse(path.display().to_string(), e.to_string()))?;
        Self::from_str(&text)
            .map_err(|e| LoggerError::config_parse(path.display().to_string(), e.to_string()))
    }

    fn from_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
