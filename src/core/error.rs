//! Error types for the logging runtime

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Configuration source could not be read or parsed
    #[error("failed to parse configuration '{path}': {message}")]
    ConfigParse { path: String, message: String },

    /// Configuration element missing a required attribute; the element is
    /// skipped, never fatal to the reload
    #[error("invalid configuration element '{element}': {message}")]
    ConfigElement { element: String, message: String },

    /// Factory lookup by type string failed; the element is skipped
    #[error("unknown {kind} type '{name}'")]
    UnknownFactoryType { kind: String, name: String },

    /// IO error with context
    #[error("IO error while {operation} '{path}': {source}")]
    Io {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No configuration source has been set
    #[error("no configuration source set")]
    NoSource,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration element error
    pub fn element(element: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::ConfigElement {
            element: element.into(),
            message: message.into(),
        }
    }

    /// Create an unknown factory type error
    pub fn unknown_type(kind: impl Into<String>, name: impl Into<String>) -> Self {
        LoggerError::UnknownFactoryType {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create an IO error with context
    pub fn io(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config_parse("/etc/relog.json", "unexpected end of input");
        assert!(matches!(err, LoggerError::ConfigParse { .. }));

        let err = LoggerError::element("appender", "missing 'name' attribute");
        assert!(matches!(err, LoggerError::ConfigElement { .. }));

        let err = LoggerError::unknown_type("appender", "syslog");
        assert!(matches!(err, LoggerError::UnknownFactoryType { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unknown_type("layout", "xml");
        assert_eq!(err.to_string(), "unknown layout type 'xml'");

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LoggerError::io("opening", "/var/log/app.log", io_err);
        assert!(err.to_string().contains("opening"));
        assert!(err.to_string().contains("/var/log/app.log"));
    }
}
