//! Layout implementations
//!
//! A layout is a pure function from a log record to display text. The set
//! of kinds is a closed enum; the factory maps configured type strings onto
//! it and reports unknown strings as absent.

pub mod pattern;

pub use pattern::PatternLayout;

use crate::config::LayoutElement;
use crate::core::record::LogRecord;

/// The fixed set of layout kinds.
pub enum Layout {
    /// Pass the record text through unchanged.
    Basic,
    /// Token-substitution formatting, see [`PatternLayout`].
    Pattern(PatternLayout),
}

impl Layout {
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        match self {
            Layout::Basic => record.text().to_string(),
            Layout::Pattern(pattern) => pattern.format(record),
        }
    }
}

/// Factory lookup by configured type string.
pub(crate) fn create(element: &LayoutElement) -> Option<Layout> {
    match element.kind.as_deref()? {
        "basic" | "basicLayout" => Some(Layout::Basic),
        "pattern" | "patternLayout" => {
            let pattern = element
                .properties
                .string("conversionPattern")
                .unwrap_or_default();
            Some(Layout::Pattern(PatternLayout::new(pattern)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, LogRecord};

    fn layout_element(kind: Option<&str>, pattern: Option<&str>) -> LayoutElement {
        let json = match (kind, pattern) {
            (Some(kind), Some(pattern)) => {
                format!(r#"{{ "type": "{kind}", "conversionPattern": "{pattern}" }}"#)
            }
            (Some(kind), None) => format!(r#"{{ "type": "{kind}" }}"#),
            _ => "{}".to_string(),
        };
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_basic_layout_passes_text_through() {
        let record = LogRecord::new(LogLevel::Info, "a.rs", 1, "app::run").with_text("raw text");
        assert_eq!(Layout::Basic.format(&record), "raw text");
    }

    #[test]
    fn test_factory_kinds() {
        assert!(matches!(
            create(&layout_element(Some("basic"), None)),
            Some(Layout::Basic)
        ));
        assert!(matches!(
            create(&layout_element(Some("pattern"), Some("%message"))),
            Some(Layout::Pattern(_))
        ));
        assert!(matches!(
            create(&layout_element(Some("patternLayout"), Some("%message"))),
            Some(Layout::Pattern(_))
        ));
    }

    #[test]
    fn test_factory_unknown_or_missing_type() {
        assert!(create(&layout_element(Some("xml"), None)).is_none());
        assert!(create(&layout_element(None, None)).is_none());
    }
}
