//! Pattern layout: token-substitution formatting
//!
//! The conversion pattern is scanned for `%`-prefixed tokens which are
//! replaced with fields from the record; any other text is copied verbatim.
//! `%date` optionally takes a strftime format argument in braces, with `%L`
//! standing in for the millisecond fraction: `%date{%H:%M:%S.%L}`.

use crate::core::record::LogRecord;
use std::fmt::Write as _;

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S.%L";
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Date,
    EpochMs,
    Epoch,
    Thread,
    LevelNum,
    Level,
    Module,
    Class,
    Method,
    Message,
    File,
    LineNum,
    Newline,
}

// Longest-match order: %epochms before %epoch, %levelnum before %level.
const TOKENS: &[(&str, Token)] = &[
    ("%date", Token::Date),
    ("%epochms", Token::EpochMs),
    ("%epoch", Token::Epoch),
    ("%thread", Token::Thread),
    ("%levelnum", Token::LevelNum),
    ("%level", Token::Level),
    ("%module", Token::Module),
    ("%class", Token::Class),
    ("%method", Token::Method),
    ("%message", Token::Message),
    ("%file", Token::File),
    ("%linenum", Token::LineNum),
    ("%newline", Token::Newline),
];

/// Formats records through a configurable conversion pattern.
///
/// Formatting is a pure function of the record and the pattern; the layout
/// holds no state and takes no locks.
pub struct PatternLayout {
    pattern: String,
}

impl PatternLayout {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    #[must_use]
    pub fn conversion_pattern(&self) -> &str {
        &self.pattern
    }

    /// Substitute every token in the pattern with the record's fields.
    ///
    /// An empty pattern degrades to the record text, matching the basic
    /// layout.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        if self.pattern.is_empty() {
            return record.text().to_string();
        }

        let mut out = String::with_capacity(self.pattern.len() + record.text().len());
        let mut rest = self.pattern.as_str();

        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];

            match Self::match_token(rest) {
                Some((token, consumed)) => {
                    let (argument, argument_len) = Self::take_argument(&rest[consumed..]);
                    Self::expand(&mut out, token, argument, record);
                    rest = &rest[consumed + argument_len..];
                }
                None => {
                    out.push('%');
                    rest = &rest[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn match_token(rest: &str) -> Option<(Token, usize)> {
        TOKENS
            .iter()
            .find(|(name, _)| rest.starts_with(name))
            .map(|(name, token)| (*token, name.len()))
    }

    /// Consume a `{...}` format argument immediately following a token.
    fn take_argument(rest: &str) -> (Option<&str>, usize) {
        if !rest.starts_with('{') {
            return (None, 0);
        }
        match rest.find('}') {
            Some(end) => (Some(&rest[1..end]), end + 1),
            None => (None, 0),
        }
    }

    fn expand(out: &mut String, token: Token, argument: Option<&str>, record: &LogRecord) {
        match token {
            Token::Date => {
                let format = argument.unwrap_or(DEFAULT_DATE_FORMAT);
                let millis = format!("{:03}", record.timestamp().timestamp_subsec_millis());
                let format = format.replace("%L", &millis);

                let mut value = String::new();
                if write!(value, "{}", record.timestamp().format(&format)).is_err() {
                    // bad user-supplied strftime string
                    value.clear();
                    let _ = write!(value, "{}", record.timestamp().format(FALLBACK_DATE_FORMAT));
                }
                out.push_str(&value);
            }
            Token::EpochMs => {
                let _ = write!(out, "{}", record.timestamp().timestamp_millis());
            }
            Token::Epoch => {
                let _ = write!(out, "{}", record.timestamp().timestamp());
            }
            Token::Thread => out.push_str(record.thread_id()),
            Token::LevelNum => {
                let _ = write!(out, "{}", record.level().as_number());
            }
            Token::Level => out.push_str(record.level().to_str()),
            Token::Module => out.push_str(record.module()),
            Token::Class => out.push_str(record.class()),
            Token::Method => out.push_str(record.function()),
            Token::Message => out.push_str(record.text()),
            Token::File => out.push_str(record.file()),
            Token::LineNum => {
                let _ = write!(out, "{}", record.line());
            }
            Token::Newline => out.push('\n'),
        }
    }
}
