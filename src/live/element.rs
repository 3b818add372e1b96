use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::util::time::{parse_instant, to_iso8601};

/// A displayed piece of text bound to a target instant.
///
/// The target is read back from the element on every tick, so the element stays the
/// source of truth for it.
pub trait LiveElement {
    /// Serialized target instant (the `data-certain-time` attribute in markup).
    fn certain_time(&self) -> Option<&str>;

    fn set_text(&mut self, text: &str);
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TargetError {
    #[error("element has no target timestamp")]
    Missing,
    #[error("malformed target timestamp {input:?}: {source}")]
    Malformed {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub fn read_target<E: LiveElement + ?Sized>(element: &E) -> Result<DateTime<Utc>, TargetError> {
    let raw = match element.certain_time() {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Err(TargetError::Missing),
    };
    parse_instant(raw).map_err(|source| TargetError::Malformed {
        input: raw.to_string(),
        source,
    })
}

/// In-memory element, used by the terminal view and in tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextElement {
    pub label: String,
    pub certain_time: Option<String>,
    pub text: String,
}

impl TextElement {
    pub fn new(label: impl Into<String>, certain_time: Option<String>) -> Self {
        Self {
            label: label.into(),
            certain_time,
            text: String::new(),
        }
    }

    pub fn at(label: impl Into<String>, target: &DateTime<Utc>) -> Self {
        Self::new(label, Some(to_iso8601(target)))
    }
}

impl LiveElement for TextElement {
    fn certain_time(&self) -> Option<&str> {
        self.certain_time.as_deref()
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}
