//! Signing timestamps and their fixed UTC byte form.
//!
//! A `signed_at` travels as ISO-8601 text. When it takes part in hashing it
//! is rendered as `YYYY-MM-DD HH:MM:SS[.fraction] +0000 UTC`, with trailing
//! zeros of the nanosecond fraction trimmed and the fraction omitted when it
//! is zero.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::encoding::CodecError;
use crate::validation::ValidationError;

const ISO_8601_PATTERN: &str =
    r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{1,9})?(Z|[+-]\d{2}:\d{2})$";

/// ISO-8601 timestamp recorded when a fact sign was produced.
///
/// Deserialization validates the text with [`SignedAt::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SignedAt(String);

impl SignedAt {
    /// Creates a new instance without validation; callers are responsible for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated ISO-8601 timestamp.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Regex::new(ISO_8601_PATTERN)
            .expect("invalid regex")
            .is_match(&s)
        {
            return Err(ValidationError::PatternMismatch {
                field: "signed_at",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Renders an instant with millisecond precision and a `Z` suffix.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Returns the ISO-8601 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the text into a UTC instant.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, CodecError> {
        DateTime::parse_from_rfc3339(&self.0)
            .map(|at| at.with_timezone(&Utc))
            .map_err(|_| CodecError::Timestamp {
                field: "signed_at",
                value: self.0.clone(),
            })
    }

    /// Fixed-width UTC text used when the timestamp is hashed.
    pub fn utc_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let at = self.to_datetime()?;
        let mut text = at.format("%Y-%m-%d %H:%M:%S").to_string();

        let mut fraction = format!("{:09}", at.nanosecond());
        while fraction.ends_with('0') {
            fraction.pop();
        }
        if !fraction.is_empty() {
            text.push('.');
            text.push_str(&fraction);
        }

        text.push_str(" +0000 UTC");
        Ok(text.into_bytes())
    }
}

impl TryFrom<String> for SignedAt {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SignedAt> for String {
    fn from(value: SignedAt) -> Self {
        value.0
    }
}

impl AsRef<str> for SignedAt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
