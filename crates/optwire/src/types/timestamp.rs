use crate::{
    column::{ColumnError, ColumnValue, ScanColumn, ToColumn},
    text::{TextDecode, TextEncode, TextError},
};
use chrono::{DateTime, SecondsFormat};
use derive_more::{Add, AddAssign, Display, FromStr, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error as ThisError;

///
/// Timestamp
/// (in seconds)
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    FromStr,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    Sub,
    SubAssign,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);
    pub const MIN: Self = Self(u64::MIN);
    pub const MAX: Self = Self(u64::MAX);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Construct from milliseconds (truncate to seconds).
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms / 1_000)
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, TimestampError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| TimestampError::Parse(e.to_string()))?;
        let ts = dt.timestamp();
        if ts < 0 {
            return Err(TimestampError::BeforeEpoch);
        }

        Ok(Self(ts.unsigned_abs()))
    }

    pub fn parse_flexible(s: &str) -> Result<Self, TimestampError> {
        // Try integer seconds
        if let Ok(n) = s.parse::<u64>() {
            return Ok(Self(n));
        }

        // Try RFC3339
        Self::parse_rfc3339(s)
    }

    /// RFC-3339 rendering in UTC with second precision.
    pub fn to_rfc3339(self) -> Result<String, TimestampError> {
        let secs = i64::try_from(self.0).map_err(|_| TimestampError::OutOfRange(self.0))?;
        let dt = DateTime::from_timestamp(secs, 0).ok_or(TimestampError::OutOfRange(self.0))?;

        Ok(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// Current wall-clock timestamp in seconds.
    #[must_use]
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());

        Self(secs)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// TimestampError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TimestampError {
    #[error("timestamp parse error: {0}")]
    Parse(String),

    #[error("timestamp before epoch")]
    BeforeEpoch,

    #[error("timestamp out of calendar range: {0}s")]
    OutOfRange(u64),
}

impl From<u64> for Timestamp {
    fn from(u: u64) -> Self {
        Self(u)
    }
}

impl From<Timestamp> for u64 {
    fn from(t: Timestamp) -> Self {
        t.0
    }
}

// Textual boundary: accepts either integer seconds or RFC-3339 in,
// emits RFC-3339 out.
impl TextDecode for Timestamp {
    fn decode_text(raw: &str) -> Result<Self, TextError> {
        Self::parse_flexible(raw).map_err(|e| TextError::Invalid {
            kind: "timestamp",
            message: e.to_string(),
        })
    }
}

impl TextEncode for Timestamp {
    fn encode_text(&self) -> Result<String, TextError> {
        self.to_rfc3339().map_err(|e| TextError::Invalid {
            kind: "timestamp",
            message: e.to_string(),
        })
    }
}

impl ScanColumn for Timestamp {
    fn scan_column(src: &ColumnValue) -> Result<Self, ColumnError> {
        match src {
            ColumnValue::Timestamp(v) => Ok(*v),
            other => Err(ColumnError::TypeMismatch {
                expected: "Timestamp",
                found: other.kind(),
            }),
        }
    }
}

impl ToColumn for Timestamp {
    fn to_column(&self) -> Result<ColumnValue, ColumnError> {
        Ok(ColumnValue::Timestamp(*self))
    }
}

///
/// TESTS
///
