//! Pre-generic single-type wrappers.
//!
//! These predate [`Optional`](crate::Optional) and survive for older call
//! sites. Each wrapper carries its own three-protocol round-trip instead
//! of delegating to the generic container, so their behavior can diverge
//! per kind; new code should use `Optional<T>`.

use crate::{
    column::{ColumnError, ColumnValue, NullBool, NullByte, NullInt64, NullText},
    text::TextError,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

///
/// OptionalBool
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OptionalBool {
    pub value: bool,
    pub valid: bool,
}

impl OptionalBool {
    #[must_use]
    pub const fn new(value: bool, valid: bool) -> Self {
        Self { value, valid }
    }

    pub fn decode_text(&mut self, raw: &str) -> Result<(), TextError> {
        if raw.is_empty() || raw == "null" {
            *self = Self::default();
            return Ok(());
        }

        self.value = match raw {
            "true" => true,
            "false" => false,
            _ => return Err(TextError::InvalidBool),
        };
        self.valid = true;
        Ok(())
    }

    #[must_use]
    pub const fn encode_text(&self) -> &'static str {
        match (self.valid, self.value) {
            (false, _) => "",
            (true, true) => "true",
            (true, false) => "false",
        }
    }

    pub fn scan(&mut self, src: &ColumnValue) -> Result<(), ColumnError> {
        let mut holder = NullBool::default();
        holder.scan(src)?;

        self.value = holder.value;
        self.valid = holder.valid;
        Ok(())
    }

    #[must_use]
    pub const fn value_out(&self) -> ColumnValue {
        if self.valid {
            ColumnValue::Bool(self.value)
        } else {
            ColumnValue::Null
        }
    }
}

impl Serialize for OptionalBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            serializer.serialize_bool(self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for OptionalBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<bool>::deserialize(deserializer)? {
            Some(value) => Self { value, valid: true },
            None => Self::default(),
        })
    }
}

///
/// OptionalString
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OptionalString {
    pub value: String,
    pub valid: bool,
}

impl OptionalString {
    #[must_use]
    pub const fn new(value: String, valid: bool) -> Self {
        Self { value, valid }
    }

    pub fn decode_text(&mut self, raw: &str) -> Result<(), TextError> {
        if raw.is_empty() || raw == "null" {
            *self = Self::default();
            return Ok(());
        }

        self.value = raw.to_string();
        self.valid = true;
        Ok(())
    }

    #[must_use]
    pub fn encode_text(&self) -> String {
        if self.valid {
            self.value.clone()
        } else {
            String::new()
        }
    }

    pub fn scan(&mut self, src: &ColumnValue) -> Result<(), ColumnError> {
        let mut holder = NullText::default();
        holder.scan(src)?;

        self.value = holder.value;
        self.valid = holder.valid;
        Ok(())
    }

    #[must_use]
    pub fn value_out(&self) -> ColumnValue {
        if self.valid {
            ColumnValue::Text(self.value.clone())
        } else {
            ColumnValue::Null
        }
    }
}

impl Serialize for OptionalString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            serializer.serialize_str(&self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for OptionalString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(value) => Self { value, valid: true },
            None => Self::default(),
        })
    }
}

///
/// OptionalInt
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OptionalInt {
    pub value: i64,
    pub valid: bool,
}

impl OptionalInt {
    #[must_use]
    pub const fn new(value: i64, valid: bool) -> Self {
        Self { value, valid }
    }

    pub fn decode_text(&mut self, raw: &str) -> Result<(), TextError> {
        if raw.is_empty() || raw == "null" {
            *self = Self::default();
            return Ok(());
        }

        self.value = raw.parse()?;
        self.valid = true;
        Ok(())
    }

    #[must_use]
    pub fn encode_text(&self) -> String {
        if self.valid {
            self.value.to_string()
        } else {
            String::new()
        }
    }

    pub fn scan(&mut self, src: &ColumnValue) -> Result<(), ColumnError> {
        let mut holder = NullInt64::default();
        holder.scan(src)?;

        self.value = holder.value;
        self.valid = holder.valid;
        Ok(())
    }

    #[must_use]
    pub const fn value_out(&self) -> ColumnValue {
        if self.valid {
            ColumnValue::Int64(self.value)
        } else {
            ColumnValue::Null
        }
    }
}

impl Serialize for OptionalInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            serializer.serialize_i64(self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for OptionalInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<i64>::deserialize(deserializer)? {
            Some(value) => Self { value, valid: true },
            None => Self::default(),
        })
    }
}

///
/// OptionalUint
///
/// Column traffic runs through the single-byte holder, unlike
/// `OptionalInt`'s 64-bit holder: values above `u8::MAX` truncate on the
/// way out and reject on the way in. Existing call sites only store small
/// enumeration-like values, so the narrow width has never been observed
/// in production.
/// TODO: confirm with the schema owners whether the byte-only range is
/// intended; if not, move to `NullInt64` the way `OptionalInt` does.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OptionalUint {
    pub value: u64,
    pub valid: bool,
}

impl OptionalUint {
    #[must_use]
    pub const fn new(value: u64, valid: bool) -> Self {
        Self { value, valid }
    }

    pub fn decode_text(&mut self, raw: &str) -> Result<(), TextError> {
        if raw.is_empty() || raw == "null" {
            *self = Self::default();
            return Ok(());
        }

        self.value = raw.parse()?;
        self.valid = true;
        Ok(())
    }

    #[must_use]
    pub fn encode_text(&self) -> String {
        if self.valid {
            self.value.to_string()
        } else {
            String::new()
        }
    }

    pub fn scan(&mut self, src: &ColumnValue) -> Result<(), ColumnError> {
        let mut holder = NullByte::default();
        holder.scan(src)?;

        self.value = u64::from(holder.value);
        self.valid = holder.valid;
        Ok(())
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn value_out(&self) -> ColumnValue {
        if self.valid {
            ColumnValue::Byte(self.value as u8)
        } else {
            ColumnValue::Null
        }
    }
}

impl Serialize for OptionalUint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            serializer.serialize_u64(self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for OptionalUint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<u64>::deserialize(deserializer)? {
            Some(value) => Self { value, valid: true },
            None => Self::default(),
        })
    }
}

///
/// TESTS
///
