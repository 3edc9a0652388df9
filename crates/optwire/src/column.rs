mod holder;

pub use holder::{
    NullBool, NullByte, NullFloat64, NullInt16, NullInt32, NullInt64, NullText, NullTimestamp,
};

use crate::{field::Field, optional::Optional, types::Timestamp};
use std::fmt;
use thiserror::Error as ThisError;

///
/// ColumnKind
///
/// Canonical kind taxonomy for column cells, used by dispatch errors.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColumnKind {
    Bool,
    Byte,
    Float64,
    Int16,
    Int32,
    Int64,
    Null,
    Text,
    Timestamp,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Float64 => "float64",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Null => "null",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
        };
        write!(f, "{label}")
    }
}

///
/// ColumnValue
///
/// Wire-level column cell exchanged with the database driver: the scan
/// source on the way in, the bound parameter on the way out.
///

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnValue {
    Bool(bool),
    Byte(u8),
    Float64(f64),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Null,
    Text(String),
    Timestamp(Timestamp),
}

impl ColumnValue {
    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        match self {
            Self::Bool(_) => ColumnKind::Bool,
            Self::Byte(_) => ColumnKind::Byte,
            Self::Float64(_) => ColumnKind::Float64,
            Self::Int16(_) => ColumnKind::Int16,
            Self::Int32(_) => ColumnKind::Int32,
            Self::Int64(_) => ColumnKind::Int64,
            Self::Null => ColumnKind::Null,
            Self::Text(_) => ColumnKind::Text,
            Self::Timestamp(_) => ColumnKind::Timestamp,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

///
/// ColumnError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ColumnError {
    #[error("cannot scan {found} column into {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: ColumnKind,
    },

    #[error("{found} value {value} out of range for {expected}")]
    OutOfRange {
        expected: &'static str,
        found: ColumnKind,
        value: i64,
    },
}

///
/// ScanColumn
///
/// Column-scannable capability: decode one non-null cell into `Self`.
/// Null handling lives on [`Optional`]; implementations only ever see
/// real cells.
///

pub trait ScanColumn: Sized {
    fn scan_column(src: &ColumnValue) -> Result<Self, ColumnError>;
}

///
/// ToColumn
///
/// Column-valuable capability: encode `self` as one non-null cell.
///

pub trait ToColumn {
    fn to_column(&self) -> Result<ColumnValue, ColumnError>;
}

// impl_column_exact
//
// Kinds whose cell must match their own variant exactly.
macro_rules! impl_column_exact {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl ScanColumn for $type {
                fn scan_column(src: &ColumnValue) -> Result<Self, ColumnError> {
                    match src {
                        ColumnValue::$variant(v) => Ok(*v),
                        other => Err(ColumnError::TypeMismatch {
                            expected: stringify!($type),
                            found: other.kind(),
                        }),
                    }
                }
            }

            impl ToColumn for $type {
                fn to_column(&self) -> Result<ColumnValue, ColumnError> {
                    Ok(ColumnValue::$variant(*self))
                }
            }
        )*
    };
}

impl_column_exact! {
    bool => Bool,
    f64  => Float64,
    i64  => Int64,
}

// impl_column_narrow
//
// Narrower integer kinds. Drivers deliver any integer column either as
// the exact variant or widened to an int64 cell, so both are accepted;
// the widened form is range-checked.
macro_rules! impl_column_narrow {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl ScanColumn for $type {
                fn scan_column(src: &ColumnValue) -> Result<Self, ColumnError> {
                    match src {
                        ColumnValue::$variant(v) => Ok(*v),
                        ColumnValue::Int64(v) => {
                            Self::try_from(*v).map_err(|_| ColumnError::OutOfRange {
                                expected: stringify!($type),
                                found: ColumnKind::Int64,
                                value: *v,
                            })
                        }
                        other => Err(ColumnError::TypeMismatch {
                            expected: stringify!($type),
                            found: other.kind(),
                        }),
                    }
                }
            }

            impl ToColumn for $type {
                fn to_column(&self) -> Result<ColumnValue, ColumnError> {
                    Ok(ColumnValue::$variant(*self))
                }
            }
        )*
    };
}

impl_column_narrow! {
    i16 => Int16,
    i32 => Int32,
    u8  => Byte,
}

impl ScanColumn for String {
    fn scan_column(src: &ColumnValue) -> Result<Self, ColumnError> {
        match src {
            ColumnValue::Text(v) => Ok(v.clone()),
            other => Err(ColumnError::TypeMismatch {
                expected: "String",
                found: other.kind(),
            }),
        }
    }
}

impl ToColumn for String {
    fn to_column(&self) -> Result<ColumnValue, ColumnError> {
        Ok(ColumnValue::Text(self.clone()))
    }
}

impl<T: Field + ScanColumn> Optional<T> {
    /// Scan one column cell into the receiver.
    ///
    /// A null cell resets the receiver to absent with the zero value,
    /// regardless of prior state; any other cell decodes through `T`'s
    /// column capability and marks the field present. On error the
    /// receiver keeps its previous state.
    pub fn scan(&mut self, src: &ColumnValue) -> Result<(), ColumnError> {
        if src.is_null() {
            self.set_absent();
            return Ok(());
        }

        let value = T::scan_column(src)?;
        self.set_present(value);
        Ok(())
    }
}

impl<T: Field + ToColumn> Optional<T> {
    /// Outbound cell for the receiver: null when absent, `T`'s cell when
    /// present.
    pub fn value_out(&self) -> Result<ColumnValue, ColumnError> {
        match self.get() {
            Some(value) => value.to_column(),
            None => Ok(ColumnValue::Null),
        }
    }
}

///
/// TESTS
///
