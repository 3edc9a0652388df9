//! Standard nullable-column holders.
//!
//! One `(value, valid)` pair per column kind, for repository code that
//! scans a nullable column without going through `Optional<T>`. The
//! pre-generic wrappers in [`legacy`](crate::legacy) are built on these.

use crate::{
    column::{ColumnError, ColumnValue, ScanColumn},
    types::Timestamp,
};

// null_holder
macro_rules! null_holder {
    ( $( $(#[$meta:meta])* $name:ident => ($type:ty, $variant:ident) ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, Default, PartialEq)]
            pub struct $name {
                pub value: $type,
                pub valid: bool,
            }

            impl $name {
                /// Scan one cell; null resets the holder to the zero value.
                pub fn scan(&mut self, src: &ColumnValue) -> Result<(), ColumnError> {
                    if src.is_null() {
                        self.value = <$type>::default();
                        self.valid = false;
                        return Ok(());
                    }

                    self.value = <$type as ScanColumn>::scan_column(src)?;
                    self.valid = true;
                    Ok(())
                }

                /// Outbound cell for the held state.
                #[must_use]
                pub fn to_column(&self) -> ColumnValue {
                    if self.valid {
                        ColumnValue::$variant(self.value.clone())
                    } else {
                        ColumnValue::Null
                    }
                }
            }
        )*
    };
}

null_holder! {
    ///
    /// NullBool
    ///
    NullBool => (bool, Bool),

    ///
    /// NullByte
    ///
    NullByte => (u8, Byte),

    ///
    /// NullFloat64
    ///
    NullFloat64 => (f64, Float64),

    ///
    /// NullInt16
    ///
    NullInt16 => (i16, Int16),

    ///
    /// NullInt32
    ///
    NullInt32 => (i32, Int32),

    ///
    /// NullInt64
    ///
    NullInt64 => (i64, Int64),

    ///
    /// NullText
    ///
    NullText => (String, Text),

    ///
    /// NullTimestamp
    ///
    NullTimestamp => (Timestamp, Timestamp),
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holder_scan_null() {
        let mut holder = NullInt64 {
            value: 42,
            valid: true,
        };
        holder.scan(&ColumnValue::Null).unwrap();

        assert!(!holder.valid);
        assert_eq!(holder.value, 0);
        assert_eq!(holder.to_column(), ColumnValue::Null);
    }

    #[test]
    fn test_holder_scan_value_round_trip() {
        let mut holder = NullText::default();
        holder
            .scan(&ColumnValue::Text(String::from("abc")))
            .unwrap();

        assert!(holder.valid);
        assert_eq!(holder.to_column(), ColumnValue::Text(String::from("abc")));
    }

    #[test]
    fn test_holder_accepts_widened_int64() {
        let mut holder = NullByte::default();
        holder.scan(&ColumnValue::Int64(200)).unwrap();

        assert_eq!(holder.value, 200);
        assert_eq!(holder.to_column(), ColumnValue::Byte(200));
    }

    #[test]
    fn test_holder_rejects_out_of_range() {
        let mut holder = NullByte::default();
        assert!(holder.scan(&ColumnValue::Int64(300)).is_err());
        assert!(!holder.valid);
    }

    #[test]
    fn test_timestamp_holder_round_trip() {
        let t = Timestamp::from_seconds(77);
        let mut holder = NullTimestamp::default();
        holder.scan(&ColumnValue::Timestamp(t)).unwrap();

        assert!(holder.valid);
        assert_eq!(holder.to_column(), ColumnValue::Timestamp(t));
    }
}
