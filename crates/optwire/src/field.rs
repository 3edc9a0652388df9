use crate::types::Timestamp;
use std::fmt::Debug;

///
/// Field
///
/// Admission contract for [`Optional`](crate::Optional) payloads.
///
/// A field payload is always an owned value type. `Default` supplies the
/// zero value written whenever a field transitions to absent, and the
/// `'static` bound together with the explicit-impl rule below keeps
/// borrowed data out of the container: `Field` is implemented for the
/// closed set of column-native kinds and may be implemented for
/// user-owned value types, but never for references or other aliasing
/// wrappers.
///
/// Implementing `Field` alone admits a type to construction and the JSON
/// boundary (via its serde impls). The textual and column boundaries each
/// require their own capability on top:
/// [`TextDecode`](crate::text::TextDecode) /
/// [`TextEncode`](crate::text::TextEncode) and
/// [`ScanColumn`](crate::column::ScanColumn) /
/// [`ToColumn`](crate::column::ToColumn). A missing capability is a
/// compile error at the call site, not a runtime failure.
///

pub trait Field: Clone + Debug + Default + PartialEq + Send + Sync + Sized + 'static {
    /// Zero value written when a field transitions to absent.
    #[must_use]
    fn zero() -> Self {
        Self::default()
    }
}

// impl_field
//
// Registry of the column-native payload kinds. One entry per kind keeps
// the set closed and reviewable in one place; the per-boundary behavior
// for these kinds lives in the text and column modules.
macro_rules! impl_field {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl Field for $type {}
        )*
    };
}

impl_field!(bool, f64, i16, i32, i64, u8, String, Timestamp);
