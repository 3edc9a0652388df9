//! Optional field values carried across three wire boundaries at once:
//! JSON bodies, textual query/form parameters, and database columns.
//! The generic container is [`Optional`]; payload types opt in through
//! [`field::Field`] plus the per-boundary capability traits.

pub mod column;
pub mod field;
pub mod legacy;
pub mod text;
pub mod types;

mod json;
mod optional;

pub use optional::Optional;

///
/// Prelude
///
/// Prelude contains only field vocabulary.
/// Holders, legacy wrappers, and error types are imported from their
/// modules explicitly.
///

pub mod prelude {
    pub use crate::{
        Optional,
        column::{ColumnValue, ScanColumn, ToColumn},
        field::Field,
        text::{TextDecode, TextEncode},
        types::Timestamp,
    };
}
