use crate::{field::Field, optional::Optional};
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error as ThisError;

///
/// TextError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TextError {
    #[error("invalid bool value")]
    InvalidBool,

    #[error("invalid integer value: {0}")]
    InvalidInt(#[from] ParseIntError),

    #[error("invalid float value: {0}")]
    InvalidFloat(#[from] ParseFloatError),

    #[error("invalid {kind} value: {message}")]
    Invalid {
        kind: &'static str,
        message: String,
    },
}

///
/// TextDecode
///
/// Text-decodable capability, consulted once [`Optional::decode_text`]
/// has handled the absent forms; implementations only ever receive a
/// non-empty token that is not the `"null"` literal.
///

pub trait TextDecode: Sized {
    fn decode_text(raw: &str) -> Result<Self, TextError>;
}

///
/// TextEncode
///
/// Text-encodable capability producing the present form of a field; the
/// absent form (empty string) lives on [`Optional::encode_text`].
///

pub trait TextEncode {
    fn encode_text(&self) -> Result<String, TextError>;
}

impl TextDecode for bool {
    fn decode_text(raw: &str) -> Result<Self, TextError> {
        match raw {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(TextError::InvalidBool),
        }
    }
}

impl TextEncode for bool {
    fn encode_text(&self) -> Result<String, TextError> {
        Ok(String::from(if *self { "true" } else { "false" }))
    }
}

// impl_text_number
//
// Base-10 numeric kinds; parse failures convert into the matching
// TextError variant through the From impls above.
macro_rules! impl_text_number {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl TextDecode for $type {
                fn decode_text(raw: &str) -> Result<Self, TextError> {
                    Ok(raw.parse::<$type>()?)
                }
            }

            impl TextEncode for $type {
                fn encode_text(&self) -> Result<String, TextError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

impl_text_number!(f64, i16, i32, i64, u8);

impl TextDecode for String {
    fn decode_text(raw: &str) -> Result<Self, TextError> {
        Ok(raw.to_string())
    }
}

impl TextEncode for String {
    fn encode_text(&self) -> Result<String, TextError> {
        Ok(self.clone())
    }
}

impl<T: Field + TextDecode> Optional<T> {
    /// Decode one textual parameter into the receiver.
    ///
    /// Empty input and the literal `"null"` reset the receiver to absent
    /// with the zero value; anything else decodes through `T`'s text
    /// capability and marks the field present. For string fields this
    /// makes the empty string and absence intentionally
    /// indistinguishable on decode.
    pub fn decode_text(&mut self, raw: &str) -> Result<(), TextError> {
        if raw.is_empty() || raw == "null" {
            self.set_absent();
            return Ok(());
        }

        let value = T::decode_text(raw)?;
        self.set_present(value);
        Ok(())
    }
}

impl<T: Field + TextEncode> Optional<T> {
    /// Encode the receiver as one textual parameter; absent encodes as
    /// the empty string.
    pub fn encode_text(&self) -> Result<String, TextError> {
        match self.get() {
            Some(value) => value.encode_text(),
            None => Ok(String::new()),
        }
    }
}

///
/// TESTS
///
