//! JSON codec adapter.
//!
//! Absent encodes as the JSON null literal; present delegates structural
//! encoding of the payload to serde. Decode maps null back to absent with
//! the zero value and anything else through `T`'s own Deserialize.

use crate::{field::Field, optional::Optional};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Field + Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.get() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Field + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }

    // Binding layers decode into long-lived structs; flip the existing
    // instance rather than rebuilding it.
    fn deserialize_in_place<D>(deserializer: D, place: &mut Self) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<T>::deserialize(deserializer)? {
            Some(value) => place.set_present(value),
            None => place.set_absent(),
        }
        Ok(())
    }
}

///
/// TESTS
///
