use crate::field::Field;

///
/// Optional
///
/// A field payload plus a validity flag, representing "field absent"
/// without a nullable reference.
///
/// Invariant: when `valid == false` the payload holds the zero value of
/// `T`. Every decode and scan surface re-establishes this when it flips a
/// field to absent; after a *failed* decode the receiver's state is
/// unspecified and callers must discard it.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Optional<T: Field> {
    value: T,
    valid: bool,
}

impl<T: Field> Optional<T> {
    /// Direct constructor with an explicit validity flag.
    ///
    /// Callers passing `valid == false` are expected to pass the zero
    /// value as well; the decode and scan surfaces always do.
    #[must_use]
    pub const fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Present field holding `value`.
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self { value, valid: true }
    }

    /// Absent field holding the zero value.
    #[must_use]
    pub fn none() -> Self {
        Self {
            value: T::zero(),
            valid: false,
        }
    }

    /// Build from an optional reference at a nullable boundary.
    ///
    /// `None` maps to absent with the zero value; `Some` copies the
    /// referenced value into a present field.
    #[must_use]
    pub fn from_ref(value: Option<&T>) -> Self {
        match value {
            Some(v) => Self::some(v.clone()),
            None => Self::none(),
        }
    }

    /// Returns the payload when present, otherwise the zero value of `T`.
    /// Never fails.
    #[must_use]
    pub fn value_or_zero(&self) -> T {
        if self.valid { self.value.clone() } else { T::zero() }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Borrow the payload when present.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        if self.valid { Some(&self.value) } else { None }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        if self.valid { Some(self.value) } else { None }
    }

    // Validity transitions shared by the decode/scan surfaces. These are
    // the only mutating paths, and both keep the zero-when-absent
    // invariant.
    pub(crate) fn set_absent(&mut self) {
        self.value = T::zero();
        self.valid = false;
    }

    pub(crate) fn set_present(&mut self, value: T) {
        self.value = value;
        self.valid = true;
    }
}

impl<T: Field> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T: Field> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::some(v),
            None => Self::none(),
        }
    }
}

impl<T: Field> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

///
/// TESTS
///
