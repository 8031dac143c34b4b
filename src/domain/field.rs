//! Generic validated field.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// The validation rule and text form behind a [`Field`].
///
/// Implementors are uninhabited marker types; all behaviour lives in the
/// associated functions.
pub trait FieldKind {
    /// The value stored once the raw text has been accepted.
    type Value: Clone + PartialEq + Eq + fmt::Debug;

    /// Parse and validate raw text.
    fn parse(raw: &str) -> Result<Self::Value, ValidationError>;

    /// Render the stored value back to its canonical text.
    fn render(value: &Self::Value) -> String;
}

/// A scalar value that can only hold input accepted by its [`FieldKind`].
///
/// Both construction and [`Field::set`] run the same validation. A failed
/// `set` leaves the previous value in place.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let mut phone = Phone::new("1234567890").unwrap();
/// assert!(phone.set("12345").is_err());
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<K: FieldKind> {
    value: K::Value,
    kind: PhantomData<K>,
}

impl<K: FieldKind> Field<K> {
    /// Validate `raw` and wrap the parsed value.
    ///
    /// # Errors
    ///
    /// Returns the kind's `ValidationError` if `raw` is rejected.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            value: K::parse(raw)?,
            kind: PhantomData,
        })
    }

    /// Replace the stored value with `raw` if it validates.
    pub fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.value = K::parse(raw)?;
        Ok(())
    }

    /// Get the stored value.
    pub fn value(&self) -> &K::Value {
        &self.value
    }

    /// Convert into the stored value.
    pub fn into_inner(self) -> K::Value {
        self.value
    }
}

impl<K: FieldKind> fmt::Display for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&K::render(&self.value))
    }
}

// Serde support - serialize as canonical text
impl<K: FieldKind> Serialize for Field<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        K::render(&self.value).serialize(serializer)
    }
}

// Serde support - deserialize from text with validation
impl<'de, K: FieldKind> Deserialize<'de> for Field<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(&s).map_err(serde::de::Error::custom)
    }
}
