use crate::cue::error::FieldError;
use crate::cue::models::IndexPoint;
use std::fmt::Display;

/// Values that can live in a set-once [`Field`].
pub trait FieldValue: Display {
    /// Empty values never count as an assignment.
    fn is_blank(&self) -> bool {
        false
    }
}

impl FieldValue for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl FieldValue for IndexPoint {}

/// A scalar that may be assigned at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<T>(Option<T>);

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: FieldValue> Field<T> {
    /// Fails with [`FieldError::AlreadySet`] naming the existing value, even if `value` is equal to it.
    pub fn assign(&mut self, value: T) -> Result<(), FieldError> {
        if let Some(current) = &self.0 {
            return Err(FieldError::AlreadySet(current.to_string()));
        }
        if !value.is_blank() {
            self.0 = Some(value);
        }
        Ok(())
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}
