//! Non-empty, ordered collection of [`Error`]s.
use core::fmt::{self, Display};
use core::ops::Index;

use crate::types::alloc_type::Vec;
use crate::types::error::Error;
use crate::types::metadata::Metadata;
use crate::types::ErrorVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

/// Returned when a non-empty error list is requested from an empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyErrors;

impl Display for EmptyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an error list must contain at least one error")
    }
}

impl core::error::Error for EmptyErrors {}

/// One or more [`Error`]s in insertion order.
///
/// The type has no empty state: every constructor either receives a first
/// error or checks its input. [`Errors::first`] therefore never fails.
///
/// # Examples
///
/// ```
/// use error_or::{Error, Errors};
///
/// let errors = Errors::new(Error::validation("Name.Empty", "name is required"))
///     .with(Error::validation("Age.Negative", "age must be positive"));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().code(), "Name.Empty");
///
/// assert!(Errors::try_from_iter(Vec::<Error>::new()).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize), serde(try_from = "Vec<Error>"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Errors {
    items: ErrorVec<Error>,
}

#[allow(clippy::len_without_is_empty)]
impl Errors {
    /// Creates a list holding a single error.
    #[inline]
    pub fn new(first: Error) -> Self {
        let mut items = ErrorVec::new();
        items.push(first);
        Self { items }
    }

    /// Collects `errors`, rejecting an empty input.
    pub fn try_from_iter<I>(errors: I) -> Result<Self, EmptyErrors>
    where
        I: IntoIterator<Item = Error>,
    {
        let items: ErrorVec<Error> = errors.into_iter().collect();
        if items.is_empty() {
            return Err(EmptyErrors);
        }
        Ok(Self { items })
    }

    /// Wraps storage the caller has already proven non-empty.
    #[inline]
    pub(crate) fn from_non_empty(items: ErrorVec<Error>) -> Self {
        debug_assert!(!items.is_empty(), "Errors constructed from an empty list");
        Self { items }
    }

    /// Returns the list with `error` appended.
    #[inline]
    pub fn with(mut self, error: Error) -> Self {
        self.items.push(error);
        self
    }

    /// Returns the list with every error from `errors` appended, in order.
    #[inline]
    pub fn with_all<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        self.items.extend(errors);
        self
    }

    /// The error at index 0.
    #[inline]
    pub fn first(&self) -> &Error {
        &self.items[0]
    }

    /// The most recently appended error.
    #[inline]
    pub fn last(&self) -> &Error {
        &self.items[self.items.len() - 1]
    }

    /// Always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Error> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.items
    }

    /// Consumes the list and returns the first error.
    pub fn into_first(self) -> Error {
        self.items
            .into_iter()
            .next()
            .expect("Errors must contain at least one error")
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Error> {
        self.items.into_vec()
    }

    /// Returns a list in which every error carries `metadata`.
    ///
    /// Existing metadata is overwritten. The errors in `self` are untouched.
    pub fn with_metadata(&self, metadata: &Metadata) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|error| error.with_metadata(metadata.clone()))
                .collect(),
        }
    }

    /// Consuming form of [`Errors::with_metadata`].
    pub fn into_with_metadata(self, metadata: &Metadata) -> Self {
        Self {
            items: self
                .items
                .into_iter()
                .map(|error| error.into_with_metadata(metadata.clone()))
                .collect(),
        }
    }
}

impl Index<usize> for Errors {
    type Output = Error;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl From<Error> for Errors {
    #[inline]
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

impl TryFrom<Vec<Error>> for Errors {
    type Error = EmptyErrors;

    #[inline]
    fn try_from(errors: Vec<Error>) -> Result<Self, Self::Error> {
        Self::try_from_iter(errors)
    }
}

impl From<Errors> for Vec<Error> {
    #[inline]
    fn from(errors: Errors) -> Self {
        errors.into_vec()
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.as_slice().serialize(serializer)
    }
}
