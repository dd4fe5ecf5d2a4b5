use super::core::ErrorOr;
use crate::types::{Error, ErrorVec, Errors};

/// Collects results, keeping every error in encounter order.
///
/// Values are gathered into `C` only until the first error; later values are
/// dropped without being collected.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorOr};
///
/// let all_ok: ErrorOr<Vec<i32>> = vec![ErrorOr::from_value(1), ErrorOr::from_value(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all_ok.into_value(), Some(vec![1, 2]));
///
/// let mixed: ErrorOr<Vec<i32>> = vec![
///     ErrorOr::from_value(1),
///     ErrorOr::from_error(Error::validation("A", "a")),
///     ErrorOr::from_error(Error::validation("B", "b")),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(mixed.errors().len(), 2);
/// ```
impl<T, C> FromIterator<ErrorOr<T>> for ErrorOr<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = ErrorOr<T>>>(iter: I) -> Self {
        let mut errors: ErrorVec<Error> = ErrorVec::new();
        let values: C = iter
            .into_iter()
            .filter_map(|item| match item {
                ErrorOr::Value(value) if errors.is_empty() => Some(value),
                ErrorOr::Value(_) => None,
                ErrorOr::Errors(item_errors) => {
                    errors.extend(item_errors);
                    None
                },
            })
            .collect();

        if errors.is_empty() {
            ErrorOr::Value(values)
        } else {
            ErrorOr::Errors(Errors::from_non_empty(errors))
        }
    }
}

impl<T> IntoIterator for ErrorOr<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    /// Yields the value once, or nothing in the error state.
    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}
