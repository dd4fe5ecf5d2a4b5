use std::cell::Cell;

use error_or::{Error, ErrorOr};

fn missing() -> ErrorOr<u32> {
    ErrorOr::from_error(Error::not_found("Cache.Miss", "not cached"))
}

#[test]
fn or_else_recovers_from_errors() {
    let recovered = missing().or_else(|errors| {
        assert_eq!(errors.first().code(), "Cache.Miss");
        ErrorOr::from_value(10)
    });
    assert_eq!(recovered.into_value(), Some(10));
}

#[test]
fn or_else_can_replace_errors() {
    let replaced =
        missing().or_else(|_| ErrorOr::from_error(Error::unexpected("Db.Down", "database down")));
    assert_eq!(replaced.first_error().code(), "Db.Down");
    assert_eq!(replaced.errors().len(), 1);
}

#[test]
fn or_else_skips_success() {
    let called = Cell::new(false);
    let result = ErrorOr::from_value(1u32).or_else(|_| {
        called.set(true);
        ErrorOr::from_value(2)
    });
    assert!(!called.get());
    assert_eq!(result.into_value(), Some(1));
}

#[test]
fn recover_and_or_value_always_succeed() {
    assert_eq!(missing().recover(|errors| errors.len() as u32).into_value(), Some(1));
    assert_eq!(missing().or_value(0).into_value(), Some(0));
    assert_eq!(ErrorOr::from_value(5u32).or_value(0).into_value(), Some(5));
}

#[test]
fn else_do_runs_only_on_error() {
    let count = Cell::new(0);
    let failed = missing().else_do(|errors| count.set(count.get() + errors.len()));
    let ok = ErrorOr::from_value(1u32).else_do(|_| count.set(count.get() + 100));

    assert_eq!(count.get(), 1);
    assert_eq!(failed, missing());
    assert_eq!(ok.into_value(), Some(1));
}
