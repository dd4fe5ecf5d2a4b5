use error_or::{outcome, Created, Deleted, Error, ErrorKind, Success, Updated};

pub mod metadata;

#[test]
fn per_kind_constructors_set_kind_code_and_description() {
    let cases = [
        (Error::failure("F", "f"), ErrorKind::Failure),
        (Error::unexpected("U", "u"), ErrorKind::Unexpected),
        (Error::validation("V", "v"), ErrorKind::Validation),
        (Error::conflict("C", "c"), ErrorKind::Conflict),
        (Error::not_found("N", "n"), ErrorKind::NotFound),
        (Error::unauthorized("A", "a"), ErrorKind::Unauthorized),
        (Error::forbidden("X", "x"), ErrorKind::Forbidden),
    ];

    for (error, kind) in cases {
        assert_eq!(error.kind(), kind);
        assert!(error.metadata().is_none());
    }

    let err = Error::not_found("User.NotFound", "user was not found");
    assert_eq!(err.code(), "User.NotFound");
    assert_eq!(err.description(), "user was not found");
}

#[test]
fn errors_compare_structurally() {
    assert_eq!(Error::validation("E1", "bad"), Error::validation("E1", "bad"));
    assert_ne!(Error::validation("E1", "bad"), Error::conflict("E1", "bad"));
    assert_ne!(Error::validation("E1", "bad"), Error::validation("E2", "bad"));
    assert_ne!(Error::validation("E1", "bad"), Error::validation("E1", "worse"));
}

#[test]
fn owned_and_static_strings_are_equal() {
    let code = String::from("Order.Missing");
    assert_eq!(Error::not_found(code, "gone"), Error::not_found("Order.Missing", "gone"));
}

#[test]
fn of_kind_uses_default_code_and_description() {
    let err = Error::of_kind(ErrorKind::NotFound);
    assert_eq!(err.code(), "General.NotFound");
    assert_eq!(err.description(), "A 'Not Found' error has occurred.");

    let err = Error::of_kind(ErrorKind::Failure);
    assert_eq!(err.code(), "General.Failure");
    assert_eq!(err.description(), "A failure has occurred.");
}

#[test]
fn custom_kind_normalises_builtin_numbers() {
    assert_eq!(Error::custom(3, "C", "c").kind(), ErrorKind::Conflict);
    assert_eq!(Error::custom(99, "C", "c").kind(), ErrorKind::Custom(99));
    assert_eq!(Error::custom(99, "C", "c").numeric_kind(), 99);
    assert!(ErrorKind::Custom(99).is_custom());
    assert!(!ErrorKind::Forbidden.is_custom());
}

#[test]
fn hand_built_custom_kind_matches_builtin_with_same_number() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(kind: ErrorKind) -> u64 {
        let mut hasher = DefaultHasher::new();
        kind.hash(&mut hasher);
        hasher.finish()
    }

    assert_eq!(ErrorKind::Custom(3), ErrorKind::Conflict);
    assert_eq!(hash_of(ErrorKind::Custom(3)), hash_of(ErrorKind::Conflict));
    assert!(!ErrorKind::Custom(3).is_custom());
    assert_eq!(ErrorKind::Custom(3).to_string(), "Conflict");
    assert_eq!(ErrorKind::Custom(3).default_code(), "General.Conflict");
    assert!(ErrorKind::Validation < ErrorKind::Custom(7));

    let direct = Error::new(ErrorKind::Custom(3), "C", "d");
    assert_eq!(direct, Error::custom(3, "C", "d"));
    assert_eq!(direct.kind(), ErrorKind::Conflict);
    assert_ne!(ErrorKind::Custom(7), ErrorKind::Custom(8));
}

#[test]
fn numeric_kind_round_trips_for_builtin_kinds() {
    for number in 0..=6u32 {
        let kind = ErrorKind::from_numeric(number);
        assert!(!kind.is_custom());
        assert_eq!(u32::from(kind), number);
    }
}

#[test]
fn display_shows_code_and_description() {
    let err = Error::conflict("User.Exists", "email already registered");
    assert_eq!(err.to_string(), "User.Exists: email already registered");
    assert_eq!(ErrorKind::NotFound.to_string(), "NotFound");
    assert_eq!(ErrorKind::Custom(12).to_string(), "Custom(12)");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<Error>();
}

#[test]
fn marker_types_are_structurally_equal() {
    assert_eq!(Success, outcome::success());
    assert_eq!(Created, outcome::created());
    assert_eq!(Deleted, outcome::deleted());
    assert_eq!(Updated, outcome::updated());
    assert_eq!(core::mem::size_of::<Created>(), 0);
}
