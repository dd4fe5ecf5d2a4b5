use error_or::traits::ErrorSource;
use error_or::{Error, ErrorOr, Metadata};

fn err(code: &'static str) -> Error {
    Error::validation(code, "bad")
}

#[test]
fn empty_others_returns_self() {
    let ok = ErrorOr::from_value(1);
    assert_eq!(ok.clone().append_errors(Vec::<ErrorOr<i32>>::new()), ok);

    let failed = ErrorOr::<i32>::from_error(err("E"));
    assert_eq!(failed.clone().append_errors(Vec::<ErrorOr<i32>>::new()), failed);
}

#[test]
fn absent_others_are_skipped() {
    let ok = ErrorOr::from_value(1);
    assert_eq!(ok.clone().append_errors([None::<ErrorOr<()>>]), ok);

    let failed = ErrorOr::<i32>::from_error(err("E"));
    assert_eq!(failed.clone().append_errors([None::<&ErrorOr<()>>]), failed);
}

#[test]
fn success_with_success_keeps_original_value() {
    let merged = ErrorOr::from_value("v").append_errors([ErrorOr::from_value("w")]);
    assert_eq!(merged.into_value(), Some("v"));
}

#[test]
fn success_with_one_failure_takes_its_errors() {
    let success1 = ErrorOr::from_value(1);
    let merged = success1.append_errors([ErrorOr::<i32>::from_error(err("V"))]);

    assert!(merged.is_error());
    assert_eq!(merged.errors().len(), 1);
    assert_eq!(merged.first_error(), &err("V"));
}

#[test]
fn errors_are_concatenated_in_argument_order() {
    let merged = ErrorOr::<i32>::from_error(err("e1")).append_errors([
        ErrorOr::<i32>::from_error(err("e2")),
        ErrorOr::from_value(5),
        ErrorOr::from_errors([err("e3"), err("e4")]),
    ]);

    let codes: Vec<_> = merged.errors().iter().map(Error::code).collect();
    assert_eq!(codes, ["e1", "e2", "e3", "e4"]);
}

#[test]
fn heterogeneous_sources_can_be_mixed() {
    let name: ErrorOr<String> = ErrorOr::from_error(err("Name"));
    let age: ErrorOr<u8> = ErrorOr::from_value(30);
    let email: ErrorOr<bool> = ErrorOr::from_error(err("Email"));
    let missing: Option<ErrorOr<()>> = None;
    let extra = err("Extra");

    let sources: [&dyn ErrorSource; 5] = [&name, &age, &missing, &email, &extra];
    let merged = ErrorOr::from_value(()).append_errors(sources);

    let codes: Vec<_> = merged.errors().iter().map(Error::code).collect();
    assert_eq!(codes, ["Name", "Email", "Extra"]);
}

#[test]
fn sources_are_not_consumed_when_borrowed() {
    let checks = vec![ErrorOr::<i32>::from_error(err("A")), ErrorOr::from_value(2)];
    let merged = ErrorOr::from_value(0).append_errors(&checks);

    assert_eq!(merged.errors().len(), 1);
    assert_eq!(checks.len(), 2);
}

#[test]
fn metadata_variant_rewrites_every_combined_error() {
    let meta = Metadata::new().with("form", "signup");
    let merged = ErrorOr::<i32>::from_error(err("A"))
        .append_errors_with_metadata([ErrorOr::<()>::from_error(err("B"))], meta.clone());

    assert_eq!(merged.errors().len(), 2);
    assert!(merged.errors().iter().all(|e| e.metadata() == Some(&meta)));
}

#[test]
fn metadata_variant_keeps_success_untouched() {
    let merged = ErrorOr::from_value(1)
        .append_errors_with_metadata([ErrorOr::from_value(2)], Metadata::new().with("k", 1));
    assert_eq!(merged, ErrorOr::from_value(1));
}
