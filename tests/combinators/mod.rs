use error_or::{Error, ErrorOr, Errors};

pub mod append;
pub mod fallback;

#[derive(Debug, Clone, PartialEq)]
struct LegacyResult {
    payload: Option<String>,
    problems: Option<Vec<Error>>,
}

#[test]
fn from_value_is_success_holding_the_value() {
    for value in [0, 1, -7, i32::MAX] {
        let result = ErrorOr::from_value(value);
        assert!(result.is_value());
        assert!(!result.is_error());
        assert_eq!(*result.value(), value);
        assert_eq!(result.as_value(), Some(&value));
        assert!(result.as_errors().is_none());
    }
}

#[test]
fn from_errors_preserves_order_and_first_error() {
    let errors = vec![
        Error::validation("E1", "first"),
        Error::conflict("E2", "second"),
        Error::not_found("E3", "third"),
    ];

    let result = ErrorOr::<i32>::from_errors(errors.clone());

    assert!(result.is_error());
    assert_eq!(result.errors().as_slice(), errors.as_slice());
    assert_eq!(result.first_error(), &errors[0]);
    assert_eq!(result.errors_or_empty(), errors.as_slice());
}

#[test]
fn from_error_wraps_a_single_error() {
    let result = ErrorOr::<()>::from_error(Error::unexpected("U", "boom"));
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.first_error().code(), "U");
}

#[test]
#[should_panic(expected = "empty error list")]
fn from_errors_panics_on_empty_list() {
    let _ = ErrorOr::<i32>::from_errors(Vec::new());
}

#[test]
#[should_panic(expected = "error state")]
fn reading_value_in_error_state_panics() {
    let result = ErrorOr::<i32>::from_error(Error::failure("F", "failed"));
    let _ = result.value();
}

#[test]
#[should_panic(expected = "success state")]
fn reading_errors_in_success_state_panics() {
    let result = ErrorOr::from_value(1);
    let _ = result.errors();
}

#[test]
#[should_panic(expected = "success state")]
fn reading_first_error_in_success_state_panics() {
    let result = ErrorOr::from_value(1);
    let _ = result.first_error();
}

#[test]
fn errors_or_empty_is_empty_on_success() {
    assert!(ErrorOr::from_value("ok").errors_or_empty().is_empty());
}

#[test]
fn from_tuple_prefers_errors() {
    let both = ErrorOr::from_tuple(Some(1), Some(vec![Error::failure("F", "failed")]));
    assert!(both.is_error());

    let value_only = ErrorOr::from_tuple(Some(1), None);
    assert_eq!(value_only.into_value(), Some(1));

    let empty_errors = ErrorOr::from_tuple(Some(2), Some(Vec::new()));
    assert_eq!(empty_errors.into_value(), Some(2));

    let errors_only = ErrorOr::<i32>::from_tuple(None, Some(vec![Error::failure("F", "failed")]));
    assert_eq!(errors_only.first_error().code(), "F");
}

#[test]
#[should_panic(expected = "neither a value nor errors")]
fn from_tuple_panics_without_either_side() {
    let _ = ErrorOr::<i32>::from_tuple(None, None);
}

#[test]
fn from_custom_adapts_external_shapes() {
    let ok = LegacyResult { payload: Some("done".into()), problems: None };
    let adapted = ErrorOr::from_custom(ok, |r| r.payload.clone(), |r| r.problems.clone());
    assert_eq!(adapted.into_value().as_deref(), Some("done"));

    let failed = LegacyResult {
        payload: Some("ignored".into()),
        problems: Some(vec![Error::conflict("C", "conflict")]),
    };
    let adapted = ErrorOr::from_custom(failed, |r| r.payload.clone(), |r| r.problems.clone());
    assert_eq!(adapted.first_error().code(), "C");
}

#[test]
#[should_panic]
fn from_custom_panics_when_both_selectors_are_empty() {
    let empty = LegacyResult { payload: None, problems: None };
    let _ = ErrorOr::from_custom(empty, |r| r.payload.clone(), |r| r.problems.clone());
}

#[test]
fn into_result_keeps_all_errors() {
    let result = ErrorOr::<i32>::from_errors([Error::failure("A", "a"), Error::failure("B", "b")])
        .into_result();
    assert_eq!(result.unwrap_err().len(), 2);

    assert_eq!(ErrorOr::from_value(3).into_result(), Ok(3));
}

#[test]
fn with_error_metadata_leaves_success_alone() {
    let meta = error_or::Metadata::new().with("k", "v");
    let result = ErrorOr::from_value(9).with_error_metadata(meta);
    assert_eq!(result, ErrorOr::from_value(9));
}

#[test]
fn variants_can_be_matched_directly() {
    let result: ErrorOr<u8> = ErrorOr::Errors(Errors::new(Error::forbidden("X", "denied")));
    let label = match &result {
        ErrorOr::Value(_) => "value",
        ErrorOr::Errors(errors) if errors.len() == 1 => "single error",
        ErrorOr::Errors(_) => "many errors",
    };
    assert_eq!(label, "single error");
}

#[test]
fn collecting_accumulates_every_error() {
    let items = vec![
        ErrorOr::from_value(1),
        ErrorOr::from_error(Error::validation("A", "a")),
        ErrorOr::from_value(3),
        ErrorOr::from_errors([Error::validation("B", "b"), Error::validation("C", "c")]),
    ];

    let collected: ErrorOr<Vec<i32>> = items.into_iter().collect();
    let codes: Vec<_> = collected.errors().iter().map(|e| e.code().to_owned()).collect();
    assert_eq!(codes, ["A", "B", "C"]);

    let all_ok: ErrorOr<Vec<i32>> = (1..=3).map(ErrorOr::from_value).collect();
    assert_eq!(all_ok.into_value(), Some(vec![1, 2, 3]));
}

#[test]
fn collecting_stops_gathering_values_after_first_error() {
    use std::cell::Cell;

    thread_local! {
        static GATHERED: Cell<usize> = const { Cell::new(0) };
    }

    struct Counted;

    impl FromIterator<i32> for Counted {
        fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
            GATHERED.with(|gathered| gathered.set(iter.into_iter().count()));
            Counted
        }
    }

    let items = vec![
        ErrorOr::from_value(1),
        ErrorOr::from_value(2),
        ErrorOr::from_error(Error::validation("A", "a")),
        ErrorOr::from_value(3),
        ErrorOr::from_value(4),
        ErrorOr::from_error(Error::validation("B", "b")),
    ];

    let collected: ErrorOr<Counted> = items.into_iter().collect();
    assert_eq!(collected.errors().len(), 2);
    assert_eq!(GATHERED.with(Cell::get), 2);
}

#[test]
fn into_iter_yields_value_only_on_success() {
    assert_eq!(ErrorOr::from_value(4).into_iter().collect::<Vec<_>>(), vec![4]);
    let failed = ErrorOr::<i32>::from_error(Error::failure("F", "f"));
    assert_eq!(failed.into_iter().count(), 0);
}

#[test]
fn error_or_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ErrorOr<String>>();
}
