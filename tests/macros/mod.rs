use error_or::{errors, metadata, Error, ErrorOr, MetadataValue};

#[test]
fn errors_macro_keeps_order_and_allows_trailing_comma() {
    let list = errors![
        Error::validation("A", "a"),
        Error::validation("B", "b"),
        Error::validation("C", "c"),
    ];
    let codes: Vec<_> = list.iter().map(Error::code).collect();
    assert_eq!(codes, ["A", "B", "C"]);

    let single = errors![Error::failure("Only", "only")];
    assert_eq!(single.len(), 1);
}

#[test]
fn metadata_macro_builds_maps() {
    let meta = metadata! {
        "user_id" => 7,
        "roles" => vec!["admin", "ops"],
        "user_id" => 8,
    };

    assert_eq!(meta.len(), 2);
    assert_eq!(meta.get("user_id").and_then(MetadataValue::as_i64), Some(8));
    assert_eq!(
        meta.get("roles"),
        Some(&MetadataValue::List(vec!["admin".into(), "ops".into()]))
    );
    assert!(metadata! {}.is_empty());
}

#[test]
fn macros_compose_with_error_or() {
    let result: ErrorOr<()> = ErrorOr::Errors(errors![Error::forbidden("Denied", "denied")])
        .with_error_metadata(metadata! { "resource" => "invoice" });

    let meta = result.first_error().metadata().cloned().unwrap_or_default();
    assert_eq!(meta.get("resource").and_then(MetadataValue::as_str), Some("invoice"));
}
