use error_or::{Error, Metadata, MetadataValue};

#[test]
fn with_metadata_returns_new_error_and_keeps_original() {
    let original = Error::validation("Name.Empty", "name is required");
    let meta = Metadata::new().with("field", "name");

    let enriched = original.with_metadata(meta.clone());

    assert_eq!(enriched.kind(), original.kind());
    assert_eq!(enriched.code(), original.code());
    assert_eq!(enriched.description(), original.description());
    assert_eq!(enriched.metadata(), Some(&meta));
    assert!(original.metadata().is_none());
}

#[test]
fn with_metadata_overwrites_instead_of_merging() {
    let first = Metadata::new().with("a", 1).with("b", 2);
    let second = Metadata::new().with("c", 3);

    let err = Error::failure("F", "failed")
        .with_metadata(first)
        .with_metadata(second.clone());

    let meta = err.metadata().unwrap();
    assert_eq!(meta, &second);
    assert!(!meta.contains_key("a"));
    assert!(!meta.contains_key("b"));
}

#[test]
fn without_metadata_clears_the_map() {
    let err = Error::failure("F", "failed").with_metadata(Metadata::new().with("k", "v"));
    let cleared = err.without_metadata();

    assert!(cleared.metadata().is_none());
    assert!(err.metadata().is_some());
    assert_ne!(err, cleared);
}

#[test]
fn metadata_with_does_not_affect_other_clones() {
    let base = Metadata::new().with("user_id", 42);
    let shared = base.clone();
    assert!(base.ptr_eq(&shared));

    let extended = base.with("admin", true);

    assert_eq!(shared.len(), 1);
    assert!(!shared.contains_key("admin"));
    assert_eq!(extended.len(), 2);
    assert!(!extended.ptr_eq(&shared));
}

#[test]
fn metadata_without_removes_key() {
    let meta = Metadata::new().with("a", 1).with("b", 2).without("a");
    assert_eq!(meta.len(), 1);
    assert_eq!(meta.get("b"), Some(&MetadataValue::Int(2)));
}

#[test]
fn metadata_values_convert_from_common_types() {
    let meta: Metadata = [
        ("flag", MetadataValue::from(true)),
        ("count", MetadataValue::from(3u64)),
        ("delta", MetadataValue::from(-4i64)),
        ("ratio", MetadataValue::from(0.5)),
        ("name", MetadataValue::from("ada")),
        ("tags", MetadataValue::from(vec!["a", "b"])),
    ]
    .into_iter()
    .collect();

    assert_eq!(meta.get("flag").and_then(MetadataValue::as_bool), Some(true));
    assert_eq!(meta.get("count").and_then(MetadataValue::as_i64), Some(3));
    assert_eq!(meta.get("delta").and_then(MetadataValue::as_i64), Some(-4));
    assert_eq!(meta.get("ratio").and_then(MetadataValue::as_f64), Some(0.5));
    assert_eq!(meta.get("name").and_then(MetadataValue::as_str), Some("ada"));
    assert_eq!(
        meta.get("tags"),
        Some(&MetadataValue::List(vec![
            MetadataValue::Text("a".into()),
            MetadataValue::Text("b".into()),
        ]))
    );
}

#[test]
fn metadata_iterates_in_key_order() {
    let meta = Metadata::new().with("b", 2).with("a", 1).with("c", 3);
    let keys: Vec<_> = meta.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["a", "b", "c"]);
}
