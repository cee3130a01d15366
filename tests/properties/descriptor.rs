//! Property tests for metadata resolution.

use proptest::prelude::*;

use wheelwright::{resolve, PackageDescriptor, WheelwrightError};

/// Values as they appear after `name = ` (no line breaks)
fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._+-][A-Za-z0-9._+ -]{0,31}").unwrap()
}

/// Lines that can never match either key
fn filler_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[#\\[ a-z_=.0-9-]{0,40}")
        .unwrap()
        .prop_filter("must not look like a field", |s| {
            !s.starts_with("name = ") && !s.starts_with("version = ")
        })
}

fn document() -> impl Strategy<Value = (String, String, String)> {
    (
        value(),
        value(),
        proptest::collection::vec(filler_line(), 0..6),
        any::<bool>(),
    )
        .prop_map(|(name, version, filler, version_first)| {
            let mut lines = filler;
            let (first, second) = if version_first {
                (format!("version = {version}"), format!("name = {name}"))
            } else {
                (format!("name = {name}"), format!("version = {version}"))
            };
            let mid = lines.len() / 2;
            lines.insert(mid, first);
            lines.push(second);
            (lines.join("\n"), name, version)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolve never panics, whatever the input.
    #[test]
    fn property_resolve_never_panics(s in "(?s).{0,512}") {
        let _ = resolve(&s);
    }

    /// PROPERTY: the artifact path is derived from the name and version alone.
    #[test]
    fn property_artifact_path_formula((text, name, version) in document()) {
        let d = resolve(&text).unwrap();
        prop_assert_eq!(&d.raw_name, &name);
        prop_assert_eq!(&d.version, &version);
        prop_assert_eq!(
            d.artifact_path,
            format!("dist/{}-{}-py3-none-any.whl", name.replace('-', "_"), version)
        );
    }

    /// PROPERTY: resolving the same text twice gives the same descriptor.
    #[test]
    fn property_resolve_is_idempotent((text, _, _) in document()) {
        prop_assert_eq!(resolve(&text).unwrap(), resolve(&text).unwrap());
    }

    /// PROPERTY: the normalized name never contains a hyphen.
    #[test]
    fn property_normalized_name_has_no_hyphen(name in value(), version in value()) {
        let d = PackageDescriptor::new(name.clone(), version);
        prop_assert!(!d.normalized_name.contains('-'));
        prop_assert_eq!(d.normalized_name.len(), name.len());
    }

    /// PROPERTY: later duplicates never override the first occurrence.
    #[test]
    fn property_first_match_wins(
        (text, name, version) in document(),
        other_name in value(),
        other_version in value(),
    ) {
        let text = format!("{text}\nname = {other_name}\nversion = {other_version}\n");
        let d = resolve(&text).unwrap();
        prop_assert_eq!(d.raw_name, name);
        prop_assert_eq!(d.version, version);
    }

    /// PROPERTY: without a version line, resolution fails on the version.
    #[test]
    fn property_missing_version_is_reported(
        name in value(),
        filler in proptest::collection::vec(filler_line(), 0..6),
    ) {
        let text = format!("name = {name}\n{}", filler.join("\n"));
        let err = resolve(&text).unwrap_err();
        let is_missing_version = matches!(err, WheelwrightError::MissingField { field: "version", .. });
        prop_assert!(is_missing_version);
    }
}
