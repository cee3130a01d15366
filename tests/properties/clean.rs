//! Property tests for clean.

use proptest::prelude::*;

use wheelwright::application::{CleanOptions, CleanUseCase};
use wheelwright::infrastructure::LocalFs;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_]{1,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after clean, no output directory remains and a second clean removes nothing.
    #[test]
    fn property_clean_is_idempotent(
        dist_files in proptest::collection::vec(segment(), 0..4),
        build_files in proptest::collection::vec(segment(), 0..4),
        egg_name in proptest::option::of(segment()),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for f in &dist_files {
            std::fs::create_dir_all(root.join("dist")).unwrap();
            std::fs::write(root.join("dist").join(f), "x").unwrap();
        }
        for f in &build_files {
            std::fs::create_dir_all(root.join("build/lib")).unwrap();
            std::fs::write(root.join("build/lib").join(f), "x").unwrap();
        }
        if let Some(name) = &egg_name {
            std::fs::create_dir_all(root.join(format!("{name}.egg-info"))).unwrap();
        }

        let use_case = CleanUseCase::new(LocalFs::new());
        let first = use_case.execute(root, &CleanOptions::new());
        prop_assert!(first.is_success());
        prop_assert!(!root.join("dist").exists());
        prop_assert!(!root.join("build").exists());

        let second = use_case.execute(root, &CleanOptions::new());
        prop_assert!(second.is_success());
        prop_assert!(second.removed.is_empty());
    }
}
