//! Property tests for lexical path helpers.

use std::path::PathBuf;

use proptest::prelude::*;

use sambundle::domain::value_objects::{normalize_path, relative_path};

fn absolute_path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec("[a-z]{1,6}", 0..5).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        path.extend(parts);
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Joining a relative path back onto its base lands on the target.
    #[test]
    fn property_relative_path_round_trips(base in absolute_path(), target in absolute_path()) {
        let relative = relative_path(&base, &target);

        prop_assert!(relative.is_relative());
        prop_assert_eq!(normalize_path(&base.join(&relative)), normalize_path(&target));
    }

    /// PROPERTY: Normalizing is idempotent.
    #[test]
    fn property_normalize_is_idempotent(parts in proptest::collection::vec("([a-z]{1,4}|\\.|\\.\\.)", 0..8)) {
        let path: PathBuf = parts.iter().collect();
        let once = normalize_path(&path);

        prop_assert_eq!(normalize_path(&once), once);
    }
}
