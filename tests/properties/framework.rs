//! Property tests for target framework normalization.

use proptest::prelude::*;

use sln2csproj::domain::value_objects::TargetFramework;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every input normalizes to a `v`-prefixed tag.
    #[test]
    fn property_normalize_is_total(raw in "\\PC{0,40}") {
        let tag = TargetFramework::normalize(&raw);

        prop_assert!(tag.as_str().starts_with('v'), "got {:?} for {:?}", tag.as_str(), raw);
    }

    /// PROPERTY: Normalizing a normalized tag changes nothing.
    #[test]
    fn property_normalize_is_idempotent(raw in "\\PC{0,40}") {
        let once = TargetFramework::normalize(&raw);
        let twice = TargetFramework::normalize(once.as_str());

        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Bare `major.minor` numbers gain a `v` prefix.
    #[test]
    fn property_bare_version_is_prefixed(major in 1u8..10, minor in 0u8..10) {
        let tag = TargetFramework::normalize(&format!("{}.{}", major, minor));

        prop_assert_eq!(tag.as_str(), format!("v{}.{}", major, minor));
    }
}
