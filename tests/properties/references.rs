//! Property tests for the `ProjectReferences` decoder.

use proptest::prelude::*;

use sln2csproj::parser::parse_project_references;

fn guid() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}")
        .unwrap()
}

fn dll() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9.]{0,16}\\.dll").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Decoding arbitrary text never panics.
    #[test]
    fn property_references_never_panic(value in "\\PC{0,200}") {
        let _ = parse_project_references(Some(&value));
    }

    /// PROPERTY: Encoded pairs decode back in declaration order, with
    /// braces stripped.
    #[test]
    fn property_references_keep_order(
        pairs in proptest::collection::vec((guid(), dll()), 0..8),
        trailing in any::<bool>(),
    ) {
        let mut value = pairs
            .iter()
            .map(|(g, d)| format!("{{{}}}|{}", g, d))
            .collect::<Vec<_>>()
            .join(";");
        if trailing {
            value.push(';');
        }

        let refs = parse_project_references(Some(&value));

        prop_assert_eq!(refs.len(), pairs.len());
        for (r, (g, d)) in refs.iter().zip(&pairs) {
            prop_assert_eq!(&r.target_guid, g);
            prop_assert_eq!(&r.dll_name, d);
        }
    }
}
