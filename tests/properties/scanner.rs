//! Property tests for the solution block scanner.

use proptest::prelude::*;

use sln2csproj::split_projects;

fn guid() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}")
        .unwrap()
}

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._ ]{1,12}").unwrap()
}

fn rel_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.\\\\/]{1,24}").unwrap()
}

/// Filler between blocks; lowercase only, so it never forms a keyword
fn filler() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z #=\\t\\r\\n]{0,24}").unwrap()
}

fn entry() -> impl Strategy<Value = (String, String, String, String, bool)> {
    (guid(), name(), rel_path(), guid(), any::<bool>())
}

fn render(entry: &(String, String, String, String, bool)) -> String {
    let (type_guid, name, path, guid, with_section) = entry;
    let section = if *with_section {
        "\tProjectSection(WebsiteProperties) = preProject\n\tEndProjectSection\n"
    } else {
        ""
    };
    format!(
        "Project(\"{{{}}}\") = \"{}\", \"{}\", \"{{{}}}\"\n{}EndProject",
        type_guid, name, path, guid, section
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Scanning arbitrary text never panics, and every span is a
    /// valid slice of the input.
    #[test]
    fn property_scanner_spans_are_valid_slices(source in "\\PC{0,400}") {
        let blocks = split_projects(&source);

        let mut last_end = 0;
        for block in blocks {
            prop_assert!(block.span.start >= last_end);
            prop_assert_eq!(source.get(block.span.clone()), Some(block.raw.as_str()));
            prop_assert_eq!(source.get(block.path_span.clone()), Some(block.rel_path.as_str()));
            prop_assert!(block.span.start <= block.path_span.start);
            prop_assert!(block.path_span.end <= block.span.end);
            last_end = block.span.end;
        }
    }

    /// PROPERTY: Well-formed entries separated by filler are all found, in
    /// order, with their fields intact.
    #[test]
    fn property_scanner_finds_every_entry(
        entries in proptest::collection::vec(entry(), 0..6),
        fillers in proptest::collection::vec(filler(), 7),
    ) {
        let mut source = fillers[0].clone();
        for (i, e) in entries.iter().enumerate() {
            source.push('\n');
            source.push_str(&render(e));
            source.push('\n');
            source.push_str(&fillers[i + 1]);
        }

        let blocks = split_projects(&source);

        prop_assert_eq!(blocks.len(), entries.len());
        for (block, (type_guid, name, path, guid, _)) in blocks.iter().zip(&entries) {
            prop_assert_eq!(&block.type_guid, type_guid);
            prop_assert_eq!(&block.name, name);
            prop_assert_eq!(&block.rel_path, path);
            prop_assert_eq!(&block.guid, guid);
            prop_assert!(block.raw.ends_with("EndProject"));
        }
    }
}
