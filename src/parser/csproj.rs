//! Library project (`.csproj`) metadata reader
//!
//! Reads just enough of a library's project file to predict where its
//! build output lands: the assembly name and the `OutputPath` of the
//! `Debug|AnyCPU` and `Release|AnyCPU` configurations. Element and
//! attribute names are matched case-insensitively, like MSBuild does.
//! Parsing goes through `roxmltree`, so entities are decoded and comments
//! are skipped.

/// Build metadata extracted from a library project file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryDescriptor {
    /// `<AssemblyName>`, trimmed, when non-empty
    pub assembly_name: Option<String>,
    /// `<OutputPath>` of the `Debug|AnyCPU` property group
    pub debug_output_path: Option<String>,
    /// `<OutputPath>` of the `Release|AnyCPU` property group
    pub release_output_path: Option<String>,
}

/// Build configuration whose output directory is probed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildConfiguration {
    Debug,
    Release,
}

impl BuildConfiguration {
    fn condition_marker(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "debug|anycpu",
            BuildConfiguration::Release => "release|anycpu",
        }
    }
}

impl LibraryDescriptor {
    /// Read build metadata from project file XML
    ///
    /// Fails only when the text is not well-formed XML.
    pub fn parse(xml: &str) -> Result<Self, roxmltree::Error> {
        let doc = roxmltree::Document::parse(xml.trim_start_matches('\u{feff}'))?;
        let root = doc.root_element();

        Ok(Self {
            assembly_name: root
                .descendants()
                .filter(|n| is_element(n, "AssemblyName"))
                .find_map(|n| trimmed_text(&n)),
            debug_output_path: output_path(&root, BuildConfiguration::Debug),
            release_output_path: output_path(&root, BuildConfiguration::Release),
        })
    }

    pub fn output_path(&self, config: BuildConfiguration) -> Option<&str> {
        match config {
            BuildConfiguration::Debug => self.debug_output_path.as_deref(),
            BuildConfiguration::Release => self.release_output_path.as_deref(),
        }
    }

    /// Binary name implied by `AssemblyName`
    pub fn assembly_file_name(&self) -> Option<String> {
        self.assembly_name.as_ref().map(|name| format!("{}.dll", name))
    }
}

fn is_element(node: &roxmltree::Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name().eq_ignore_ascii_case(name)
}

fn trimmed_text(node: &roxmltree::Node) -> Option<String> {
    let text = node.text()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// `OutputPath` child of the first `PropertyGroup` whose `Condition`
/// mentions `<config>|AnyCPU`
fn output_path(root: &roxmltree::Node, config: BuildConfiguration) -> Option<String> {
    root.descendants()
        .filter(|n| is_element(n, "PropertyGroup"))
        .filter(|group| {
            condition(group).is_some_and(|cond| {
                cond.to_ascii_lowercase()
                    .contains(config.condition_marker())
            })
        })
        .find_map(|group| {
            group
                .children()
                .filter(|n| is_element(n, "OutputPath"))
                .find_map(|n| trimmed_text(&n))
        })
}

fn condition<'a>(node: &roxmltree::Node<'a, '_>) -> Option<&'a str> {
    node.attributes()
        .find(|attr| attr.name().eq_ignore_ascii_case("Condition"))
        .map(|attr| attr.value())
}
