//! ProjectBlock entity - one project entry cut out of a solution file

use std::ops::Range;

use crate::domain::value_objects::ProjectType;

/// A `Project("{TYPE}") = "NAME", "PATH", "{GUID}" ... EndProject` entry
///
/// Spans are byte offsets into the solution text the block was scanned
/// from, so the rewriter can splice replacements into that exact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBlock {
    /// Project type GUID, without braces, as written
    pub type_guid: String,
    /// Display name
    pub name: String,
    /// Declared path, relative to the solution directory
    pub rel_path: String,
    /// Project GUID, without braces, as written
    pub guid: String,
    /// Verbatim block text, `Project(` through `EndProject`
    pub raw: String,
    /// Where `raw` sits in the solution text
    pub span: Range<usize>,
    /// Where the declared path (inside the quotes) sits in the solution text
    pub path_span: Range<usize>,
}

impl ProjectBlock {
    /// Known project kind, if the type GUID is one we handle
    pub fn project_type(&self) -> Option<ProjectType> {
        ProjectType::from_type_guid(&self.type_guid)
    }

    /// Same project GUID, compared case-insensitively
    pub fn has_guid(&self, guid: &str) -> bool {
        self.guid.eq_ignore_ascii_case(guid)
    }
}
