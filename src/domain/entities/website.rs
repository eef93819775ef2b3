//! WebsiteProject entity - an ASP.NET Web Site entry and its references

use crate::domain::value_objects::TargetFramework;

/// A Web Site entry parsed from the solution
///
/// Web Sites have no project file; the folder *is* the project, and the
/// binaries it depends on are listed in the `ProjectReferences` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteProject {
    pub name: String,
    /// Project GUID, without braces
    pub guid: String,
    /// Site folder relative to the solution directory, no trailing separator
    pub physical_path: String,
    pub target_framework: TargetFramework,
    /// Declared references, in declaration order
    pub references: Vec<DependencyReference>,
}

/// One `{GUID}|Binary.dll` entry of a Web Site's `ProjectReferences`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReference {
    /// GUID of the library project that builds the binary, braces stripped
    pub target_guid: String,
    /// Binary file name, e.g. `Company.Core.dll`
    pub dll_name: String,
}

impl DependencyReference {
    pub fn new(target_guid: impl Into<String>, dll_name: impl Into<String>) -> Self {
        Self {
            target_guid: target_guid.into(),
            dll_name: dll_name.into(),
        }
    }

    /// Assembly name used as the `Reference Include`: the binary name
    /// without a trailing `.dll` (any case)
    pub fn assembly_name(&self) -> &str {
        let name = self.dll_name.as_str();
        match name.len().checked_sub(4) {
            Some(cut)
                if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".dll") =>
            {
                &name[..cut]
            }
            _ => name,
        }
    }
}
