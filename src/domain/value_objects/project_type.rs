//! Project type value object - classifies a solution entry by its type GUID

/// Kind of solution entry that sln2csproj knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    /// ASP.NET Web Site (folder based, no project file)
    Website,
    /// Classic C# project (`.csproj` with explicit file lists)
    CSharpLegacy,
    /// SDK-style C# project
    CSharpSdk,
}

impl ProjectType {
    pub const WEBSITE_GUID: &'static str = "E24C65DC-7377-472B-9ABA-BC803B73C61A";
    pub const CSHARP_LEGACY_GUID: &'static str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";
    pub const CSHARP_SDK_GUID: &'static str = "9A19103F-16F7-4668-BE54-9A1E7A4F7556";

    /// Classify a type GUID (without braces). Hex digits compare case-insensitively.
    pub fn from_type_guid(guid: &str) -> Option<Self> {
        [Self::Website, Self::CSharpLegacy, Self::CSharpSdk]
            .into_iter()
            .find(|t| t.type_guid().eq_ignore_ascii_case(guid))
    }

    /// Canonical upper-case type GUID
    pub fn type_guid(&self) -> &'static str {
        match self {
            ProjectType::Website => Self::WEBSITE_GUID,
            ProjectType::CSharpLegacy => Self::CSHARP_LEGACY_GUID,
            ProjectType::CSharpSdk => Self::CSHARP_SDK_GUID,
        }
    }

    /// True for entries that compile to a class library
    pub fn is_library(&self) -> bool {
        matches!(self, ProjectType::CSharpLegacy | ProjectType::CSharpSdk)
    }
}
