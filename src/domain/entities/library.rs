//! LibraryProject entity - a C# class library listed in the solution

/// A legacy or SDK-style C# project entry. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryProject {
    /// Project GUID, without braces
    pub guid: String,
    pub name: String,
    /// Path to the `.csproj`, relative to the solution directory
    pub rel_path: String,
}
