//! `ProjectReferences` decoder
//!
//! The property value is a `;`-separated list of `{GUID}|Binary.dll` pairs.

use crate::domain::entities::DependencyReference;

/// Decode a `ProjectReferences` value, keeping declaration order
///
/// Empty segments are skipped. A segment that does not split into exactly
/// two parts on `|` is dropped without complaint.
pub fn parse_project_references(value: Option<&str>) -> Vec<DependencyReference> {
    let Some(value) = value else {
        return Vec::new();
    };

    value
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let mut parts = segment.split('|');
            let guid = parts.next()?;
            let dll = parts.next()?;
            if parts.next().is_some() {
                return None;
            }
            let guid: String = guid.chars().filter(|c| !matches!(c, '{' | '}')).collect();
            Some(DependencyReference::new(guid.trim(), dll.trim()))
        })
        .collect()
}
