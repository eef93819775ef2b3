//! Typed entities from scanned blocks

use crate::domain::entities::{LibraryProject, ProjectBlock, WebsiteProject};
use crate::domain::value_objects::{win_path, ProjectType, TargetFramework};

use super::properties::WebsiteProperties;
use super::references::parse_project_references;

/// Web Site entries, in solution order
///
/// The physical path comes from the Debug compiler setting, then the
/// Release one, then the entry's declared path, with trailing separators
/// removed.
pub fn parse_websites(blocks: &[ProjectBlock]) -> Vec<WebsiteProject> {
    blocks
        .iter()
        .filter(|b| b.project_type() == Some(ProjectType::Website))
        .map(|b| {
            let props = WebsiteProperties::from_block(&b.raw);
            let physical_path = props.physical_path().unwrap_or(&b.rel_path);

            WebsiteProject {
                name: b.name.clone(),
                guid: b.guid.clone(),
                physical_path: win_path::trim_trailing_separators(physical_path).to_string(),
                target_framework: TargetFramework::normalize(props.framework().unwrap_or("")),
                references: parse_project_references(props.project_references.as_deref()),
            }
        })
        .collect()
}

/// C# library entries (legacy and SDK style), in solution order
pub fn parse_csharp_projects(blocks: &[ProjectBlock]) -> Vec<LibraryProject> {
    blocks
        .iter()
        .filter(|b| b.project_type().is_some_and(|t| t.is_library()))
        .map(|b| LibraryProject {
            guid: b.guid.clone(),
            name: b.name.clone(),
            rel_path: b.rel_path.clone(),
        })
        .collect()
}
