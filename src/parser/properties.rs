//! Web Site property section decoder
//!
//! Web Site entries carry their settings in a nested section:
//!
//! ```text
//! ProjectSection(WebsiteProperties) = preProject
//!     TargetFramework = "4.0"
//!     ProjectReferences = "{GUID}|Core.dll;"
//!     Debug.AspNetCompiler.PhysicalPath = "Shop\"
//! EndProjectSection
//! ```
//!
//! Only a closed set of keys is consumed, so they decode into fixed fields.

const SECTION_OPEN: &str = "ProjectSection(WebsiteProperties)";
const SECTION_CLOSE: &str = "EndProjectSection";

/// The Web Site properties sln2csproj reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteProperties {
    pub target_framework: Option<String>,
    pub target_framework_version: Option<String>,
    pub debug_physical_path: Option<String>,
    pub release_physical_path: Option<String>,
    pub project_references: Option<String>,
}

impl WebsiteProperties {
    /// Decode the `WebsiteProperties` section of a block; missing section
    /// means every field is `None`
    pub fn from_block(raw_block: &str) -> Self {
        let mut props = Self::default();
        let Some(body) = section_body(raw_block) else {
            return props;
        };

        for line in body.lines() {
            if let Some((key, value)) = parse_property_line(line) {
                props.set(key, value);
            }
        }
        props
    }

    fn set(&mut self, key: &str, value: &str) {
        let slot = match key {
            "TargetFramework" => &mut self.target_framework,
            "TargetFrameworkVersion" => &mut self.target_framework_version,
            "Debug.AspNetCompiler.PhysicalPath" => &mut self.debug_physical_path,
            "Release.AspNetCompiler.PhysicalPath" => &mut self.release_physical_path,
            "ProjectReferences" => &mut self.project_references,
            _ => return,
        };
        *slot = Some(value.to_string());
    }

    /// Framework value by priority; empty strings count as absent
    pub fn framework(&self) -> Option<&str> {
        non_empty(&self.target_framework).or_else(|| non_empty(&self.target_framework_version))
    }

    /// Physical path by priority (Debug, then Release); empty counts as absent
    pub fn physical_path(&self) -> Option<&str> {
        non_empty(&self.debug_physical_path).or_else(|| non_empty(&self.release_physical_path))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Text between the first well-formed
/// `ProjectSection(WebsiteProperties) = preProject` header and the next
/// `EndProjectSection`
fn section_body(raw_block: &str) -> Option<&str> {
    raw_block.match_indices(SECTION_OPEN).find_map(|(open, _)| {
        let rest = raw_block[open + SECTION_OPEN.len()..].trim_start();
        let rest = rest.strip_prefix('=')?.trim_start();
        let body = rest.strip_prefix("preProject")?;
        let close = body.find(SECTION_CLOSE)?;
        Some(&body[..close])
    })
}

/// `KEY = "VALUE"` where KEY is `[A-Za-z0-9.\-_]+` and VALUE has no quotes
fn parse_property_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    let key_len = line
        .bytes()
        .take_while(|&b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'))
        .count();
    if key_len == 0 {
        return None;
    }
    let (key, rest) = line.split_at(key_len);

    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let rest = rest.strip_prefix('"')?;
    let close = rest.find('"')?;
    let (value, tail) = rest.split_at(close);

    if !tail[1..].trim().is_empty() {
        return None;
    }
    Some((key, value))
}
