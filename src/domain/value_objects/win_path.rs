//! Windows-style path helpers
//!
//! Solution and project files always spell paths with backslashes, while
//! the tool itself may run on any platform. Paths read from those files
//! are converted to native `PathBuf`s for probing, and paths written back
//! into generated files are rendered with backslashes.
//!
//! All operations here are lexical; nothing touches the disk.

use std::path::{Component, Path, PathBuf};

/// Convert a path read from a solution/project file into a native path
///
/// Both `\` and `/` are treated as separators. A leading separator keeps
/// the path rooted.
pub fn to_native(raw: &str) -> PathBuf {
    let mut path = PathBuf::new();
    if raw.starts_with('/') || raw.starts_with('\\') {
        path.push(std::path::MAIN_SEPARATOR_STR);
    }
    for segment in raw.split(['\\', '/']).filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path
}

/// Resolve `.` and `..` components without consulting the file system
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path from `from` (a directory) to `to`; empty when they are the same
pub fn relative(from: &Path, to: &Path) -> PathBuf {
    let from = normalize(from);
    let to = normalize(to);
    let from_parts: Vec<Component> = from.components().collect();
    let to_parts: Vec<Component> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..from_parts.len() {
        out.push("..");
    }
    for component in &to_parts[common..] {
        out.push(component.as_os_str());
    }
    out
}

/// Render a path with backslash separators; an empty path renders as `.`
pub fn to_backslashes(path: &Path) -> String {
    let s = path.to_string_lossy().replace('/', "\\");
    if s.is_empty() {
        ".".to_string()
    } else {
        s
    }
}

/// `relative(from, to)` rendered with backslashes
pub fn relative_backslashes(from: &Path, to: &Path) -> String {
    to_backslashes(&relative(from, to))
}

/// Join segments onto a backslash prefix; a `.` or empty prefix is dropped
pub fn join(prefix: &str, parts: &[&str]) -> String {
    let prefix = prefix.replace('/', "\\");
    let prefix = prefix.trim_end_matches('\\');

    let mut segments: Vec<&str> = Vec::with_capacity(parts.len() + 1);
    if !prefix.is_empty() && prefix != "." {
        segments.push(prefix);
    }
    segments.extend_from_slice(parts);
    segments.join("\\")
}

/// Rooted (`\x`, `/x`) or drive-qualified (`C:\x`) path
pub fn is_absolute(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if raw.starts_with('/') || raw.starts_with('\\') {
        return true;
    }
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Web Site entries may point at IIS URLs instead of folders
pub fn is_url_like(raw: &str) -> bool {
    raw.contains("://")
}

/// Strip every trailing `\` and `/`
pub fn trim_trailing_separators(raw: &str) -> &str {
    raw.trim_end_matches(['\\', '/'])
}
