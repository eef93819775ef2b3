//! Target framework value object
//!
//! Web Site solutions record the framework in several shapes
//! (`v4.0`, `4.0`, `.NETFramework,Version=v4.5`, `net48`). Everything is
//! folded into the `vMAJOR.MINOR` tag that `TargetFrameworkVersion` expects.

use std::fmt;

/// Canonical `TargetFrameworkVersion` tag such as `v4.5`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetFramework(String);

impl TargetFramework {
    /// Tag used when the solution says nothing usable
    pub const DEFAULT: &'static str = "v3.5";

    /// Normalize a raw property value. Total: every input maps to a tag.
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_tag(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetFramework {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for TargetFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize_tag(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return TargetFramework::DEFAULT.to_string();
    }
    if s.starts_with('v') {
        return s.to_string();
    }
    if let Some(version) = version_marker(s) {
        return format!("v{}", version);
    }
    if decimal_prefix(s).is_some_and(|d| d.len() == s.len()) {
        return format!("v{}", s);
    }
    if let Some((major, minor)) = net_shorthand(s) {
        return format!("v{}.{}", major, minor);
    }
    TargetFramework::DEFAULT.to_string()
}

/// Find `Version = [v]N[.N]` anywhere in the value (keyword is case-insensitive)
fn version_marker(s: &str) -> Option<&str> {
    let lower = s.to_ascii_lowercase();
    for (idx, _) in lower.match_indices("version") {
        let rest = s[idx + "version".len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let rest = rest
            .strip_prefix('v')
            .or_else(|| rest.strip_prefix('V'))
            .unwrap_or(rest);
        if let Some(number) = decimal_prefix(rest) {
            return Some(number);
        }
    }
    None
}

/// Leading `\d+(\.\d+)?` of `s`, if any
fn decimal_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if int_len == 0 {
        return None;
    }
    let frac_len = match bytes.get(int_len) {
        Some(b'.') => bytes[int_len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count(),
        _ => 0,
    };
    let end = if frac_len > 0 {
        int_len + 1 + frac_len
    } else {
        int_len
    };
    Some(&s[..end])
}

/// `net48` style shorthand, exactly two digits
fn net_shorthand(s: &str) -> Option<(char, char)> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || !bytes[..3].eq_ignore_ascii_case(b"net") {
        return None;
    }
    let (major, minor) = (bytes[3], bytes[4]);
    if major.is_ascii_digit() && minor.is_ascii_digit() {
        Some((major as char, minor as char))
    } else {
        None
    }
}
