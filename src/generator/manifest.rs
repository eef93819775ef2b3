//! Manifest Rewriter
//!
//! Produces `fake_<name>.sln`: the original solution text, re-rooted at
//! the output folder. The Web Site entry becomes a plain C# project entry
//! pointing at the generated descriptor; every other entry keeps its text
//! and only has its path rewritten so it still resolves from the new
//! location. Everything outside project entries is copied verbatim.

use std::path::Path;

use crate::domain::entities::{ProjectBlock, WebsiteProject};
use crate::domain::value_objects::{win_path, ProjectType};
use crate::parser::split_projects;

/// Line ending used by the solution: CRLF if it contains one anywhere
pub fn detect_eol(content: &str) -> &'static str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Rewrite `content` (the solution read from `sln_dir`) for a copy living
/// in `out_dir`
///
/// `descriptor_path` is the absolute path of the generated project file
/// that replaces the Web Site entry.
pub fn rewrite_manifest(
    content: &str,
    sln_dir: &Path,
    out_dir: &Path,
    website: &WebsiteProject,
    descriptor_path: &Path,
) -> String {
    let eol = detect_eol(content);
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;

    for block in split_projects(content) {
        if block.has_guid(&website.guid) {
            out.push_str(&content[cursor..block.span.start]);
            let rel = win_path::relative_backslashes(out_dir, descriptor_path);
            out.push_str(&website_entry(&block, &rel, eol));
            cursor = block.span.end;
        } else {
            out.push_str(&content[cursor..block.path_span.start]);
            out.push_str(&rebase_path(&block.rel_path, sln_dir, out_dir));
            cursor = block.path_span.end;
        }
    }
    out.push_str(&content[cursor..]);
    out
}

fn website_entry(block: &ProjectBlock, rel: &str, eol: &str) -> String {
    format!(
        "Project(\"{{{}}}\") = \"{}\", \"{}\", \"{{{}}}\"{}EndProject",
        ProjectType::CSharpLegacy.type_guid(),
        block.name,
        rel,
        block.guid,
        eol
    )
}

/// Re-express a solution-relative path relative to `out_dir`
///
/// Absolute paths and URLs (IIS-hosted sites) are returned unchanged.
fn rebase_path(rel_path: &str, sln_dir: &Path, out_dir: &Path) -> String {
    if rel_path.is_empty() || win_path::is_url_like(rel_path) || win_path::is_absolute(rel_path) {
        return rel_path.to_string();
    }
    let abs = sln_dir.join(win_path::to_native(rel_path));
    win_path::relative_backslashes(out_dir, &abs)
}
