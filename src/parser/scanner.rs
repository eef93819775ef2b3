//! Solution block scanner
//!
//! Cuts `Project("{TYPE}") = "NAME", "PATH", "{GUID}" ... EndProject`
//! entries out of solution text. This is a hand-written scanner rather than
//! a regex so that hostile input cannot trigger backtracking blowups, and so
//! that the exact byte span of every block and of its path token is kept for
//! the rewrite step.

use crate::domain::entities::ProjectBlock;

const HEADER_KEYWORD: &str = "Project(";
const TERMINATOR: &str = "EndProject";

/// Scan solution text for project blocks
///
/// Blocks are returned in source order and never overlap. Text that does not
/// form a complete block is skipped; no match at all yields an empty list.
pub fn split_projects(source: &str) -> Vec<ProjectBlock> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(found) = source[pos..].find(HEADER_KEYWORD) {
        let start = pos + found;

        if start > 0 && is_ident_byte(source.as_bytes()[start - 1]) {
            pos = start + 1;
            continue;
        }

        let Some(header) = parse_header(source, start) else {
            pos = start + 1;
            continue;
        };

        let Some(term) = find_terminator(source, header.end) else {
            // Nothing after this point can be closed either.
            break;
        };
        let end = term + TERMINATOR.len();

        blocks.push(ProjectBlock {
            type_guid: header.type_guid.to_string(),
            name: header.name.to_string(),
            rel_path: source[header.path_span.clone()].to_string(),
            guid: header.guid.to_string(),
            raw: source[start..end].to_string(),
            span: start..end,
            path_span: header.path_span,
        });
        pos = end;
    }

    blocks
}

struct Header<'a> {
    type_guid: &'a str,
    name: &'a str,
    path_span: std::ops::Range<usize>,
    guid: &'a str,
    end: usize,
}

/// Parse the header line starting at `start` (which points at `Project(`)
fn parse_header(source: &str, start: usize) -> Option<Header<'_>> {
    let mut cur = Cursor::new(source, start);

    cur.eat(HEADER_KEYWORD)?;
    cur.eat_opt("\"");
    cur.eat("{")?;
    let type_guid = cur.take_nonempty(is_guid_byte)?;
    cur.eat("}")?;
    cur.eat_opt("\"");
    cur.eat(")")?;
    cur.skip_ws();
    cur.eat("=")?;
    cur.skip_ws();

    let name = cur.quoted()?;
    cur.eat(",")?;
    cur.skip_ws();

    cur.eat("\"")?;
    let path_start = cur.pos;
    cur.take_nonempty(|b| b != b'"')?;
    let path_span = path_start..cur.pos;
    cur.eat("\"")?;
    cur.eat(",")?;
    cur.skip_ws();

    cur.eat("\"{")?;
    let guid = cur.take_nonempty(is_guid_byte)?;
    cur.eat("}\"")?;

    Some(Header {
        type_guid,
        name,
        path_span,
        guid,
        end: cur.pos,
    })
}

/// First `EndProject` at or after `from` that is a whole keyword
/// (`EndProjectSection` does not count)
fn find_terminator(source: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(found) = source[pos..].find(TERMINATOR) {
        let at = pos + found;
        let after = at + TERMINATOR.len();
        match source.as_bytes().get(after) {
            Some(&b) if is_ident_byte(b) => pos = after,
            _ => return Some(at),
        }
    }
    None
}

fn is_guid_byte(b: u8) -> bool {
    b.is_ascii_hexdigit() || b == b'-'
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Byte cursor over the solution text
///
/// Every stop position is either the end of input or next to an ASCII
/// delimiter, so slicing at `pos` always lands on a char boundary.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str, pos: usize) -> Self {
        Self { src, pos }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn eat(&mut self, literal: &str) -> Option<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Some(())
        } else {
            None
        }
    }

    fn eat_opt(&mut self, literal: &str) {
        let _ = self.eat(literal);
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume one or more bytes matching `pred`
    fn take_nonempty(&mut self, pred: impl Fn(u8) -> bool) -> Option<&'a str> {
        let len = self.rest().bytes().take_while(|&b| pred(b)).count();
        if len == 0 {
            return None;
        }
        let taken = &self.src[self.pos..self.pos + len];
        self.pos += len;
        Some(taken)
    }

    /// `"..."` with at least one character inside
    fn quoted(&mut self) -> Option<&'a str> {
        self.eat("\"")?;
        let inner = self.take_nonempty(|b| b != b'"')?;
        self.eat("\"")?;
        Some(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEBSITE: &str = "Project(\"{E24C65DC-7377-472B-9ABA-BC803B73C61A}\") = \"Shop\", \"Shop\\\", \"{11111111-2222-3333-4444-555555555555}\"\r\n\tProjectSection(WebsiteProperties) = preProject\r\n\t\tTargetFrameworkMoniker = \".NETFramework,Version%3Dv4.0\"\r\n\tEndProjectSection\r\nEndProject";

    const LIBRARY: &str = "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Core\", \"Core\\Core.csproj\", \"{AAAAAAAA-0000-0000-0000-000000000001}\"\r\nEndProject";

    #[test]
    fn splits_blocks_in_source_order() {
        let sln = format!(
            "Microsoft Visual Studio Solution File, Format Version 12.00\r\n{}\r\n{}\r\nGlobal\r\nEndGlobal\r\n",
            WEBSITE, LIBRARY
        );
        let blocks = split_projects(&sln);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "Shop");
        assert_eq!(blocks[0].rel_path, "Shop\\");
        assert_eq!(blocks[0].guid, "11111111-2222-3333-4444-555555555555");
        assert_eq!(blocks[1].type_guid, "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC");
        assert_eq!(blocks[1].rel_path, "Core\\Core.csproj");
    }

    #[test]
    fn project_section_does_not_end_a_block() {
        let blocks = split_projects(WEBSITE);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].raw.contains("EndProjectSection"));
        assert!(blocks[0].raw.ends_with("EndProject"));
        assert_eq!(blocks[0].raw, WEBSITE);
    }

    #[test]
    fn spans_point_back_into_source() {
        let sln = format!("header\n{}\n{}\n", LIBRARY, WEBSITE);
        for block in split_projects(&sln) {
            assert_eq!(&sln[block.span.clone()], block.raw);
            assert_eq!(&sln[block.path_span.clone()], block.rel_path);
        }
    }

    #[test]
    fn unquoted_type_guid_is_accepted() {
        let sln = "Project({FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}) = \"A\", \"A.csproj\", \"{0A}\"\nEndProject";
        let blocks = split_projects(sln);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].guid, "0A");
    }

    #[test]
    fn malformed_header_is_skipped() {
        let sln = format!("Project(\"{{nothex}}\") = \"X\", \"X\", \"{{1}}\"\nEndProject\n{}", LIBRARY);
        let blocks = split_projects(&sln);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "Core");
    }

    #[test]
    fn unterminated_block_yields_nothing() {
        let sln = "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"A\", \"A.csproj\", \"{01}\"\n";
        assert!(split_projects(sln).is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_projects("").is_empty());
        assert!(split_projects("Global\nEndGlobal\n").is_empty());
    }

    #[test]
    fn non_ascii_names_survive() {
        let sln = "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"專案\", \"專案\\專案.csproj\", \"{01}\"\nEndProject";
        let blocks = split_projects(sln);
        assert_eq!(blocks[0].name, "專案");
        assert_eq!(blocks[0].rel_path, "專案\\專案.csproj");
    }
}
