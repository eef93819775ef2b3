//! Console design tokens
//!
//! Every colored span maps to a [`Tone`], and every status marker comes from
//! a [`GlyphSet`]. ASCII glyphs are used when the locale cannot show unicode.

use crossterm::style::Color;

/// Semantic role of a piece of console output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Info => Color::Cyan,
            Tone::Dim => Color::DarkGrey,
        }
    }
}

/// Status markers and command identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    /// Reference whose hint is a guess or a `Bin` fallback
    pub guess: &'static str,
    pub convert: &'static str,
    pub check: &'static str,
}

pub const UNICODE: GlyphSet = GlyphSet {
    success: "✓",
    error: "✗",
    warning: "⚠",
    guess: "?",
    convert: "📦",
    check: "🔍",
};

pub const ASCII: GlyphSet = GlyphSet {
    success: "[OK]",
    error: "[FAIL]",
    warning: "[WARN]",
    guess: "[??]",
    convert: "[CONVERT]",
    check: "[CHECK]",
};

pub fn glyphs(supports_unicode: bool) -> &'static GlyphSet {
    if supports_unicode {
        &UNICODE
    } else {
        &ASCII
    }
}
