use sln2csproj::domain::value_objects::Provenance;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{self, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Guess,
    Convert,
    Check,
}

impl Icon {
    /// Marker for one reference in the verbose listing: a guessed path or a
    /// `Bin` fallback hint is flagged, anything seen on disk is not
    pub fn for_reference(provenance: Provenance, fell_back: bool) -> Self {
        if provenance.is_guess() || fell_back {
            Icon::Guess
        } else {
            Icon::Success
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let set = theme::glyphs(supports_unicode);
        match self {
            Icon::Success => set.success,
            Icon::Error => set.error,
            Icon::Warning => set.warning,
            Icon::Guess => set.guess,
            Icon::Convert => set.convert,
            Icon::Check => set.check,
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Icon::Success => Tone::Success,
            Icon::Error => Tone::Error,
            Icon::Warning | Icon::Guess => Tone::Warning,
            Icon::Convert | Icon::Check => Tone::Info,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        ColoredText::new(self.render(supports_unicode), self.tone()).render(supports_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_reference_is_success() {
        assert_eq!(
            Icon::for_reference(Provenance::DebugOutputPath, false),
            Icon::Success
        );
        assert_eq!(Icon::for_reference(Provenance::WebsiteBin, false), Icon::Success);
    }

    #[test]
    fn guessed_or_fallback_reference_is_flagged() {
        assert_eq!(Icon::for_reference(Provenance::GuessBinDebug, false), Icon::Guess);
        assert_eq!(Icon::for_reference(Provenance::FallbackBin, true), Icon::Guess);
    }

    #[test]
    fn ascii_glyph_without_unicode() {
        assert_eq!(Icon::Check.render(false), "[CHECK]");
        assert_eq!(Icon::Guess.colored(false, false), "[??]");
    }

    #[test]
    fn unicode_glyph_when_supported() {
        assert_eq!(Icon::Warning.render(true), theme::UNICODE.warning);
    }
}
