//! Provenance of a resolved binary path
//!
//! Resolution never fails; it always yields a path. The provenance records
//! which probe produced it, and therefore whether the file was actually seen.

use std::fmt;

/// Which strategy produced a resolved binary path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Found in the Web Site's own `Bin` folder (no matching library project)
    WebsiteBin,
    /// Not found; guessed the Web Site's `Bin` folder
    GuessWebsiteBin,
    /// Found via the library's Debug `OutputPath`
    DebugOutputPath,
    /// Found via the library's Release `OutputPath`
    ReleaseOutputPath,
    /// Found under one of the conventional `bin` folders of the library
    FallbackBin,
    /// Not found; guessed the library's `bin\Debug` folder
    GuessBinDebug,
}

impl Provenance {
    /// Label used in verbose output and JSON events
    pub fn label(&self) -> &'static str {
        match self {
            Provenance::WebsiteBin => "website:Bin",
            Provenance::GuessWebsiteBin => "guess:website Bin",
            Provenance::DebugOutputPath => "csproj:Debug OutputPath",
            Provenance::ReleaseOutputPath => "csproj:Release OutputPath",
            Provenance::FallbackBin => "fallback:bin",
            Provenance::GuessBinDebug => "guess:bin\\Debug",
        }
    }

    /// True when the path is a guess and the file was not seen on disk
    pub fn is_guess(&self) -> bool {
        matches!(self, Provenance::GuessWebsiteBin | Provenance::GuessBinDebug)
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a reference ended up pointing at the Web Site `Bin` folder instead of
/// the location it was resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkFallback {
    /// The resolved file existed but copying it failed
    CopyFailed,
    /// The resolved file did not exist
    Missing,
}

impl LinkFallback {
    /// Suffix appended to the provenance label
    pub fn annotation(&self) -> &'static str {
        match self {
            LinkFallback::CopyFailed => " + copyFail->link",
            LinkFallback::Missing => " + missing->link",
        }
    }
}
