//! Convert Options

use std::path::PathBuf;

use crate::domain::value_objects::PlacementMode;

/// Output root used when nothing else is configured, relative to the
/// solution directory
pub const DEFAULT_OUT_DIR: &str = "tools/_intellisense";

/// Options for the convert use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Solution file
    pub manifest: PathBuf,
    /// 1-based index of the Web Site to convert; clamped into range
    pub pick: usize,
    /// Output root; a relative path is taken from the solution directory
    pub out_dir: PathBuf,
    /// How referenced binaries are placed
    pub mode: PlacementMode,
}

impl ConvertOptions {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            pick: 1,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            mode: PlacementMode::default(),
        }
    }

    pub fn with_pick(mut self, pick: usize) -> Self {
        self.pick = pick;
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_mode(mut self, mode: PlacementMode) -> Self {
        self.mode = mode;
        self
    }

    /// Zero-based index of the picked Web Site among `count` candidates
    ///
    /// `count` must be non-zero.
    pub fn pick_index(&self, count: usize) -> usize {
        self.pick.max(1).min(count) - 1
    }
}
