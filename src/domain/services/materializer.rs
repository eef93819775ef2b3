//! Reference materializer
//!
//! Decides the `HintPath` written for every referenced binary, relative to
//! the generated project folder.
//!
//! - `copy`: binaries that exist are copied into `refs/` and referenced
//!   there; anything else points at the Web Site's `Bin` folder.
//! - `link`: binaries that exist are referenced where they were found;
//!   anything else points at the Web Site's `Bin` folder. Nothing is written.

use std::path::{Path, PathBuf};

use crate::domain::entities::DependencyReference;
use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::value_objects::{win_path, HintMap, LinkFallback, PlacementMode};

use super::resolver::Resolution;

/// Folder, inside the generated project folder, that receives copies
pub const REFS_DIR_NAME: &str = "refs";

/// Hints for every binary plus, per reference, whether it fell back to
/// the Web Site `Bin` folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Materialization {
    pub hints: HintMap,
    /// Parallel to the references passed in
    pub fallbacks: Vec<Option<LinkFallback>>,
}

pub struct ReferenceMaterializer<'a, F: FileSystem> {
    fs: &'a F,
    mode: PlacementMode,
    output_dir: &'a Path,
    website_rel: &'a str,
}

impl<'a, F: FileSystem> ReferenceMaterializer<'a, F> {
    /// `website_rel` is the Web Site folder relative to `output_dir`,
    /// backslash separated
    pub fn new(fs: &'a F, mode: PlacementMode, output_dir: &'a Path, website_rel: &'a str) -> Self {
        Self {
            fs,
            mode,
            output_dir,
            website_rel,
        }
    }

    pub fn refs_dir(&self) -> PathBuf {
        self.output_dir.join(REFS_DIR_NAME)
    }

    /// Compute hints for `references`; `resolutions` must be parallel to it
    ///
    /// Only creating the `refs/` folder can fail. A failed copy degrades to
    /// a Web Site `Bin` hint.
    pub fn materialize(
        &self,
        references: &[DependencyReference],
        resolutions: &[Resolution],
    ) -> FsResult<Materialization> {
        match self.mode {
            PlacementMode::Copy => self.copy(references, resolutions),
            PlacementMode::Link => Ok(self.link(references, resolutions)),
        }
    }

    fn copy(
        &self,
        references: &[DependencyReference],
        resolutions: &[Resolution],
    ) -> FsResult<Materialization> {
        let refs_dir = self.refs_dir();
        self.fs.create_dir_all(&refs_dir)?;

        let mut out = Materialization::default();
        for (reference, resolution) in references.iter().zip(resolutions) {
            let dll = reference.dll_name.as_str();

            let fallback = if self.fs.exists(&resolution.resolved) {
                let dest = refs_dir.join(dll);
                match self.fs.copy(&resolution.resolved, &dest) {
                    Ok(()) => {
                        out.hints
                            .insert(dll, win_path::relative_backslashes(self.output_dir, &dest));
                        None
                    }
                    Err(_) => Some(LinkFallback::CopyFailed),
                }
            } else {
                Some(LinkFallback::Missing)
            };

            if fallback.is_some() {
                out.hints.insert(dll, self.website_bin_hint(dll));
            }
            out.fallbacks.push(fallback);
        }
        Ok(out)
    }

    fn link(
        &self,
        references: &[DependencyReference],
        resolutions: &[Resolution],
    ) -> Materialization {
        let mut out = Materialization::default();
        for (reference, resolution) in references.iter().zip(resolutions) {
            let dll = reference.dll_name.as_str();
            let hint = if self.fs.exists(&resolution.resolved) {
                win_path::relative_backslashes(self.output_dir, &resolution.resolved)
            } else {
                self.website_bin_hint(dll)
            };
            out.hints.insert(dll, hint);
            out.fallbacks.push(None);
        }
        out
    }

    fn website_bin_hint(&self, dll: &str) -> String {
        win_path::join(self.website_rel, &["Bin", dll])
    }
}
