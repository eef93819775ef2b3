//! Convert Result
//!
//! Result types for the inspect and convert steps.

use std::path::PathBuf;

use crate::domain::entities::{DependencyReference, LibraryProject, WebsiteProject};
use crate::domain::services::{DescriptorState, Resolution};
use crate::domain::value_objects::{LinkFallback, PlacementMode};

/// A parsed solution, before anything is resolved or written
#[derive(Debug, Clone)]
pub struct Inspection {
    /// Absolute, normalized solution path
    pub manifest: PathBuf,
    /// Directory containing the solution
    pub sln_dir: PathBuf,
    /// Solution text as read
    pub content: String,
    /// Web Site entries, in solution order; never empty
    pub websites: Vec<WebsiteProject>,
    /// C# library entries, in solution order
    pub libraries: Vec<LibraryProject>,
}

/// How one declared binary ended up in the generated project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    pub reference: DependencyReference,
    pub resolution: Resolution,
    /// `HintPath` written for the binary, relative to the output folder
    pub hint: String,
    pub fallback: Option<LinkFallback>,
}

impl DependencyReport {
    /// Provenance label plus any placement fallback annotation,
    /// e.g. `guess:bin\Debug + missing->link`
    pub fn from_label(&self) -> String {
        match self.fallback {
            Some(fallback) => format!("{}{}", self.resolution.provenance, fallback.annotation()),
            None => self.resolution.provenance.to_string(),
        }
    }

    /// Library project file that exists but could not be read
    pub fn unreadable_descriptor(&self) -> Option<&str> {
        match &self.resolution.descriptor {
            DescriptorState::Unreadable(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub manifest: PathBuf,
    pub website: WebsiteProject,
    /// 1-based position of `website` among the solution's Web Sites
    pub picked: usize,
    pub website_count: usize,
    /// `<out_dir>/<safe-name>`
    pub output_dir: PathBuf,
    /// Generated `<safe-name>.intellisense.csproj`
    pub descriptor_path: PathBuf,
    /// Generated `fake_<safe-name>.sln`
    pub manifest_path: PathBuf,
    pub mode: PlacementMode,
    /// One entry per declared reference, in declaration order
    pub dependencies: Vec<DependencyReport>,
}

impl ConvertResult {
    pub fn fallback_count(&self) -> usize {
        self.dependencies
            .iter()
            .filter(|d| d.fallback.is_some())
            .count()
    }

    pub fn guessed_count(&self) -> usize {
        self.dependencies
            .iter()
            .filter(|d| d.resolution.provenance.is_guess())
            .count()
    }
}
