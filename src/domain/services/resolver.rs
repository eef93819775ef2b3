//! Dependency resolver
//!
//! Turns each declared Web Site reference into a best-guess absolute path
//! of the binary on disk. Resolution never fails: when every probe misses,
//! the result is a guessed path whose [`Provenance`] says so.
//!
//! Probe order per reference:
//! 1. no library in the solution has the reference's GUID:
//!    `<site>/Bin/<dll>`
//! 2. the library's `Debug|AnyCPU` then `Release|AnyCPU` `OutputPath`,
//!    looking for the declared binary name, then the `AssemblyName` one
//! 3. `bin/Debug`, `bin/Release`, `bin` under the library folder
//! 4. guess `bin/Debug/<dll>` under the library folder

use std::path::{Path, PathBuf};

use crate::domain::entities::{DependencyReference, LibraryProject, WebsiteProject};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{win_path, Provenance};
use crate::parser::{BuildConfiguration, LibraryDescriptor};

/// Where one reference resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Matched library project path, relative to the solution directory
    pub project_path: Option<String>,
    /// Absolute path of the binary; may not exist when `provenance.is_guess()`
    pub resolved: PathBuf,
    pub provenance: Provenance,
    pub descriptor: DescriptorState,
}

/// What happened when the matched library's project file was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorState {
    /// The reference matched no library in the solution
    NoProject,
    /// The library's project file is not on disk
    Missing,
    /// The project file exists but could not be read or is not valid XML
    Unreadable(String),
    /// The project file was read
    Read,
}

/// Resolves Web Site references against the solution's libraries
pub struct DependencyResolver<'a, F: FileSystem> {
    fs: &'a F,
    sln_dir: &'a Path,
}

impl<'a, F: FileSystem> DependencyResolver<'a, F> {
    pub fn new(fs: &'a F, sln_dir: &'a Path) -> Self {
        Self { fs, sln_dir }
    }

    /// One resolution per reference, in the same order as `website.references`
    pub fn resolve(
        &self,
        website: &WebsiteProject,
        libraries: &[LibraryProject],
    ) -> Vec<Resolution> {
        let website_dir = self.website_dir(website);
        website
            .references
            .iter()
            .map(|reference| self.resolve_one(&website_dir, reference, libraries))
            .collect()
    }

    /// Absolute Web Site folder
    pub fn website_dir(&self, website: &WebsiteProject) -> PathBuf {
        win_path::normalize(&self.sln_dir.join(win_path::to_native(&website.physical_path)))
    }

    fn resolve_one(
        &self,
        website_dir: &Path,
        reference: &DependencyReference,
        libraries: &[LibraryProject],
    ) -> Resolution {
        let dll = reference.dll_name.as_str();

        let Some(library) = libraries
            .iter()
            .find(|lib| lib.guid.eq_ignore_ascii_case(&reference.target_guid))
        else {
            let bin = website_dir.join("Bin").join(dll);
            let provenance = if self.fs.exists(&bin) {
                Provenance::WebsiteBin
            } else {
                Provenance::GuessWebsiteBin
            };
            return Resolution {
                project_path: None,
                resolved: bin,
                provenance,
                descriptor: DescriptorState::NoProject,
            };
        };

        let project_file =
            win_path::normalize(&self.sln_dir.join(win_path::to_native(&library.rel_path)));
        let project_dir = project_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.sln_dir.to_path_buf());

        let (info, descriptor) = self.read_descriptor(&project_file);
        let (resolved, provenance) = self.locate_in_project(&project_dir, dll, &info);

        Resolution {
            project_path: Some(library.rel_path.clone()),
            resolved,
            provenance,
            descriptor,
        }
    }

    fn locate_in_project(
        &self,
        project_dir: &Path,
        dll: &str,
        info: &LibraryDescriptor,
    ) -> (PathBuf, Provenance) {
        let assembly_dll = info.assembly_file_name();
        let assembly_dll = assembly_dll.as_deref().unwrap_or(dll);

        let configured = [
            (BuildConfiguration::Debug, Provenance::DebugOutputPath),
            (BuildConfiguration::Release, Provenance::ReleaseOutputPath),
        ];
        for (config, provenance) in configured {
            if let Some(out_dir) = info.output_path(config) {
                if let Some(found) = self.probe_output_dir(project_dir, out_dir, dll, assembly_dll)
                {
                    return (found, provenance);
                }
            }
        }

        let conventional = [
            project_dir.join("bin").join("Debug").join(dll),
            project_dir.join("bin").join("Release").join(dll),
            project_dir.join("bin").join(dll),
        ];
        if let Some(found) = conventional.into_iter().find(|p| self.fs.exists(p)) {
            return (found, Provenance::FallbackBin);
        }

        (
            project_dir.join("bin").join("Debug").join(dll),
            Provenance::GuessBinDebug,
        )
    }

    /// Declared binary name first, then the `AssemblyName` one
    fn probe_output_dir(
        &self,
        project_dir: &Path,
        out_dir: &str,
        dll: &str,
        assembly_dll: &str,
    ) -> Option<PathBuf> {
        let out_abs = win_path::normalize(&project_dir.join(win_path::to_native(out_dir)));
        [out_abs.join(dll), out_abs.join(assembly_dll)]
            .into_iter()
            .find(|p| self.fs.exists(p))
    }

    fn read_descriptor(&self, project_file: &Path) -> (LibraryDescriptor, DescriptorState) {
        if !self.fs.exists(project_file) {
            return (LibraryDescriptor::default(), DescriptorState::Missing);
        }
        let parsed = self
            .fs
            .read(project_file)
            .map_err(|e| e.to_string())
            .and_then(|xml| LibraryDescriptor::parse(&xml).map_err(|e| e.to_string()));
        match parsed {
            Ok(info) => (info, DescriptorState::Read),
            Err(reason) => (
                LibraryDescriptor::default(),
                DescriptorState::Unreadable(reason),
            ),
        }
    }
}
