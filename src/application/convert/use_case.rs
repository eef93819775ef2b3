//! Convert Use Case
//!
//! Orchestrates one conversion:
//! 1. Read and parse the solution
//! 2. Pick a Web Site
//! 3. Resolve every declared binary
//! 4. Place binaries and compute hint paths
//! 5. Write the descriptor and the re-rooted solution
//!
//! Nothing is written before step 4. Steps 1 and 2 are also available on
//! their own as [`ConvertUseCase::inspect`].

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::services::{DependencyResolver, ReferenceMaterializer};
use crate::domain::value_objects::win_path;
use crate::error::{Sln2CsprojError, Sln2CsprojResult};
use crate::generator::{generate_descriptor, rewrite_manifest};
use crate::parser::{parse_csharp_projects, parse_websites, split_projects};

use super::options::ConvertOptions;
use super::result::{ConvertResult, DependencyReport, Inspection};

const DESCRIPTOR_SUFFIX: &str = ".intellisense.csproj";
const MANIFEST_PREFIX: &str = "fake_";

/// Folder-safe form of a Web Site name: every run of `<>:"/\|?*` becomes `_`,
/// and a name that is empty or only dots becomes `_` so the output folder
/// stays inside the output root
pub fn safe_name(name: &str) -> String {
    if name.chars().all(|c| c == '.') {
        return "_".to_string();
    }

    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Convert use case, parameterized by the file system port
pub struct ConvertUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> ConvertUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Read the solution and list its Web Sites and libraries
    ///
    /// Fails when the file is missing or holds no Web Site entry.
    pub fn inspect(&self, manifest: &Path) -> Sln2CsprojResult<Inspection> {
        let manifest = absolute(manifest)?;
        if !self.file_system.exists(&manifest) {
            return Err(Sln2CsprojError::ManifestNotFound { path: manifest });
        }

        let content = self.file_system.read(&manifest)?;
        let blocks = split_projects(&content);
        let websites = parse_websites(&blocks);
        if websites.is_empty() {
            return Err(Sln2CsprojError::NoWebsiteProjects { manifest });
        }
        let libraries = parse_csharp_projects(&blocks);

        let sln_dir = manifest
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Inspection {
            manifest,
            sln_dir,
            content,
            websites,
            libraries,
        })
    }

    /// Run the whole pipeline
    pub fn execute(&self, options: &ConvertOptions) -> Sln2CsprojResult<ConvertResult> {
        let inspection = self.inspect(&options.manifest)?;
        self.convert(inspection, options)
    }

    /// Run the pipeline on an already inspected solution
    pub fn convert(
        &self,
        inspection: Inspection,
        options: &ConvertOptions,
    ) -> Sln2CsprojResult<ConvertResult> {
        let Inspection {
            manifest,
            sln_dir,
            content,
            mut websites,
            libraries,
        } = inspection;
        if websites.is_empty() {
            return Err(Sln2CsprojError::NoWebsiteProjects { manifest });
        }

        let website_count = websites.len();
        let index = options.pick_index(website_count);
        let website = websites.swap_remove(index);

        let resolver = DependencyResolver::new(&self.file_system, &sln_dir);
        let resolutions = resolver.resolve(&website, &libraries);

        let name = safe_name(&website.name);
        let output_dir = win_path::normalize(&sln_dir.join(&options.out_dir).join(&name));
        let website_dir = resolver.website_dir(&website);
        let website_rel = win_path::relative_backslashes(&output_dir, &website_dir);

        self.file_system.create_dir_all(&output_dir)?;

        let materializer =
            ReferenceMaterializer::new(&self.file_system, options.mode, &output_dir, &website_rel);
        let placed = materializer.materialize(&website.references, &resolutions)?;

        let descriptor_path = output_dir.join(format!("{}{}", name, DESCRIPTOR_SUFFIX));
        let descriptor = generate_descriptor(&website, &website_rel, &placed.hints);
        self.file_system.write(&descriptor_path, &descriptor)?;

        let manifest_path = output_dir.join(format!("{}{}.sln", MANIFEST_PREFIX, name));
        let rewritten = rewrite_manifest(&content, &sln_dir, &output_dir, &website, &descriptor_path);
        self.file_system.write(&manifest_path, &rewritten)?;

        let dependencies = website
            .references
            .iter()
            .zip(resolutions)
            .zip(placed.fallbacks)
            .map(|((reference, resolution), fallback)| DependencyReport {
                hint: placed
                    .hints
                    .get(&reference.dll_name)
                    .unwrap_or_default()
                    .to_string(),
                reference: reference.clone(),
                resolution,
                fallback,
            })
            .collect();

        Ok(ConvertResult {
            manifest,
            website,
            picked: index + 1,
            website_count,
            output_dir,
            descriptor_path,
            manifest_path,
            mode: options.mode,
            dependencies,
        })
    }
}

fn absolute(path: &Path) -> Sln2CsprojResult<PathBuf> {
    if path.is_absolute() {
        Ok(win_path::normalize(path))
    } else {
        Ok(win_path::normalize(&std::env::current_dir()?.join(path)))
    }
}
