//! sln2csproj - IntelliSense projects for legacy ASP.NET Web Site solutions
//!
//! A Web Site entry in a Visual Studio solution has no project file, so
//! editor tooling cannot see its code or the binaries it references. This
//! crate reads such a solution, locates every binary the Web Site declares,
//! and writes a synthetic class-library project plus a re-rooted copy of
//! the solution that tooling can load.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod infrastructure;
pub mod parser;

// Re-exports for convenience
pub use application::{ConvertOptions, ConvertResult, ConvertUseCase, Inspection};
pub use config::Config;
pub use domain::value_objects::{PlacementMode, Provenance};
pub use error::{Sln2CsprojError, Sln2CsprojResult};
pub use infrastructure::LocalFs;
pub use parser::split_projects;
