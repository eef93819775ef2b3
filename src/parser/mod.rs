//! Solution and project file parsing
//!
//! Data flows one way: solution text is cut into [`ProjectBlock`]s by the
//! scanner, blocks become typed Web Site and library entities, and library
//! project files are read for their build output settings on demand.
//!
//! [`ProjectBlock`]: crate::domain::entities::ProjectBlock

mod csproj;
mod entities;
mod properties;
mod references;
mod scanner;

pub use csproj::{BuildConfiguration, LibraryDescriptor};
pub use entities::{parse_csharp_projects, parse_websites};
pub use properties::WebsiteProperties;
pub use references::parse_project_references;
pub use scanner::split_projects;
