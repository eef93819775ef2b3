//! Domain Layer
//!
//! The core of sln2csproj: solution entities, the values derived from them,
//! and the resolution services that turn declared references into paths.
//!
//! ## Structure
//!
//! - `entities/` - Parsed solution records (ProjectBlock, WebsiteProject, LibraryProject)
//! - `value_objects/` - Immutable value types (ProjectType, TargetFramework, Provenance)
//! - `services/` - Dependency resolution and reference materialization
//! - `ports/` - Interface definitions for infrastructure
//!
//! Services never touch the disk directly; every probe goes through the
//! `FileSystem` port.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
