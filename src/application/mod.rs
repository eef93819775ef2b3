//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports) and the parser
//!   and generator
//! - Does NOT contain resolution rules (those are in Domain)
//!
//! ## Use Cases
//!
//! - `ConvertUseCase` - Inspect a solution, or convert one of its Web Sites

pub mod convert;

pub use convert::{
    safe_name, ConvertOptions, ConvertResult, ConvertUseCase, DependencyReport, Inspection,
    DEFAULT_OUT_DIR,
};
