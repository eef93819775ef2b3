//! Domain Services
//!
//! Resolution and placement of Web Site dependencies. Both services work
//! through the [`FileSystem`](crate::domain::ports::FileSystem) port.

mod materializer;
mod resolver;

pub use materializer::{Materialization, ReferenceMaterializer, REFS_DIR_NAME};
pub use resolver::{DependencyResolver, DescriptorState, Resolution};
