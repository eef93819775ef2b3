//! Domain Entities
//!
//! Records parsed out of a solution file.
//! - `ProjectBlock` - one raw `Project(...) ... EndProject` entry
//! - `WebsiteProject` - a Web Site entry and its declared references
//! - `LibraryProject` - a C# class library entry

mod block;
mod library;
mod website;

pub use block::ProjectBlock;
pub use library::LibraryProject;
pub use website::{DependencyReference, WebsiteProject};
