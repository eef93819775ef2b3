//! Output generation
//!
//! Pure rendering of the two files written per Web Site: the synthetic
//! project descriptor and the re-rooted solution manifest.

mod descriptor;
mod escaping;
mod manifest;

pub use descriptor::generate_descriptor;
pub use escaping::{escape_path, escape_xml};
pub use manifest::{detect_eol, rewrite_manifest};
