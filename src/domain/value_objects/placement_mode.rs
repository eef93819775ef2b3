//! Placement Mode Value Object
//!
//! Decides where the generated project points for each referenced binary.

use serde::{Deserialize, Serialize};

/// How resolved binaries are made available to the generated project
///
/// - `Copy`: copy every binary that exists into a local `refs/` folder (default)
/// - `Link`: point at the binary where it was found, touching nothing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    /// Copy binaries into the output folder
    #[default]
    Copy,
    /// Reference binaries in place
    Link,
}

impl PlacementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementMode::Copy => "copy",
            PlacementMode::Link => "link",
        }
    }

    /// Lenient parse used for environment variables
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "copy" => Some(PlacementMode::Copy),
            "link" => Some(PlacementMode::Link),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
