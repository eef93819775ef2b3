//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_OUT_DIR;
use crate::domain::value_objects::PlacementMode;

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// `[convert]` section as written in a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<PlacementMode>,
}

/// `[output]` section as written in a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorMode>,
}

/// One config file; every key is optional so files can be layered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub convert: ConvertSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Effective configuration after layering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output root, relative to the solution directory unless absolute
    pub out_dir: PathBuf,
    pub mode: PlacementMode,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            mode: PlacementMode::default(),
            color: ColorMode::default(),
        }
    }
}

impl Config {
    /// Overlay the keys a file actually sets
    pub fn apply(&mut self, file: &ConfigFile) {
        if let Some(out_dir) = &file.convert.out_dir {
            self.out_dir = out_dir.clone();
        }
        if let Some(mode) = file.convert.mode {
            self.mode = mode;
        }
        if let Some(color) = file.output.color {
            self.color = color;
        }
    }

    /// Apply `SLN2CSPROJ_*` environment variables
    pub fn with_env_overrides(self) -> Self {
        super::loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
