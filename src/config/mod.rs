//! Configuration module for sln2csproj
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the command layer)
//! 2. Environment variables (SLN2CSPROJ_*)
//! 3. Project config (`sln2csproj.toml` next to the solution)
//! 4. User config (`<config_dir>/sln2csproj/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning,
    ENV_COLOR, ENV_MODE, ENV_OUT_DIR, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, ConfigFile, ConvertSection, OutputSection};
