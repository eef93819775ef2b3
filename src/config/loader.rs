//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::PlacementMode;
use crate::error::{Sln2CsprojError, Sln2CsprojResult};

use super::types::{ColorMode, Config, ConfigFile};

/// Project config file name, looked up next to the solution
pub const PROJECT_CONFIG_FILE: &str = "sln2csproj.toml";

pub const ENV_OUT_DIR: &str = "SLN2CSPROJ_OUT_DIR";
pub const ENV_MODE: &str = "SLN2CSPROJ_MODE";
pub const ENV_COLOR: &str = "SLN2CSPROJ_COLOR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load one config file and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Sln2CsprojResult<(ConfigFile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let file: ConfigFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| Sln2CsprojError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((file, warnings))
}

/// `<config_dir>/sln2csproj/config.toml`, when the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sln2csproj").join("config.toml"))
}

/// Layer defaults, user config, project config and environment
///
/// A user config that fails to load is skipped; a broken project config
/// is an error. CLI flags are applied by the caller on top of the result.
pub fn load_layered(sln_dir: Option<&Path>) -> Sln2CsprojResult<(Config, Vec<ConfigWarning>)> {
    let mut config = Config::default();
    let mut warnings = Vec::new();

    if let Some(user_config) = user_config_path().filter(|p| p.is_file()) {
        if let Ok((file, file_warnings)) = load_with_warnings(&user_config) {
            config.apply(&file);
            warnings.extend(file_warnings);
        }
    }

    if let Some(project_config) = sln_dir
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .filter(|p| p.is_file())
    {
        let (file, file_warnings) = load_with_warnings(&project_config)?;
        config.apply(&file);
        warnings.extend(file_warnings);
    }

    Ok((config.with_env_overrides(), warnings))
}

/// Apply environment variable overrides (SLN2CSPROJ_* prefix)
///
/// Values that do not parse are ignored.
pub fn with_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(out_dir) = var(ENV_OUT_DIR).filter(|v| !v.trim().is_empty()) {
        config.out_dir = PathBuf::from(out_dir);
    }

    if let Some(mode) = var(ENV_MODE).as_deref().and_then(PlacementMode::parse) {
        config.mode = mode;
    }

    if let Some(color) = var(ENV_COLOR).as_deref().and_then(ColorMode::parse) {
        config.color = color;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["convert", "out_dir", "mode", "output", "color"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
