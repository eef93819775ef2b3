//! Command handlers for the sln2csproj binary

mod check;
mod convert;

pub use check::cmd_check;
pub use convert::cmd_convert;

use std::path::{Path, PathBuf};

use anyhow::Result;
use sln2csproj::config::{load_layered, Config, ConfigWarning};

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::WarningEvent};

/// Directory whose `sln2csproj.toml` applies to `sln`
fn config_dir_for(sln: &Path) -> Result<PathBuf> {
    match sln.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) if parent.is_absolute() => Ok(parent.to_path_buf()),
        Some(parent) => Ok(std::env::current_dir()?.join(parent)),
        None => Ok(std::env::current_dir()?),
    }
}

/// Layered configuration for a run on `sln`
fn load_config(sln: &Path) -> Result<(Config, Vec<ConfigWarning>)> {
    let dir = config_dir_for(sln)?;
    Ok(load_layered(Some(&dir))?)
}

fn report_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) -> Result<()> {
    for warning in warnings {
        if ui.json {
            emit_event(&WarningEvent::config(warning))?;
            continue;
        }
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        let mut block = WarningBlock::new(format!("Unknown config key '{}'", warning.key));
        block.add_line(location);
        if let Some(suggestion) = &warning.suggestion {
            block.add_line(format!("Did you mean '{}'?", suggestion));
        }
        eprint!("{}", block.render(ui.color, ui.unicode));
    }
    Ok(())
}
