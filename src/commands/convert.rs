//! Convert command handler

use anyhow::Result;

use sln2csproj::application::{ConvertOptions, ConvertUseCase};
use sln2csproj::infrastructure::LocalFs;

use crate::cli::Cli;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DependencyEvent, WarningEvent, WebsiteEvent};
use crate::ui::views::convert::ConvertView;

pub fn cmd_convert(cli: &Cli) -> Result<()> {
    let (config, warnings) = super::load_config(&cli.sln)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    super::report_config_warnings(&ui, &warnings)?;

    // Flags beat every config layer.
    let options = ConvertOptions::new(&cli.sln)
        .with_pick(cli.pick.unwrap_or(1))
        .with_out_dir(cli.out_dir.clone().unwrap_or(config.out_dir))
        .with_mode(cli.mode.unwrap_or(config.mode));

    let use_case = ConvertUseCase::new(LocalFs::new());
    let result = use_case.execute(&options)?;

    for dep in &result.dependencies {
        let Some(reason) = dep.unreadable_descriptor() else {
            continue;
        };
        let project = dep.resolution.project_path.as_deref().unwrap_or("?");
        if ui.json {
            emit_event(&WarningEvent::new(format!(
                "could not read {}: {}",
                project, reason
            )))?;
        } else {
            let mut block = WarningBlock::new(format!("Could not read {}", project));
            block.add_line(reason);
            block.add_line(format!("{} resolved via {}", dep.reference.dll_name, dep.from_label()));
            eprint!("{}", block.render(ui.color, ui.unicode));
        }
    }

    if ui.json {
        emit_event(&WebsiteEvent::new(result.picked, &result.website))?;
        for dep in &result.dependencies {
            emit_event(&DependencyEvent::new(dep))?;
        }
        emit_event(&CompleteEvent::convert(&result))?;
        return Ok(());
    }

    let view = ConvertView::new(&result, ui.verbose);
    print!("{}", view.render(ui.color, ui.unicode));
    Ok(())
}
