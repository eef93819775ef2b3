//! Check command handler
//!
//! Lists the Web Sites in a solution without resolving or writing
//! anything. Exits with status 2 when more than one Web Site is found, so
//! scripts can tell that `--pick` matters.

use std::io::Write;

use anyhow::Result;

use sln2csproj::application::ConvertUseCase;
use sln2csproj::infrastructure::LocalFs;

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::CompleteEvent, events::WebsiteEvent};
use crate::ui::views::check::CheckView;

/// Exit status when the solution holds several Web Sites
const AMBIGUOUS_EXIT_CODE: i32 = 2;

pub fn cmd_check(cli: &Cli) -> Result<()> {
    let (config, warnings) = super::load_config(&cli.sln)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    super::report_config_warnings(&ui, &warnings)?;

    let use_case = ConvertUseCase::new(LocalFs::new());
    let inspection = use_case.inspect(&cli.sln)?;
    let ambiguous = inspection.websites.len() > 1;

    if ui.json {
        for (i, website) in inspection.websites.iter().enumerate() {
            emit_event(&WebsiteEvent::new(i + 1, website))?;
        }
        emit_event(&CompleteEvent::check(inspection.websites.len(), !ambiguous))?;
    } else {
        let view = CheckView::new(
            &inspection.manifest,
            &inspection.websites,
            inspection.libraries.len(),
        );
        print!("{}", view.render(ui.color, ui.unicode));
    }

    if ambiguous {
        std::io::stdout().flush()?;
        std::process::exit(AMBIGUOUS_EXIT_CODE);
    }
    Ok(())
}
