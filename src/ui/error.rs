use sln2csproj::Sln2CsprojError;

use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::TerminalCapabilities::detect();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).render(supports_color)
    );
    if let Some(hint) = err.downcast_ref::<Sln2CsprojError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}

fn fix_hint(err: &Sln2CsprojError) -> Option<&'static str> {
    match err {
        Sln2CsprojError::ManifestNotFound { .. } => Some("Check the path to the .sln file."),
        Sln2CsprojError::NoWebsiteProjects { .. } => {
            Some("Only Web Site solutions (project type E24C65DC-...) can be converted.")
        }
        Sln2CsprojError::InvalidConfig { .. } => Some("Fix the TOML syntax and try again."),
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let message = err.to_string();
        let _ = emit_event(&ErrorEvent::new(&message));
        return;
    }

    eprint!("{}", format_error(err));
}
