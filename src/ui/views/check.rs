use std::path::Path;

use sln2csproj::domain::entities::WebsiteProject;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct CheckView<'a> {
    manifest: &'a Path,
    websites: &'a [WebsiteProject],
    libraries: usize,
}

impl<'a> CheckView<'a> {
    pub fn new(manifest: &'a Path, websites: &'a [WebsiteProject], libraries: usize) -> Self {
        Self {
            manifest,
            websites,
            libraries,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Check, "sln2csproj check");
        header.add("Solution", self.manifest.display().to_string());
        header.add("Websites", self.websites.len().to_string());
        header.add("Libraries", self.libraries.to_string());
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        for (i, website) in self.websites.iter().enumerate() {
            out.push_str(&format!(
                "  {} {}\n",
                ColoredText::info(format!("[{}]", i + 1)).render(supports_color),
                ColoredText::info(website.name.as_str())
                    .bold()
                    .render(supports_color)
            ));
            out.push_str(&format!(
                "      PhysicalPath: {}\n",
                display_or_dash(&website.physical_path)
            ));
            out.push_str(&format!(
                "      Framework:    {}\n",
                website.target_framework
            ));
            out.push_str(&format!(
                "      References:   {}\n",
                website.references.len()
            ));
        }

        if self.websites.len() > 1 {
            out.push('\n');
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!(
                    "{} websites found; pass --pick N to choose one (default 1).",
                    self.websites.len()
                ))
                .render(supports_color)
            ));
        } else {
            out.push('\n');
            out.push_str(&format!(
                "{} {}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                ColoredText::success("Ready to convert.").render(supports_color)
            ));
        }

        out
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
