use sln2csproj::application::ConvertResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConvertView<'a> {
    result: &'a ConvertResult,
    verbose: bool,
}

impl<'a> ConvertView<'a> {
    pub fn new(result: &'a ConvertResult, verbose: bool) -> Self {
        Self { result, verbose }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let result = self.result;
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Convert, "sln2csproj");
        header.add("Solution", result.manifest.display().to_string());
        if result.website_count > 1 {
            header.add(
                "Website",
                format!(
                    "{} ({} of {})",
                    result.website.name, result.picked, result.website_count
                ),
            );
        } else {
            header.add("Website", result.website.name.as_str());
        }
        header.add("PhysicalPath", result.website.physical_path.as_str());
        header.add("Framework", result.website.target_framework.as_str());
        header.add("Descriptor", result.descriptor_path.display().to_string());
        header.add("Mode", result.mode.as_str());
        header.add("References", result.dependencies.len().to_string());
        out.push_str(&header.render(supports_color, supports_unicode));

        if self.verbose && !result.dependencies.is_empty() {
            out.push('\n');
            for dep in &result.dependencies {
                let icon = Icon::for_reference(dep.resolution.provenance, dep.fallback.is_some());
                out.push_str(&format!(
                    "  {} {}\n",
                    icon.colored(supports_color, supports_unicode),
                    dep.reference.dll_name
                ));
                out.push_str(&format!(
                    "      {} {}\n",
                    ColoredText::dim("from:").render(supports_color),
                    dep.from_label()
                ));
                out.push_str(&format!(
                    "      {} {}\n",
                    ColoredText::dim("hint:").render(supports_color),
                    dep.hint
                ));
            }
        }

        out.push('\n');
        out.push_str(&format!(
            "{} {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("Open").render(supports_color),
            result.manifest_path.display()
        ));

        let guessed = result.guessed_count();
        if guessed > 0 {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!(
                    "{} reference(s) not found on disk; build the libraries or use --verbose to see the guessed paths.",
                    guessed
                ))
                .render(supports_color)
            ));
        }

        out
    }
}
