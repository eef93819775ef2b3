//! Descriptor Generator
//!
//! Renders the synthetic `<name>.intellisense.csproj` for a Web Site:
//! - a legacy (non-SDK) C# library project named after the site
//! - every `.cs` under the site folder compiled, build output and
//!   package folders excluded
//! - the web-specific markup files listed as content
//! - one `<Reference>` per declared binary, pointing at its hint path
//!
//! The project only exists for editor tooling; its `Build` target is a
//! no-op.

use crate::domain::entities::WebsiteProject;
use crate::domain::value_objects::{win_path, HintMap};

use super::escaping::{escape_path, escape_xml};

/// Framework assemblies every Web Site can use without declaring them
const FRAMEWORK_REFERENCES: &[&str] = &[
    "System",
    "System.Data",
    "System.Drawing",
    "System.Web",
    "System.Web.Extensions",
    "System.Web.Services",
    "System.Xml",
    "System.Configuration",
    "System.Xml.Linq",
];

/// Folders and files under the site that are never compiled
const COMPILE_EXCLUDES: &[&[&str]] = &[
    &["obj", "**"],
    &["bin", "**"],
    &["Bin", "**"],
    &["App_Data", "**"],
    &["Packages", "**"],
    &["node_modules", "**"],
    &["**", "Temporary ASP.NET Files", "**"],
    &["Properties", "AssemblyInfo.cs"],
];

const CONTENT_EXTENSIONS: &[&str] = &["aspx", "ascx", "master", "ashx", "asmx", "config", "asax"];

/// Render the project file text
///
/// `website_rel` is the site folder relative to the folder the project is
/// written to; `hints` maps binary names to hint paths relative to that
/// same folder. A binary with no hint is looked for in the site's `Bin`.
pub fn generate_descriptor(website: &WebsiteProject, website_rel: &str, hints: &HintMap) -> String {
    let prefix = win_path::trim_trailing_separators(website_rel);

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!-- Generated by sln2csproj -->\n");
    out.push_str("<!-- IntelliSense only: do not build this project -->\n");
    out.push_str(
        "<Project ToolsVersion=\"15.0\" xmlns=\"http://schemas.microsoft.com/developer/msbuild/2003\">\n",
    );

    out.push_str("  <PropertyGroup>\n");
    out.push_str("    <Configuration Condition=\" '$(Configuration)' == '' \">Debug</Configuration>\n");
    out.push_str("    <Platform Condition=\" '$(Platform)' == '' \">AnyCPU</Platform>\n");
    out.push_str(&format!(
        "    <ProjectGuid>{{{}}}</ProjectGuid>\n",
        escape_xml(&website.guid)
    ));
    out.push_str("    <OutputType>Library</OutputType>\n");
    out.push_str(&format!(
        "    <RootNamespace>{}</RootNamespace>\n",
        escape_xml(&website.name.replace('.', "_"))
    ));
    out.push_str(&format!(
        "    <AssemblyName>{}</AssemblyName>\n",
        escape_xml(&website.name)
    ));
    out.push_str(&format!(
        "    <TargetFrameworkVersion>{}</TargetFrameworkVersion>\n",
        escape_xml(website.target_framework.as_str())
    ));
    out.push_str("  </PropertyGroup>\n\n");

    out.push_str("  <ItemGroup>\n");
    out.push_str("    <!-- Framework references -->\n");
    for name in FRAMEWORK_REFERENCES {
        out.push_str(&format!("    <Reference Include=\"{}\" />\n", name));
    }
    out.push('\n');
    out.push_str("    <!-- References declared by the Web Site -->\n");
    for reference in &website.references {
        let hint = hints
            .get(&reference.dll_name)
            .map(str::to_string)
            .unwrap_or_else(|| win_path::join(prefix, &["Bin", reference.dll_name.as_str()]));
        out.push_str(&format!(
            "    <Reference Include=\"{}\">\n",
            escape_xml(reference.assembly_name())
        ));
        out.push_str(&format!("      <HintPath>{}</HintPath>\n", escape_path(&hint)));
        out.push_str("      <Private>False</Private>\n");
        out.push_str("    </Reference>\n");
    }
    out.push_str("  </ItemGroup>\n\n");

    let excludes: Vec<String> = COMPILE_EXCLUDES
        .iter()
        .map(|parts| win_path::join(prefix, parts))
        .collect();
    out.push_str("  <ItemGroup>\n");
    out.push_str(&format!(
        "    <Compile Include=\"{}\" Exclude=\"{}\" />\n",
        escape_path(&win_path::join(prefix, &["**", "*.cs"])),
        escape_path(&excludes.join(";"))
    ));
    out.push_str("  </ItemGroup>\n\n");

    out.push_str("  <ItemGroup>\n");
    for ext in CONTENT_EXTENSIONS {
        let pattern = format!("*.{}", ext);
        out.push_str(&format!(
            "    <Content Include=\"{}\" />\n",
            escape_path(&win_path::join(prefix, &["**", pattern.as_str()]))
        ));
    }
    out.push_str("  </ItemGroup>\n\n");

    out.push_str("  <Import Project=\"$(MSBuildToolsPath)\\Microsoft.CSharp.targets\" />\n\n");
    out.push_str("  <Target Name=\"Build\">\n");
    out.push_str("    <Message Text=\"[INFO] sln2csproj project for IntelliSense only\" Importance=\"high\" />\n");
    out.push_str("  </Target>\n");
    out.push_str("</Project>\n");
    out
}
