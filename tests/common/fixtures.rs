//! Test fixtures - solution and project file contents.

/// One Web Site (`Foo` in `FooSite\`) referencing one library (`Bar`).
pub const FOO_SLN: &str = r#"Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio 2010
Project("{E24C65DC-7377-472B-9ABA-BC803B73C61A}") = "Foo", "FooSite\", "{F0000000-0000-0000-0000-000000000001}"
	ProjectSection(WebsiteProperties) = preProject
		TargetFramework = "4.0"
		ProjectReferences = "{AAAAAAAA-0000-0000-0000-000000000001}|Bar.dll;"
		Debug.AspNetCompiler.PhysicalPath = "FooSite\"
	EndProjectSection
EndProject
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Bar", "Bar\Bar.csproj", "{AAAAAAAA-0000-0000-0000-000000000001}"
EndProject
Global
	GlobalSection(SolutionConfigurationPlatforms) = preSolution
		Debug|Any CPU = Debug|Any CPU
	EndGlobalSection
EndGlobal
"#;

/// Library project whose Debug build lands in `out\dbg\`.
pub const BAR_CSPROJ: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <AssemblyName>Bar</AssemblyName>
  </PropertyGroup>
  <PropertyGroup Condition=" '$(Configuration)|$(Platform)' == 'Debug|AnyCPU' ">
    <OutputPath>out\dbg\</OutputPath>
  </PropertyGroup>
</Project>
"#;

/// Two Web Sites, no libraries.
pub const TWO_SITES_SLN: &str = r#"Project("{E24C65DC-7377-472B-9ABA-BC803B73C61A}") = "Admin", "Admin\", "{A0000000-0000-0000-0000-000000000001}"
EndProject
Project("{E24C65DC-7377-472B-9ABA-BC803B73C61A}") = "Company.Shop", "Shop\", "{B0000000-0000-0000-0000-000000000002}"
	ProjectSection(WebsiteProperties) = preProject
		TargetFramework = "3.5"
	EndProjectSection
EndProject
"#;

/// Class libraries only.
pub const LIBRARY_ONLY_SLN: &str = r#"Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Core", "Core\Core.csproj", "{C0000000-0000-0000-0000-000000000001}"
EndProject
"#;
