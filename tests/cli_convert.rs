mod common;

use common::*;

#[test]
fn test_convert_without_builds_links_to_site_bin() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);

    let result = env.run(&["Foo.sln"]);

    assert!(result.success, "convert failed:\n{}", result.combined_output());
    let out = default_out(env.root.path(), "Foo");
    assert!(out.join("Foo.intellisense.csproj").is_file());
    assert!(out.join("fake_Foo.sln").is_file());

    let descriptor = env.read("tools/_intellisense/Foo/Foo.intellisense.csproj");
    assert!(descriptor.contains("<TargetFrameworkVersion>v4.0</TargetFrameworkVersion>"));
    assert!(descriptor.contains("<HintPath>..\\..\\..\\FooSite\\Bin\\Bar.dll</HintPath>"));
    assert!(descriptor.contains("<Compile Include=\"..\\..\\..\\FooSite\\**\\*.cs\""));

    let manifest = env.read("tools/_intellisense/Foo/fake_Foo.sln");
    assert!(manifest.contains(
        "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Foo\", \"Foo.intellisense.csproj\", \"{F0000000-0000-0000-0000-000000000001}\""
    ));
    assert!(manifest.contains("\"Bar\", \"..\\..\\..\\Bar\\Bar.csproj\""));
    assert!(!manifest.contains("WebsiteProperties"));
    assert!(manifest.contains("GlobalSection(SolutionConfigurationPlatforms)"));

    assert!(result.stdout.contains("Foo"));
    assert!(result.stdout.contains("v4.0"));
    assert!(result.stdout.contains("fake_Foo.sln"));
    assert!(result.stdout.contains("1 reference(s) not found on disk"));
}

#[test]
fn test_convert_copies_debug_output_into_refs() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);
    env.write("Bar/Bar.csproj", BAR_CSPROJ);
    env.touch_binary("Bar/out/dbg/Bar.dll");

    let result = env.run(&["Foo.sln", "--verbose"]);

    assert!(result.success, "convert failed:\n{}", result.combined_output());
    assert!(env.path("tools/_intellisense/Foo/refs/Bar.dll").is_file());

    let descriptor = env.read("tools/_intellisense/Foo/Foo.intellisense.csproj");
    assert!(descriptor.contains("<HintPath>refs\\Bar.dll</HintPath>"));

    assert!(result.stdout.contains("Bar.dll"));
    assert!(result.stdout.contains("from: csproj:Debug OutputPath"));
    assert!(result.stdout.contains("hint: refs\\Bar.dll"));
    assert!(!result.stdout.contains("not found on disk"));
}

#[test]
fn test_convert_link_mode_points_at_build_output() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);
    env.write("Bar/Bar.csproj", BAR_CSPROJ);
    env.touch_binary("Bar/out/dbg/Bar.dll");

    let result = env.run(&["Foo.sln", "--mode", "link"]);

    assert!(result.success, "convert failed:\n{}", result.combined_output());
    assert!(!env.path("tools/_intellisense/Foo/refs").exists());

    let descriptor = env.read("tools/_intellisense/Foo/Foo.intellisense.csproj");
    assert!(descriptor.contains("<HintPath>..\\..\\..\\Bar\\out\\dbg\\Bar.dll</HintPath>"));
    assert!(result.stdout.contains("link"));
}

#[test]
fn test_convert_falls_back_to_conventional_bin() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);
    env.touch_binary("Bar/bin/Release/Bar.dll");

    let result = env.run(&["Foo.sln", "-v"]);

    assert!(result.success, "convert failed:\n{}", result.combined_output());
    assert!(result.stdout.contains("from: fallback:bin"));
    assert!(env.path("tools/_intellisense/Foo/refs/Bar.dll").is_file());
}

#[test]
fn test_convert_pick_and_out_dir() {
    let env = TestEnv::new();
    env.write("Two.sln", TWO_SITES_SLN);

    let result = env.run(&["Two.sln", "--pick", "2", "--out-dir", "gen"]);

    assert!(result.success, "convert failed:\n{}", result.combined_output());
    assert!(env.path("gen/Company.Shop/Company.Shop.intellisense.csproj").is_file());
    assert!(env.path("gen/Company.Shop/fake_Company.Shop.sln").is_file());
    assert!(!env.path("gen/Admin").exists());

    let descriptor = env.read("gen/Company.Shop/Company.Shop.intellisense.csproj");
    assert!(descriptor.contains("<RootNamespace>Company_Shop</RootNamespace>"));
    assert!(descriptor.contains("<TargetFrameworkVersion>v3.5</TargetFrameworkVersion>"));
    assert!(result.stdout.contains("Company.Shop (2 of 2)"));
}

#[test]
fn test_convert_pick_out_of_range_is_clamped() {
    let env = TestEnv::new();
    env.write("Two.sln", TWO_SITES_SLN);

    let high = env.run(&["Two.sln", "--pick", "9"]);
    let zero = env.run(&["Two.sln", "--pick", "0"]);

    assert!(high.success && zero.success);
    assert!(env.path("tools/_intellisense/Company.Shop").is_dir());
    assert!(env.path("tools/_intellisense/Admin").is_dir());
}

#[test]
fn test_convert_solution_in_subdirectory() {
    let env = TestEnv::new();
    env.write("src/Foo.sln", FOO_SLN);

    let result = env.run(&["src/Foo.sln"]);

    assert!(result.success, "convert failed:\n{}", result.combined_output());
    assert!(env
        .path("src/tools/_intellisense/Foo/Foo.intellisense.csproj")
        .is_file());
}

#[test]
fn test_convert_rerun_replaces_outputs() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);

    assert!(env.run(&["Foo.sln"]).success);
    let first = env.read("tools/_intellisense/Foo/Foo.intellisense.csproj");

    env.write("Bar/Bar.csproj", BAR_CSPROJ);
    env.touch_binary("Bar/out/dbg/Bar.dll");
    assert!(env.run(&["Foo.sln"]).success);
    let second = env.read("tools/_intellisense/Foo/Foo.intellisense.csproj");

    assert_ne!(first, second);
    assert!(second.contains("<HintPath>refs\\Bar.dll</HintPath>"));
}

#[test]
fn test_convert_keeps_crlf_line_endings() {
    let env = TestEnv::new();
    env.write("Foo.sln", &FOO_SLN.replace('\n', "\r\n"));

    let result = env.run(&["Foo.sln"]);

    assert!(result.success, "convert failed:\n{}", result.combined_output());
    let manifest = env.read("tools/_intellisense/Foo/fake_Foo.sln");
    assert!(manifest.contains("\"{F0000000-0000-0000-0000-000000000001}\"\r\nEndProject"));
    assert!(!manifest.replace("\r\n", "").contains('\n'));
}
