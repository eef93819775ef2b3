mod common;

use common::*;

#[test]
fn test_project_config_sets_mode_and_out_dir() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);
    env.write(
        "sln2csproj.toml",
        "[convert]\nout_dir = \"ide\"\nmode = \"link\"\n",
    );

    let result = env.run(&["Foo.sln"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.path("ide/Foo/Foo.intellisense.csproj").is_file());
    assert!(!env.path("ide/Foo/refs").exists());
}

#[test]
fn test_cli_flags_beat_project_config() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);
    env.write("sln2csproj.toml", "[convert]\nout_dir = \"ide\"\n");

    let result = env.run(&["Foo.sln", "--out-dir", "cli"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.path("cli/Foo").is_dir());
    assert!(!env.path("ide").exists());
}

#[test]
fn test_env_beats_project_config() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);
    env.write("sln2csproj.toml", "[convert]\nout_dir = \"ide\"\n");

    let result = env.run_with_env(&["Foo.sln"], &[("SLN2CSPROJ_OUT_DIR", "from-env")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.path("from-env/Foo").is_dir());
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_is_lowest_file_layer() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);
    env.write_user_config("[convert]\nout_dir = \"user\"\nmode = \"link\"\n");
    env.write("sln2csproj.toml", "[convert]\nout_dir = \"project\"\n");

    let result = env.run(&["Foo.sln"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.path("project/Foo").is_dir());
    // mode still comes from the user layer
    assert!(!env.path("project/Foo/refs").exists());
}

#[test]
fn test_unknown_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);
    env.write("sln2csproj.toml", "[convert]\nmdoe = \"link\"\n");

    let result = env.run(&["Foo.sln"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key 'mdoe'"));
    assert!(result.stderr.contains("Did you mean 'mode'?"));
}

#[test]
fn test_broken_project_config_is_fatal() {
    let env = TestEnv::new();
    env.write("Foo.sln", FOO_SLN);
    env.write("sln2csproj.toml", "[convert\nmode = ");

    let result = env.run(&["Foo.sln"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid configuration"));
    assert!(!env.path("tools").exists());
}
