//! What the attached terminal can show

use is_terminal::IsTerminal;

/// Environment variables set by CI services, including the ones .NET
/// solutions are usually built on
const CI_KEYS: &[&str] = &[
    "CI",
    "TF_BUILD",
    "APPVEYOR",
    "TEAMCITY_VERSION",
    "JENKINS_HOME",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
];

const LOCALE_KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Probe stdout and the process environment
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    fn from_env(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
        let no_color = get_env("NO_COLOR").is_some();

        Self {
            is_tty,
            supports_color: is_tty && !dumb && !no_color,
            supports_unicode: !dumb && !ascii_locale(&get_env),
            is_ci: CI_KEYS.iter().any(|k| get_env(k).is_some()),
        }
    }
}

/// The first locale variable that is set decides; `C` and `POSIX` mean
/// ASCII. With none set, unicode is assumed.
fn ascii_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    LOCALE_KEYS
        .iter()
        .find_map(|k| get_env(k).filter(|v| !v.is_empty()))
        .is_some_and(|v| v.eq_ignore_ascii_case("c") || v.eq_ignore_ascii_case("posix"))
}
