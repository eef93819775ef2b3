//! Shared JSON event types for consistent CLI output.
//!
//! Every event carries an `event` discriminator. Paths are rendered with
//! `Path::display`, so they are lossy on non-UTF-8 systems.

use serde::Serialize;
use sln2csproj::application::{ConvertResult, DependencyReport};
use sln2csproj::config::ConfigWarning;
use sln2csproj::domain::entities::WebsiteProject;

/// One Web Site found in the solution.
#[derive(Debug, Clone, Serialize)]
pub struct WebsiteEvent<'a> {
    pub event: &'static str,
    /// 1-based position, as accepted by `--pick`
    pub index: usize,
    pub name: &'a str,
    pub guid: &'a str,
    pub physical_path: &'a str,
    pub framework: &'a str,
    pub references: usize,
}

impl<'a> WebsiteEvent<'a> {
    pub fn new(index: usize, website: &'a WebsiteProject) -> Self {
        Self {
            event: "website",
            index,
            name: &website.name,
            guid: &website.guid,
            physical_path: &website.physical_path,
            framework: website.target_framework.as_str(),
            references: website.references.len(),
        }
    }
}

/// How one declared binary was resolved and placed.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyEvent<'a> {
    pub event: &'static str,
    pub dll: &'a str,
    pub guid: &'a str,
    pub from: String,
    pub resolved: String,
    pub hint: &'a str,
    pub guessed: bool,
}

impl<'a> DependencyEvent<'a> {
    pub fn new(report: &'a DependencyReport) -> Self {
        Self {
            event: "dependency",
            dll: &report.reference.dll_name,
            guid: &report.reference.target_guid,
            from: report.from_label(),
            resolved: report.resolution.resolved.display().to_string(),
            hint: &report.hint,
            guessed: report.resolution.provenance.is_guess(),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub websites: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn convert(result: &'a ConvertResult) -> Self {
        Self {
            event: "complete",
            command: "convert",
            success: true,
            website: Some(&result.website.name),
            descriptor: Some(result.descriptor_path.display().to_string()),
            manifest: Some(result.manifest_path.display().to_string()),
            mode: Some(result.mode.as_str()),
            references: Some(result.dependencies.len()),
            websites: None,
        }
    }

    pub fn check(websites: usize, success: bool) -> Self {
        Self {
            event: "complete",
            command: "check",
            success,
            website: None,
            descriptor: None,
            manifest: None,
            mode: None,
            references: None,
            websites: Some(websites),
        }
    }
}

/// Non-fatal problem worth surfacing.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            message: message.into(),
            file: None,
            line: None,
        }
    }

    pub fn config(warning: &ConfigWarning) -> Self {
        let mut message = format!("unknown config key '{}'", warning.key);
        if let Some(suggestion) = &warning.suggestion {
            message.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }
        Self {
            event: "warning",
            message,
            file: Some(warning.file.display().to_string()),
            line: warning.line,
        }
    }
}

/// Event emitted for a fatal error.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub message: &'a str,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            event: "error",
            message,
        }
    }
}
