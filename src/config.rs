use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// How comparison results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Colored human-readable output (default)
    Text,
    /// Pretty-printed JSON report
    Json,
}

impl ReportFormat {
    /// Parse a DUPECHECK_REPORT_FORMAT value. Unset or blank means text.
    pub fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value.map(str::trim) {
            None | Some("") | Some("text") => Ok(ReportFormat::Text),
            Some("json") => Ok(ReportFormat::Json),
            Some(other) => anyhow::bail!(
                "DUPECHECK_REPORT_FORMAT must be \"text\" or \"json\", got \"{other}\""
            ),
        }
    }
}

/// Runtime configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Answer file used when `compare` is not given one (DUPECHECK_ANSWER_PATH)
    pub answer_path: Option<PathBuf>,
    /// Output format (DUPECHECK_REPORT_FORMAT = text | json)
    pub report_format: ReportFormat,
    /// Where to write the run profile, if profiling is on (DUPECHECK_PROFILE_PATH)
    pub profile_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails on an unrecognized DUPECHECK_REPORT_FORMAT.
    pub fn load() -> Result<Self> {
        let report_format =
            ReportFormat::from_env_value(env::var("DUPECHECK_REPORT_FORMAT").ok().as_deref())?;

        Ok(Self {
            answer_path: non_empty_path("DUPECHECK_ANSWER_PATH"),
            report_format,
            profile_path: non_empty_path("DUPECHECK_PROFILE_PATH"),
        })
    }
}

fn non_empty_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_values() {
        assert_eq!(ReportFormat::from_env_value(None).unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_env_value(Some("")).unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_env_value(Some("text")).unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_env_value(Some(" json ")).unwrap(), ReportFormat::Json);
    }

    #[test]
    fn test_report_format_rejects_unknown() {
        let err = ReportFormat::from_env_value(Some("yaml")).unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }
}
