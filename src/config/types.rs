//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_CONCURRENCY, DEFAULT_USER_AGENT, PROBE_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable report
    Plain,
    /// One JSON object per URL (JSON Lines)
    Json,
}

/// When the CLI should exit with a non-zero status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once every URL has been analyzed
    Never,
    /// Exit with a dedicated code if any URL is judged unsafe
    Unsafe,
}

/// Audit configuration.
///
/// Parsed from the command line by the binary, or constructed
/// programmatically by library users.
///
/// # Examples
///
/// ```no_run
/// use phish_audit::Config;
///
/// let config = Config {
///     urls: vec!["https://example.com".to_string()],
///     check_reachability: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "phish_audit",
    version,
    about = "Audits URLs for phishing indicators and prints a heuristic risk report"
)]
pub struct Config {
    /// URLs to audit (a scheme is optional)
    pub urls: Vec<String>,

    /// File to read URLs from, one per line ("-" for stdin)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Report output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Probe each URL with a HEAD request (informational, never affects the verdict)
    #[arg(long)]
    pub check_reachability: bool,

    /// Maximum concurrent reachability probes
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Reachability probe timeout in seconds
    #[arg(long, default_value_t = PROBE_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value for reachability probes
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print recommendations even for URLs judged safe
    #[arg(long)]
    pub always_recommend: bool,

    /// Exit non-zero when this condition is met
    #[arg(long, value_enum, default_value = "never")]
    pub fail_on: FailOn,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            file: None,
            format: OutputFormat::Plain,
            check_reachability: false,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: PROBE_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            always_recommend: false,
            fail_on: FailOn::Never,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.urls.is_empty());
        assert!(config.file.is_none());
        assert_eq!(config.format, OutputFormat::Plain);
        assert!(!config.check_reachability);
        assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.fail_on, FailOn::Never);
        assert!(!config.always_recommend);
    }

    #[test]
    fn test_parse_minimal_args() {
        let config = Config::try_parse_from(["phish_audit", "example.com"]).unwrap();
        assert_eq!(config.urls, vec!["example.com".to_string()]);
        assert_eq!(config.format, OutputFormat::Plain);
        assert_eq!(config.fail_on, FailOn::Never);
    }

    #[test]
    fn test_parse_all_flags() {
        let config = Config::try_parse_from([
            "phish_audit",
            "--file",
            "urls.txt",
            "--format",
            "json",
            "--check-reachability",
            "--max-concurrency",
            "3",
            "--timeout-seconds",
            "2",
            "--always-recommend",
            "--fail-on",
            "unsafe",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert!(config.urls.is_empty());
        assert_eq!(config.file, Some(PathBuf::from("urls.txt")));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.check_reachability);
        assert_eq!(config.max_concurrency, 3);
        assert_eq!(config.timeout_seconds, 2);
        assert!(config.always_recommend);
        assert_eq!(config.fail_on, FailOn::Unsafe);
        assert!(matches!(config.log_level, LogLevel::Debug));
        assert!(matches!(config.log_format, LogFormat::Json));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Config::try_parse_from(["phish_audit", "--format", "xml"]).is_err());
    }
}
