//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Only logging can be configured; the request itself is fixed.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_LOG_LEVEL;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
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

/// Command-line options.
///
/// Logs go to stderr and never mix with the response printed on stdout.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use post_fetch::{Config, LogLevel};
///
/// let config = Config::parse_from(["post_fetch", "--log-level", "debug"]);
/// assert_eq!(config.log_level, LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "post_fetch", version, about)]
pub struct Config {
    /// Log level
    #[arg(long, value_enum, default_value_t = DEFAULT_LOG_LEVEL)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

/// Result of [`Config::parse_lenient`].
#[derive(Debug)]
pub enum ParsedArgs {
    /// Options to run with, plus the parse error if the arguments were
    /// ignored in favour of the defaults.
    Run(Config, Option<clap::Error>),
    /// `--help` or `--version` was requested; the error carries the text.
    Exit(clap::Error),
}

impl Config {
    /// Parses options without ever refusing to run.
    ///
    /// Arguments that do not parse fall back to [`Config::default`], so the
    /// request is still made. Only help and version requests stop the run.
    pub fn parse_lenient<I, T>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Config::try_parse_from(args) {
            Ok(config) => ParsedArgs::Run(config, None),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                ParsedArgs::Exit(e)
            }
            Err(e) => ParsedArgs::Run(Config::default(), Some(e)),
        }
    }
}
