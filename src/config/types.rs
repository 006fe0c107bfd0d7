//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::translit::{EncodingFixRules, FixRule};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for a sanitization run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Also fold sanitized names to lowercase (upload-hook behavior).
    /// Batch runs over existing content preserve case by default.
    pub lowercase: bool,
    /// Print planned renames but do not touch the filesystem.
    pub dry_run: bool,
    /// Cap on directory recursion depth (None = unlimited).
    pub max_depth: Option<usize>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Extra mis-encoding repair rules, appended to the built-in defaults.
    pub encoding_fixes: Vec<FixRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lowercase: false,
            dry_run: false,
            max_depth: None,
            log_level: LogLevel::Normal,
            log_file: None,
            encoding_fixes: Vec::new(),
        }
    }
}

impl Config {
    /// Effective repair rule set: built-in defaults extended (or overridden)
    /// by the configured extras, in order. Built once per run and treated as
    /// immutable afterwards.
    pub fn rules(&self) -> EncodingFixRules {
        let mut rules = EncodingFixRules::default();
        rules.extend(self.encoding_fixes.iter().cloned());
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_aliases() {
        assert_eq!(LogLevel::parse("ERROR"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn configured_fixes_extend_the_defaults() {
        let cfg = Config {
            encoding_fixes: vec![FixRule { from: "Ã©".into(), to: "é".into() }],
            ..Default::default()
        };
        let rules = cfg.rules();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules.apply("cafÃ© Ã¤"), "café ä");
    }
}
