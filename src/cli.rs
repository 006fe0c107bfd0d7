//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - CLI flags override config values (which are loaded from XML if present).
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};

/// Rename accented/non-ASCII filenames to their safe ASCII equivalents.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sanitize accented upload filenames to safe ASCII (Rust)"
)]
pub struct Args {
    /// File or directory to sanitize. Directories are walked recursively.
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub path: Option<PathBuf>,

    /// Show what would be renamed, but do not modify files.
    #[arg(long, help = "Show what would be renamed, but do not modify files")]
    pub dry_run: bool,

    /// Also fold sanitized names to lowercase (matches the upload-hook
    /// behavior; batch runs preserve case by default).
    #[arg(long, help = "Also fold sanitized names to lowercase")]
    pub lowercase: bool,

    /// Cap directory recursion at this depth.
    #[arg(long, value_name = "N", help = "Cap directory recursion at this depth")]
    pub max_depth: Option<usize>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where unaccent will look for the config file, then exit.
    #[arg(long, help = "Print the config file location used by unaccent and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset
    /// flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.lowercase {
            cfg.lowercase = true;
        }
        if let Some(depth) = self.max_depth {
            cfg.max_depth = Some(depth);
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
