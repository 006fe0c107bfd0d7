//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the signal handler,
//! builds the transliterator and relocator, and runs the batch pass.
//!
//! The core never raises; everything that can go wrong at this layer is
//! either an UnaccentError (typed, logged with a stable code) or a non-zero
//! failure count surfaced in the summary.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use crate::cli::Args;
use crate::config::{self, Config, CONFIG_ENV};
use crate::errors::UnaccentError;
use crate::fs_ops::{sanitize_tree, Relocator};
use crate::logging::init_tracing;
use crate::output as out;
use crate::shutdown;
use crate::translit::Transliterator;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init.
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}"));
            return Ok(());
        }
        match config::default_config_path() {
            Some(p) => {
                out::print_info(&format!("Default unaccent config path:\n  {}", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info(
                        "No config file exists there yet. Run without --print-config to create a template.",
                    );
                }
            }
            None => out::print_error("Could not determine a default config path."),
        }
        return Ok(());
    }

    // Create template config if none exists (before logging init).
    if let Some(path) = config::ensure_default_config_exists() {
        out::print_success(&format!(
            "A template unaccent config was written to: {}",
            path.display()
        ));
        out::print_info(
            "Edit the file to set `lowercase`, `log_level`, `log_file` and extra `encoding_fix` rules, then re-run.",
        );
    }

    // Config file values, then CLI overrides (CLI wins).
    let mut cfg = config::load_config()?;
    args.apply_overrides(&mut cfg);

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    // Guard needs to be dropped on SIGINT to flush logs.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; finishing in-flight renames...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .expect("failed to install signal handler");
    }

    debug!("Starting unaccent: {:?}", args);

    let result = run_inner(&args, &cfg);

    // Ensure logs are flushed before exit.
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn run_inner(args: &Args, cfg: &Config) -> Result<()> {
    let Some(target) = args.path.as_deref() else {
        out::print_error("No target path given. Usage: unaccent <PATH> [--dry-run] [--lowercase]");
        return Err(anyhow::anyhow!("no target path given"));
    };

    // Rule set is fixed before the first rename and shared by both engines.
    let rules = cfg.rules();
    let translit = Transliterator::new(rules.clone());
    let relocator = Relocator::new(rules);

    match sanitize_tree(cfg, &translit, &relocator, target) {
        Ok(summary) => {
            if cfg.dry_run {
                out::print_success(&format!(
                    "Dry-run: {} file(s) would be renamed, {} already clean, {} skipped.",
                    summary.renamed, summary.unchanged, summary.failed
                ));
            } else {
                out::print_success(&format!(
                    "Renamed {} file(s), {} already clean, {} failed.",
                    summary.renamed, summary.unchanged, summary.failed
                ));
            }
            info!(
                renamed = summary.renamed,
                unchanged = summary.unchanged,
                failed = summary.failed,
                dry_run = cfg.dry_run,
                "sanitization pass complete"
            );
            if summary.failed > 0 && !cfg.dry_run {
                return Err(anyhow::anyhow!("{} rename(s) failed", summary.failed));
            }
            Ok(())
        }
        Err(e) => {
            if let Some(ue) = e.downcast_ref::<UnaccentError>() {
                let code = ue.code();
                match ue {
                    UnaccentError::TargetNotFound(path) => {
                        error!(code, kind = "target_not_found", path = %path.display(), "Sanitization failed")
                    }
                    UnaccentError::TargetInvalid(path) => {
                        error!(code, kind = "target_invalid", path = %path.display(), "Sanitization failed")
                    }
                    UnaccentError::Interrupted => {
                        error!(code, kind = "interrupted", "Sanitization aborted by user")
                    }
                }
            } else {
                error!(error = ?e, "Sanitization failed");
            }
            Err(e)
        }
    }
}
