//! Batch sanitization pass.
//! Walks a target file or directory, computes the ASCII-safe name for every
//! regular file, and relocates the ones whose name changes. Directory names
//! are left alone; only file basenames are rewritten.
//!
//! Each rename is independent, so execution is parallel over distinct paths.
//! A failed relocate is logged and counted, never fatal: the caller decides
//! what a partial batch means.

use anyhow::Result;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::errors::UnaccentError;
use crate::fs_ops::Relocator;
use crate::shutdown;
use crate::translit::Transliterator;

/// Outcome counts for one batch pass. In dry-run mode `renamed` counts the
/// files that *would* be renamed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub renamed: usize,
    pub failed: usize,
    pub unchanged: usize,
}

/// Sanitized destination for `path`, directory component preserved.
/// `None` when the name is already clean, has no UTF-8 basename, or would
/// sanitize to an empty string (renaming to "" helps nobody).
pub fn plan_rename(translit: &Transliterator, lowercase: bool, path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let sanitized = if lowercase {
        translit.normalize_lower(name)
    } else {
        translit.normalize(name)
    };
    if sanitized.is_empty() || sanitized == name {
        return None;
    }
    Some(path.with_file_name(sanitized))
}

/// Sanitize every regular file under `target` (or `target` itself when it is
/// a file). Never fails on individual renames; fails only when the target is
/// unusable or the run is interrupted before it starts.
pub fn sanitize_tree(
    cfg: &Config,
    translit: &Transliterator,
    relocator: &Relocator,
    target: &Path,
) -> Result<BatchSummary> {
    if !target.exists() {
        return Err(UnaccentError::TargetNotFound(target.to_path_buf()).into());
    }
    if !(target.is_file() || target.is_dir()) {
        return Err(UnaccentError::TargetInvalid(target.to_path_buf()).into());
    }
    if shutdown::is_requested() {
        return Err(UnaccentError::Interrupted.into());
    }

    let mut walker = WalkDir::new(target);
    if let Some(depth) = cfg.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut plans: Vec<(PathBuf, PathBuf)> = Vec::new();
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    let mut scanned = 0usize;
    let mut collisions = 0usize;

    for entry in walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        scanned += 1;
        let src = entry.into_path();
        let Some(dest) = plan_rename(translit, cfg.lowercase, &src) else {
            debug!(path = %src.display(), "name already clean");
            continue;
        };
        // Two sources can sanitize to the same destination within one run;
        // the first claim wins, the rest stay put.
        if !claimed.insert(dest.clone()) {
            warn!(
                src = %src.display(),
                dest = %dest.display(),
                "sanitized name collides with an earlier file in this run; skipping"
            );
            collisions += 1;
            continue;
        }
        plans.push((src, dest));
    }

    let unchanged = scanned - plans.len() - collisions;

    if cfg.dry_run {
        for (src, dest) in &plans {
            info!(src = %src.display(), dest = %dest.display(), "dry-run: would rename");
        }
        return Ok(BatchSummary {
            renamed: plans.len(),
            failed: collisions,
            unchanged,
        });
    }

    let renamed = AtomicUsize::new(0);
    let failed = AtomicUsize::new(collisions);

    plans.par_iter().for_each(|(src, dest)| {
        if shutdown::is_requested() {
            failed.fetch_add(1, Ordering::Relaxed);
            return;
        }
        if relocator.relocate(src, dest) {
            info!(src = %src.display(), dest = %dest.display(), "renamed");
            renamed.fetch_add(1, Ordering::Relaxed);
        } else {
            warn!(
                src = %src.display(),
                dest = %dest.display(),
                "rename failed under every candidate spelling; skipping"
            );
            failed.fetch_add(1, Ordering::Relaxed);
        }
    });

    Ok(BatchSummary {
        renamed: renamed.into_inner(),
        failed: failed.into_inner(),
        unchanged,
    })
}
