//! Resilient rename.
//! A file indexed by the filesystem may be spelled differently from the path
//! string we hold: composed vs. decomposed Unicode, or a name garbled by an
//! earlier cross-platform copy. `Relocator` retries the rename under each
//! alternative spelling until one works.
//!
//! Failures are values here, never exceptions: every I/O error during an
//! attempt is absorbed as "this candidate did not work" so the caller can
//! decide whether a `false` blocks its own follow-up work.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::translit::EncodingFixRules;
use crate::unicode::CompositionForms;

/// Which spelling of the source path the rename finally succeeded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameSource {
    /// The literal `old_path` argument.
    Direct,
    /// `old_path` re-encoded to canonical composed form (NFC).
    Composed,
    /// `old_path` re-encoded to canonical decomposed form (NFD), the legacy
    /// on-disk spelling of composition-preserving filesystems.
    Decomposed,
    /// `old_path` with known mis-encodings repaired.
    EncodingFixed,
}

/// Result of a relocate attempt. Most callers only need `succeeded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameOutcome {
    pub succeeded: bool,
    /// The winning candidate, when any attempt succeeded.
    pub source: Option<RenameSource>,
}

impl RenameOutcome {
    const FAILED: Self = Self { succeeded: false, source: None };

    fn via(source: RenameSource) -> Self {
        Self { succeeded: true, source: Some(source) }
    }
}

/// Rename engine that retries under alternative spellings of the source.
///
/// Stateless between calls; concurrent use on disjoint paths is safe. Racing
/// calls on the same pair must be serialized by the caller.
pub struct Relocator {
    rules: EncodingFixRules,
    forms: &'static dyn CompositionForms,
}

impl Default for Relocator {
    fn default() -> Self {
        Self::new(EncodingFixRules::default())
    }
}

impl Relocator {
    /// Relocator with the detected composition capability.
    pub fn new(rules: EncodingFixRules) -> Self {
        Self::with_forms(rules, crate::unicode::forms())
    }

    /// Relocator with an explicit composition provider (degraded mode, tests).
    pub fn with_forms(rules: EncodingFixRules, forms: &'static dyn CompositionForms) -> Self {
        Self { rules, forms }
    }

    /// Move the file at `old_path` (under whichever spelling the filesystem
    /// holds it) to `new_path`. Returns whether any attempt succeeded.
    pub fn relocate(&self, old_path: &Path, new_path: &Path) -> bool {
        self.relocate_with_outcome(old_path, new_path).succeeded
    }

    /// Like [`relocate`](Self::relocate) but reports the winning candidate.
    pub fn relocate_with_outcome(&self, old_path: &Path, new_path: &Path) -> RenameOutcome {
        // Never clobber a file that is already correctly named. std's rename
        // overwrites on Unix, so the guard must precede the direct attempt.
        if new_path.exists() {
            warn!(
                dest = %new_path.display(),
                "destination already exists; refusing to relocate"
            );
            return RenameOutcome::FAILED;
        }

        match fs::rename(old_path, new_path) {
            Ok(()) => {
                debug!(src = %old_path.display(), dest = %new_path.display(), "renamed directly");
                return RenameOutcome::via(RenameSource::Direct);
            }
            Err(e) => {
                debug!(
                    src = %old_path.display(),
                    error = %e,
                    "direct rename failed; trying alternative spellings"
                );
            }
        }

        for (source, candidate) in self.candidates(old_path) {
            if candidate == old_path {
                continue;
            }
            if !candidate.exists() {
                continue;
            }
            match fs::rename(&candidate, new_path) {
                Ok(()) => {
                    debug!(
                        src = %candidate.display(),
                        dest = %new_path.display(),
                        candidate = ?source,
                        "renamed via alternative spelling"
                    );
                    return RenameOutcome::via(source);
                }
                Err(e) => {
                    debug!(
                        src = %candidate.display(),
                        error = %e,
                        candidate = ?source,
                        "candidate rename failed"
                    );
                }
            }
        }

        RenameOutcome::FAILED
    }

    /// Ordered alternative spellings of `old_path`. Composition forms come
    /// first (the common case); mis-encoding repair last. Non-UTF-8 paths
    /// have no alternative spellings.
    fn candidates(&self, old_path: &Path) -> Vec<(RenameSource, PathBuf)> {
        let Some(s) = old_path.to_str() else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(3);
        if self.forms.available() {
            out.push((RenameSource::Composed, PathBuf::from(self.forms.compose(s))));
            out.push((RenameSource::Decomposed, PathBuf::from(self.forms.decompose(s))));
        }
        if !self.rules.is_empty() {
            out.push((RenameSource::EncodingFixed, PathBuf::from(self.rules.apply(s))));
        }
        out
    }
}
