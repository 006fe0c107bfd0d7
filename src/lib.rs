//! Core library for `unaccent`.
//!
//! Normalizes filenames containing accented or non-ASCII characters into
//! safe ASCII equivalents and renames the files on disk. Two engines do the
//! real work:
//!
//! - [`Transliterator`]: deterministic Unicode-to-ASCII conversion
//!   (mis-encoding repair, canonical composition, accent stripping, fallback
//!   transliteration, silent elimination of the rest).
//! - [`Relocator`]: resilient rename that finds a file on disk even when its
//!   name exists in an alternative Unicode composition form or carries a
//!   known mis-encoding, and never clobbers a correctly-named file.
//!
//! Both are pure/near-pure, never raise, and share one immutable
//! [`EncodingFixRules`] set built before processing starts. The rest of the
//! crate is orchestration: config, CLI, logging, and the parallel batch pass.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod output;
pub mod shutdown;
pub mod translit;
pub mod unicode;

pub use config::{Config, LogLevel};
pub use errors::UnaccentError;
pub use fs_ops::{plan_rename, sanitize_tree, BatchSummary, Relocator, RenameOutcome, RenameSource};
pub use translit::{EncodingFixRules, FixRule, Transliterator};
pub use unicode::{forms, CompositionForms};
