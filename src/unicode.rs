//! Unicode composition capability.
//! Canonical composition/decomposition is reified as a trait so the degraded
//! path (no normalization facility) is testable instead of an ad-hoc check.
//!
//! Notes:
//! - `forms()` detects the capability once; both the transliterator and the
//!   relocator receive the same provider.
//! - `Degraded` narrows candidate matching but must never fail: callers fall
//!   back to table lookups and the literal string.

use unicode_normalization::UnicodeNormalization;

/// Canonical composition forms (NFC/NFD) of a string.
pub trait CompositionForms: Send + Sync {
    /// Whether a real normalization facility backs this provider.
    fn available(&self) -> bool;

    /// Canonical composed form (NFC).
    fn compose(&self, s: &str) -> String;

    /// Canonical decomposed form (NFD).
    fn decompose(&self, s: &str) -> String;
}

/// Provider backed by `unicode-normalization`.
pub struct StdForms;

impl CompositionForms for StdForms {
    fn available(&self) -> bool {
        true
    }

    fn compose(&self, s: &str) -> String {
        s.nfc().collect()
    }

    fn decompose(&self, s: &str) -> String {
        s.nfd().collect()
    }
}

/// No-op provider for the capability-absent path.
/// Strings pass through untouched; composition-aware candidates vanish.
pub struct Degraded;

impl CompositionForms for Degraded {
    fn available(&self) -> bool {
        false
    }

    fn compose(&self, s: &str) -> String {
        s.to_string()
    }

    fn decompose(&self, s: &str) -> String {
        s.to_string()
    }
}

static STD_FORMS: StdForms = StdForms;

/// Detect the composition capability once at startup.
pub fn forms() -> &'static (dyn CompositionForms) {
    &STD_FORMS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_forms_compose_merges_combining_marks() {
        // "a" + COMBINING DIAERESIS composes to a single code point.
        let composed = StdForms.compose("a\u{0308}");
        assert_eq!(composed, "\u{00E4}");
    }

    #[test]
    fn std_forms_decompose_splits_precomposed() {
        let decomposed = StdForms.decompose("\u{00E4}");
        assert_eq!(decomposed, "a\u{0308}");
    }

    #[test]
    fn degraded_passes_through() {
        assert!(!Degraded.available());
        assert_eq!(Degraded.compose("\u{00E4}"), "\u{00E4}");
        assert_eq!(Degraded.decompose("\u{00E4}"), "\u{00E4}");
    }
}
