//! Filename transliteration.
//! Turns arbitrary Unicode names into printable-ASCII equivalents in a fixed
//! order: mis-encoding repair, canonical composition, accent stripping via
//! decomposition, ASCII fallback table, and finally silent elimination of
//! anything still unrepresentable.
//!
//! The result is idempotent and never an error; lossy elimination of unmapped
//! code points is defined behavior, not a fault. Lowercasing is caller
//! policy and therefore a separate operation.

mod fix;
mod table;

pub use fix::{EncodingFixRules, FixRule};

use crate::unicode::CompositionForms;

/// Deterministic Unicode-to-ASCII filename transliterator.
///
/// Stateless apart from its rule set and composition provider, both fixed at
/// construction. Cheap to share across threads.
pub struct Transliterator {
    rules: EncodingFixRules,
    forms: &'static dyn CompositionForms,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(EncodingFixRules::default())
    }
}

impl Transliterator {
    /// Transliterator with the detected composition capability.
    pub fn new(rules: EncodingFixRules) -> Self {
        Self::with_forms(rules, crate::unicode::forms())
    }

    /// Transliterator with an explicit composition provider (degraded mode,
    /// tests).
    pub fn with_forms(rules: EncodingFixRules, forms: &'static dyn CompositionForms) -> Self {
        Self { rules, forms }
    }

    /// The rule set this transliterator repairs mis-encodings with.
    pub fn rules(&self) -> &EncodingFixRules {
        &self.rules
    }

    /// ASCII-safe form of `input`. Pure; never fails; idempotent.
    ///
    /// Already-ASCII input comes back unchanged. Path separators survive, so
    /// the function is safe to run over full paths as well as basenames.
    pub fn normalize(&self, input: &str) -> String {
        let repaired = self.rules.apply(input);
        let composed = if self.forms.available() {
            self.forms.compose(&repaired)
        } else {
            repaired
        };

        let mut out = String::with_capacity(composed.len());
        for ch in composed.chars() {
            self.push_ascii(ch, &mut out);
        }
        out
    }

    /// `normalize` plus ASCII lowercasing, for call sites that also fold
    /// case (e.g. fresh uploads). Kept distinct from `normalize` on purpose.
    pub fn normalize_lower(&self, input: &str) -> String {
        self.normalize(input).to_ascii_lowercase()
    }

    fn push_ascii(&self, ch: char, out: &mut String) {
        if is_printable_ascii(ch) {
            out.push(ch);
            return;
        }
        if let Some(rep) = table::ascii_fallback(ch) {
            out.push_str(rep);
            return;
        }
        if self.forms.available() {
            // Split composed characters into base letter + combining marks;
            // keep what maps to ASCII, drop the marks.
            let mut buf = [0u8; 4];
            for part in self.forms.decompose(ch.encode_utf8(&mut buf)).chars() {
                if is_printable_ascii(part) {
                    out.push(part);
                } else if let Some(rep) = table::ascii_fallback(part) {
                    out.push_str(rep);
                }
            }
        }
        // No mapping anywhere: the code point is dropped, not replaced.
    }
}

fn is_printable_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}
