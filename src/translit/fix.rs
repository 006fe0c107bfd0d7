//! Mis-encoding repair rules.
//! An ordered list of `corrupted substring -> corrected substring` pairs,
//! applied before any other normalization step. The default set covers the
//! two UTF-8-read-as-Latin-1 corruptions we see most in migrated uploads.
//!
//! The set is build-once: the orchestrator extends it before processing
//! starts and the transliterator/relocator only ever read it.

use serde::{Deserialize, Serialize};

/// A single repair entry, also the shape used in the XML config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixRule {
    /// Garbled substring as it appears in the corrupted name.
    #[serde(rename = "@from")]
    pub from: String,
    /// Correct replacement.
    #[serde(rename = "@to")]
    pub to: String,
}

/// Ordered mapping of known byte-level mis-encodings to their corrections.
#[derive(Debug, Clone)]
pub struct EncodingFixRules {
    rules: Vec<FixRule>,
}

impl Default for EncodingFixRules {
    fn default() -> Self {
        // "ä" and "ö" encoded as UTF-8 but decoded as Latin-1.
        Self {
            rules: vec![
                FixRule { from: "\u{00C3}\u{00A4}".into(), to: "ä".into() },
                FixRule { from: "\u{00C3}\u{00B6}".into(), to: "ö".into() },
            ],
        }
    }
}

impl EncodingFixRules {
    /// Empty rule set (repair disabled).
    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule, or override the correction if `from` is already known.
    pub fn push(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into();
        let to = to.into();
        if let Some(existing) = self.rules.iter_mut().find(|r| r.from == from) {
            existing.to = to;
        } else {
            self.rules.push(FixRule { from, to });
        }
    }

    /// Append/override a batch of rules, keeping insertion order.
    pub fn extend<I: IntoIterator<Item = FixRule>>(&mut self, rules: I) {
        for rule in rules {
            self.push(rule.from, rule.to);
        }
    }

    /// Apply every rule in order. A no-op for strings without known garbling.
    pub fn apply(&self, input: &str) -> String {
        let mut out = input.to_string();
        for rule in &self.rules {
            if out.contains(&rule.from) {
                out = out.replace(&rule.from, &rule.to);
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_repair_latin1_garbling() {
        let rules = EncodingFixRules::default();
        assert_eq!(rules.apply("Ã¤Ã¤kkÃ¶nen.png"), "ääkkönen.png");
    }

    #[test]
    fn apply_is_a_noop_for_clean_names() {
        let rules = EncodingFixRules::default();
        assert_eq!(rules.apply("aakkonen.png"), "aakkonen.png");
    }

    #[test]
    fn push_overrides_existing_key() {
        let mut rules = EncodingFixRules::none();
        rules.push("Ã©", "é");
        rules.push("Ã©", "e");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.apply("cafÃ©"), "cafe");
    }

    #[test]
    fn extend_keeps_insertion_order() {
        let mut rules = EncodingFixRules::default();
        rules.extend([FixRule { from: "Ã¥".into(), to: "å".into() }]);
        assert_eq!(rules.len(), 3);
        assert_eq!(rules.apply("blÃ¥bÃ¤r"), "blåbär");
    }
}
