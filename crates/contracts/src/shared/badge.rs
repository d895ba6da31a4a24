//! Status badge classification.
//!
//! Every entity carries a free-form status string on the wire; tables
//! render it as a badge. The classifier is total: any input, including
//! the empty string, maps to a defined label and variant.

use super::PLACEHOLDER;

/// Badge variant: "primary", "success", "warning", "error", "neutral".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

/// A classified status ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBadge {
    pub label: String,
    pub variant: BadgeVariant,
}

/// Per-entity status vocabulary: lower-cased match key, display label,
/// badge variant.
#[derive(Debug, Clone, Copy)]
pub struct StatusVocabulary {
    entries: &'static [(&'static str, &'static str, BadgeVariant)],
}

impl StatusVocabulary {
    pub const fn new(entries: &'static [(&'static str, &'static str, BadgeVariant)]) -> Self {
        Self { entries }
    }

    /// Classify a raw status string. Matching is case-insensitive after
    /// trimming; unknown values fall back to a neutral badge carrying
    /// the raw text, and empty input renders the placeholder.
    pub fn classify(&self, raw: &str) -> StatusBadge {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return StatusBadge {
                label: PLACEHOLDER.to_string(),
                variant: BadgeVariant::Neutral,
            };
        }
        let needle = trimmed.to_lowercase();
        for (key, label, variant) in self.entries {
            if *key == needle {
                return StatusBadge {
                    label: (*label).to_string(),
                    variant: *variant,
                };
            }
        }
        StatusBadge {
            label: trimmed.to_string(),
            variant: BadgeVariant::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCAB: StatusVocabulary = StatusVocabulary::new(&[
        ("active", "Active", BadgeVariant::Success),
        ("under maintenance", "Under maintenance", BadgeVariant::Warning),
        ("retired", "Retired", BadgeVariant::Neutral),
    ]);

    #[test]
    fn test_classify_is_case_insensitive() {
        for raw in ["Active", "active", "ACTIVE", "  aCtIvE "] {
            let badge = VOCAB.classify(raw);
            assert_eq!(badge.label, "Active");
            assert_eq!(badge.variant, BadgeVariant::Success);
        }
    }

    #[test]
    fn test_classify_unknown_is_neutral_and_deterministic() {
        let first = VOCAB.classify("decommissioned");
        let second = VOCAB.classify("decommissioned");
        assert_eq!(first, second);
        assert_eq!(first.variant, BadgeVariant::Neutral);
        assert_eq!(first.label, "decommissioned");
    }

    #[test]
    fn test_classify_empty_renders_placeholder() {
        let badge = VOCAB.classify("");
        assert_eq!(badge.label, "-");
        assert_eq!(badge.variant, BadgeVariant::Neutral);
        let badge = VOCAB.classify("   ");
        assert_eq!(badge.label, "-");
    }

    #[test]
    fn test_multi_word_status() {
        let badge = VOCAB.classify("Under Maintenance");
        assert_eq!(badge.label, "Under maintenance");
        assert_eq!(badge.variant, BadgeVariant::Warning);
    }
}
