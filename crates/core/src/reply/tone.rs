use serde::{Deserialize, Serialize};

/// Stylistic register of a generated reply.
///
/// `Default` is what any unrecognized label resolves to. It is a normal
/// value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Formal,
    SemiFormal,
    Friendly,
    Default,
}

impl Tone {
    /// Labels accepted as named tones.
    pub const LABELS: [&'static str; 3] = ["formal", "semi-formal", "friendly"];

    /// Resolve a caller-supplied label. Matching is exact.
    pub fn from_label(label: &str) -> Self {
        match label {
            "formal" => Tone::Formal,
            "semi-formal" => Tone::SemiFormal,
            "friendly" => Tone::Friendly,
            _ => Tone::Default,
        }
    }

    /// Phrase embedded in the prompt for this tone.
    pub fn description(&self) -> &'static str {
        match self {
            Tone::Formal => "formal and professional",
            Tone::SemiFormal => "semi-formal and polite but approachable",
            Tone::Friendly => "friendly and warm while remaining professional",
            Tone::Default => "professional",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Tone::Default)
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(Tone::from_label("formal"), Tone::Formal);
        assert_eq!(Tone::from_label("semi-formal"), Tone::SemiFormal);
        assert_eq!(Tone::from_label("friendly"), Tone::Friendly);
    }

    #[test]
    fn test_unknown_label_falls_back() {
        assert_eq!(Tone::from_label("invalid_tone"), Tone::Default);
        assert_eq!(Tone::from_label(""), Tone::Default);
        assert_eq!(Tone::Default.description(), "professional");
        assert!(!Tone::Default.is_recognized());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(Tone::from_label("Formal"), Tone::Default);
        assert_eq!(Tone::from_label(" friendly"), Tone::Default);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Tone::Formal.description(), "formal and professional");
        assert_eq!(
            Tone::SemiFormal.description(),
            "semi-formal and polite but approachable"
        );
        assert_eq!(
            Tone::Friendly.description(),
            "friendly and warm while remaining professional"
        );
    }

    #[test]
    fn test_every_label_is_recognized() {
        for label in Tone::LABELS {
            assert!(Tone::from_label(label).is_recognized(), "{label}");
        }
    }
}
