//! Keyword-weighted relevance scoring gated on Turkish-language detection.

use crate::keywords::{KeywordKind, KeywordLists};

/// Characters that only occur in Turkish among the languages we see.
const TURKISH_CHARS: &[char] = &[
    'ı', 'ğ', 'ü', 'ş', 'ö', 'ç', 'İ', 'Ğ', 'Ü', 'Ş', 'Ö', 'Ç',
];

/// Common Turkish function words; two or more hits mark the text as Turkish.
const TURKISH_HINT_WORDS: &[&str] = &[
    "ve", "bir", "için", "icin", "ile", "gibi", "olan", "üzerine", "uzerine",
];

const MIN_HINT_WORD_HITS: usize = 2;

/// Points per distinct keyword matched in title + description.
const TEXT_WEIGHTS: &[(KeywordKind, u32)] = &[
    (KeywordKind::Core, 3),
    (KeywordKind::Edu, 2),
    (KeywordKind::Format, 1),
];

/// Points per distinct handle keyword matched in the handle.
const HANDLE_WEIGHT: u32 = 2;

/// Returns `true` if `text` looks Turkish.
///
/// Any Turkish-specific letter (either case) is sufficient. Otherwise at least
/// two of the hint words must appear as substrings of the lowercased text.
#[must_use]
pub fn is_probably_turkish(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if text.chars().any(|c| TURKISH_CHARS.contains(&c)) {
        return true;
    }

    let lower = text.to_lowercase();
    let hits = TURKISH_HINT_WORDS
        .iter()
        .filter(|word| lower.contains(*word))
        .count();
    hits >= MIN_HINT_WORD_HITS
}

/// Scores channel metadata against a fixed set of keyword lists.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    keywords: KeywordLists,
}

impl Scorer {
    #[must_use]
    pub fn new(keywords: KeywordLists) -> Self {
        Self { keywords }
    }

    /// Weighted keyword score for a channel's title and description.
    ///
    /// Each keyword counts once no matter how often it occurs.
    #[must_use]
    pub fn score_text(&self, title: &str, description: &str) -> u32 {
        let text = format!("{title} {description}").to_lowercase();
        TEXT_WEIGHTS
            .iter()
            .map(|&(kind, weight)| weight * self.count_matches(kind, &text))
            .sum()
    }

    /// Keyword score for a channel handle.
    #[must_use]
    pub fn score_handle(&self, handle: &str) -> u32 {
        let handle = handle.to_lowercase();
        HANDLE_WEIGHT * self.count_matches(KeywordKind::Handle, &handle)
    }

    /// Final channel score.
    ///
    /// Zero whenever title + description is not detected as Turkish; the
    /// handle alone never lifts a non-Turkish channel above zero.
    #[must_use]
    pub fn total_score(&self, handle: &str, title: &str, description: &str) -> u32 {
        if !is_probably_turkish(&format!("{title} {description}")) {
            return 0;
        }
        self.score_text(title, description) + self.score_handle(handle)
    }

    fn count_matches(&self, kind: KeywordKind, haystack: &str) -> u32 {
        let hits = self
            .keywords
            .list(kind)
            .iter()
            .filter(|kw| haystack.contains(kw.as_str()))
            .count();
        u32::try_from(hits).unwrap_or(u32::MAX)
    }
}
