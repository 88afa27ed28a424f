//! Keyword lists for Turkish book and exam-material channels.
//!
//! All entries are lowercase. Matching against them is substring containment,
//! so short entries such as `not` or `ders` also hit inside longer words; the
//! weights in [`crate::scorer`] were tuned with that behavior.

use std::collections::HashSet;

/// Book, literature, library and archive vocabulary (strongest signal).
pub const CORE_BOOK_KEYWORDS: &[&str] = &[
    // "kitap" variants
    "kitap",
    "kitaplar",
    "kitaplik",
    "kitaplık",
    // Literature / novels / stories
    "roman",
    "romanlar",
    "edebiyat",
    "hikaye",
    "hikâye",
    "oyku",
    "öykü",
    // Reading culture
    "okuma",
    "okuma kulübü",
    "okuma grubu",
    // Libraries
    "kutuphane",
    "kütüphane",
    "kutuphanesi",
    "kütüphanesi",
    // Archives
    "arsiv",
    "arşiv",
    "arsivi",
    "arşivi",
    // E-books
    "ekitap",
    "e-kitap",
    "e kitap",
];

/// File format and document-type vocabulary (weakest signal).
pub const FORMAT_KEYWORDS: &[&str] = &[
    "pdf", "epub", "mobi", "dokuman", "doküman", "not", "notlar", "slayt",
];

/// Course material and Turkish national exam vocabulary.
pub const EDU_KEYWORDS: &[&str] = &[
    "ders",
    "ders notu",
    "konu anlatımı",
    "konu anlatimli",
    "cikmis soru",
    "çıkmış soru",
    "cikmis sorular",
    "çıkmış sorular",
    "deneme",
    // Exams
    "yks",
    "tyt",
    "ayt",
    "kpss",
    "ales",
    "dgs",
    "yokdil",
    "yökdil",
    "yok dil",
    "yök dil",
];

/// Vocabulary matched against channel handles.
pub const HANDLE_KEYWORDS: &[&str] = &[
    "kitap",
    "kitaplik",
    "kitaplık",
    "roman",
    "edebiyat",
    "okuma",
    "ekitap",
    "kütüphane",
    "kutuphane",
    "arsiv",
    "arşiv",
    "arsivi",
    "arşivi",
    "depo",
    "deposu",
    // Exams
    "yks",
    "kpss",
    "ales",
    "dgs",
];

/// Tokens the bootstrapper never suggests.
pub const STOPWORDS: &[&str] = &[
    // English
    "the", "and", "or", "a", "an", "of", "to", "in", "for", "with", "is", "are", "this", "that",
    "on", "by", "from", "at", "as", "be", "it", "we", "you", "your", "our", "will", "file",
    // Turkish
    "ve", "bir", "bu", "da", "de", "ile", "icin", "için", "gibi", "daha", "olan", "uzerine",
    "üzerine",
];

/// Name of a keyword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    Core,
    Format,
    Edu,
    Handle,
}

/// The immutable keyword configuration shared by the scorer and the
/// bootstrapper.
///
/// Entries are lowercased and deduplicated on construction (first occurrence
/// kept), so each keyword contributes to a score at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordLists {
    core: Vec<String>,
    format: Vec<String>,
    edu: Vec<String>,
    handle: Vec<String>,
    stopwords: HashSet<String>,
}

impl KeywordLists {
    #[must_use]
    pub fn new<S: AsRef<str>>(
        core: &[S],
        format: &[S],
        edu: &[S],
        handle: &[S],
        stopwords: &[S],
    ) -> Self {
        Self {
            core: normalize(core),
            format: normalize(format),
            edu: normalize(edu),
            handle: normalize(handle),
            stopwords: normalize(stopwords).into_iter().collect(),
        }
    }

    /// The list registered under `kind`, in configured order.
    #[must_use]
    pub fn list(&self, kind: KeywordKind) -> &[String] {
        match kind {
            KeywordKind::Core => &self.core,
            KeywordKind::Format => &self.format,
            KeywordKind::Edu => &self.edu,
            KeywordKind::Handle => &self.handle,
        }
    }

    #[must_use]
    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }
}

impl Default for KeywordLists {
    fn default() -> Self {
        Self::new(
            CORE_BOOK_KEYWORDS,
            FORMAT_KEYWORDS,
            EDU_KEYWORDS,
            HANDLE_KEYWORDS,
            STOPWORDS,
        )
    }
}

fn normalize<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|item| item.as_ref().trim().to_lowercase())
        .filter(|item| !item.is_empty() && seen.insert(item.clone()))
        .collect()
}
