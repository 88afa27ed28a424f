//! Frequency-based keyword suggestions mined from discovered channel text.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::keywords::KeywordLists;

/// Latin letters, digits and the Turkish letters that survive lowercasing.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9çğıöşüİÇĞÖŞÜ]+").expect("valid token regex"));

const MIN_TOKEN_CHARS: usize = 3;

/// Title and description of one channel, as read back from a candidates file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChannelText {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ChannelText {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Suggests new keywords by counting tokens across channel metadata.
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    stopwords: HashSet<String>,
}

impl Bootstrapper {
    #[must_use]
    pub fn new(stopwords: HashSet<String>) -> Self {
        Self { stopwords }
    }

    /// Returns the `top_n` most frequent tokens with their counts.
    ///
    /// Tokens shorter than three characters, stopwords and all-digit tokens
    /// are skipped. Equal counts keep first-seen order.
    #[must_use]
    pub fn suggest(&self, channels: &[ChannelText], top_n: usize) -> Vec<(String, usize)> {
        let mut order: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for channel in channels {
            let text = format!("{} {}", channel.title, channel.description).to_lowercase();
            for token in TOKEN_RE.find_iter(&text).map(|m| m.as_str()) {
                if !self.keeps(token) {
                    continue;
                }
                match index.get(token) {
                    Some(&slot) => order[slot].1 += 1,
                    None => {
                        index.insert(token.to_string(), order.len());
                        order.push((token.to_string(), 1));
                    }
                }
            }
        }

        // Stable sort: ties stay in first-seen order.
        order.sort_by(|a, b| b.1.cmp(&a.1));
        order.truncate(top_n);
        order
    }

    fn keeps(&self, token: &str) -> bool {
        token.chars().count() >= MIN_TOKEN_CHARS
            && !self.stopwords.contains(token)
            && !token.chars().all(|c| c.is_ascii_digit())
    }
}

impl Default for Bootstrapper {
    fn default() -> Self {
        Self::from(&KeywordLists::default())
    }
}

impl From<&KeywordLists> for Bootstrapper {
    fn from(lists: &KeywordLists) -> Self {
        Self::new(lists.stopwords().clone())
    }
}

/// Suggest keywords using the built-in stopword list.
#[must_use]
pub fn bootstrap_keywords(channels: &[ChannelText], top_n: usize) -> Vec<(String, usize)> {
    Bootstrapper::default().suggest(channels, top_n)
}
