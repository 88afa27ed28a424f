//! Relevance heuristics for Turkish book and exam-material Telegram channels.
//!
//! Scores channel metadata with a three-tier keyword lexicon gated on
//! Turkish-language detection, and mines frequent tokens from discovered
//! channels to suggest new keywords.

pub mod bootstrap;
pub mod keywords;
pub mod scorer;

pub use bootstrap::{bootstrap_keywords, Bootstrapper, ChannelText};
pub use keywords::{KeywordKind, KeywordLists};
pub use scorer::{is_probably_turkish, Scorer};
