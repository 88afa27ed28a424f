use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One `t.me` link returned by the search API, tagged with the query that
/// surfaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub query: String,
    pub url: String,
    pub google_title: String,
    pub google_snippet: String,
}

/// Shape of a `t.me` URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlType {
    ChannelOrUser,
    Message,
    Invite,
    Unknown,
}

impl std::fmt::Display for UrlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlType::ChannelOrUser => write!(f, "channel_or_user"),
            UrlType::Message => write!(f, "message"),
            UrlType::Invite => write!(f, "invite"),
            UrlType::Unknown => write!(f, "unknown"),
        }
    }
}

/// A deduplicated, scored channel ready to be written out.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub handle: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub google_query: String,
    pub google_title: String,
    pub google_snippet: String,
    pub score: u32,
    pub url_type: UrlType,
    pub discovered_at: String,
}

/// Canonical public URL for a channel handle.
#[must_use]
pub fn canonical_url(handle: &str) -> String {
    format!("https://t.me/{handle}")
}

/// Current UTC time as RFC 3339 with whole seconds, e.g. `2025-01-15T08:30:00+00:00`.
#[must_use]
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Current UTC time formatted for use in file names, e.g. `20250115T083000Z`.
#[must_use]
pub fn now_filename() -> String {
    Utc::now().format("%Y%m%dT%H%M%SZ").to_string()
}
