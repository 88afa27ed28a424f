//! Custom Search JSON API response types and the preview record.
//!
//! Only the fields the discovery pipeline reads are modelled; everything else
//! in the API payload is ignored.

use serde::Deserialize;

/// One page of Custom Search results.
///
/// The API omits `items` entirely when a page has no results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// A single ranked result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

/// Title and description scraped from a channel's public `t.me` page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    pub description: String,
}
