//! HTTP collaborators for channel discovery: the Google Custom Search JSON
//! API and the public `t.me` preview page.

pub mod client;
pub mod error;
pub mod preview;
pub mod source;
pub mod types;

pub use client::{CseClient, RESULTS_PER_PAGE};
pub use error::SearchError;
pub use preview::PreviewClient;
pub use source::{PreviewSource, SearchSource};
pub use types::{Preview, SearchItem, SearchPage};
