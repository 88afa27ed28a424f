//! Scraper for the public `t.me/<handle>` preview page.
//!
//! The page carries the channel's title and description in `og:` meta tags.
//! A missing preview is an ordinary outcome (private channel, removed
//! channel, network hiccup) and is reported as `None`, never as an error.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;

use crate::error::SearchError;
use crate::types::Preview;

const DEFAULT_BASE_URL: &str = "https://t.me";

/// Body text Telegram serves for channels it refuses to show.
const NOT_DISPLAYABLE_MARKER: &str = "channel cannot be displayed";

static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex"));
static PROPERTY_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\bproperty\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});
static CONTENT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});
static NUMERIC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(?:[xX]([0-9a-fA-F]+)|([0-9]+));").expect("valid regex"));

/// Fetches channel previews from `t.me`.
pub struct PreviewClient {
    client: Client,
    base_url: String,
}

impl PreviewClient {
    /// Creates a client that sends `user_agent` with every request.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(user_agent, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        user_agent: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches and parses the preview page for `handle`.
    ///
    /// Returns `None` on transport failure, any status other than 200, a
    /// "cannot be displayed" page, or a page lacking `og:title` or
    /// `og:description`.
    pub async fn fetch_preview(&self, handle: &str) -> Option<Preview> {
        let url = format!("{}/{handle}", self.base_url);

        let response = match self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(handle, error = %e, "preview request failed");
                return None;
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::info!(handle, status = status.as_u16(), "preview returned non-200");
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(handle, error = %e, "failed to read preview body");
                return None;
            }
        };

        let preview = parse_preview(&body);
        if preview.is_none() {
            tracing::debug!(handle, "preview page has no usable metadata");
        }
        preview
    }
}

/// Extracts the title and description from a preview page.
pub(crate) fn parse_preview(html: &str) -> Option<Preview> {
    if html.to_lowercase().contains(NOT_DISPLAYABLE_MARKER) {
        return None;
    }

    let title = find_meta_property(html, "og:title")?;
    let description = find_meta_property(html, "og:description")?;
    Some(Preview { title, description })
}

/// Content of the first `<meta property="...">` tag matching `property`,
/// trimmed and entity-decoded. Empty content counts as absent.
fn find_meta_property(html: &str, property: &str) -> Option<String> {
    META_TAG_RE.find_iter(html).find_map(|m| {
        let tag = m.as_str();
        let key = capture_attr(&PROPERTY_ATTR_RE, tag)?;
        if !key.eq_ignore_ascii_case(property) {
            return None;
        }
        let content = decode_html(&capture_attr(&CONTENT_ATTR_RE, tag)?);
        (!content.is_empty()).then_some(content)
    })
}

fn capture_attr(re: &Regex, tag: &str) -> Option<String> {
    let caps = re.captures(tag)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Decodes the entities Telegram emits in meta content. `&amp;` goes last so
/// an escaped entity is unescaped exactly once.
fn decode_html(value: &str) -> String {
    let named = value
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ");

    let numeric = NUMERIC_ENTITY_RE.replace_all(&named, |caps: &regex::Captures<'_>| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            (None, None) => None,
        };
        code.and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), |c| c.to_string())
    });

    numeric.replace("&amp;", "&").trim().to_string()
}
