//! Handle extraction and path-shape classification for `t.me` URLs.
//!
//! The two functions read the same path segments with different offset rules
//! for the `/s/<handle>/...` mirror form and are kept independent.

use url::Url;

use crate::UrlType;

/// URL path with surrounding slashes removed.
fn trimmed_path(url: &Url) -> &str {
    url.path().trim_matches('/')
}

fn is_invite_segment(segment: &str) -> bool {
    segment.starts_with('+') || segment == "joinchat"
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}

/// Derive the channel handle from a `t.me` URL.
///
/// Returns `None` for hosts that do not contain `t.me`, invite links
/// (`/+hash`, `/joinchat/...`), internal numeric links (`/c/<id>/...`), and
/// anything that does not parse as a URL. The `/s/<handle>` preview mirror
/// yields `<handle>`. The host is compared after URL normalization, so
/// `T.ME` matches; the handle keeps its case.
#[must_use]
pub fn extract_handle(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    if !url.host_str().is_some_and(|host| host.contains("t.me")) {
        return None;
    }

    let path = trimmed_path(&url);
    if path.is_empty() {
        return None;
    }

    let mut segments = path.split('/');
    let first = segments.next()?;
    if is_invite_segment(first) {
        return None;
    }

    let handle = match first {
        "s" => segments.next()?,
        "c" => return None,
        other => other,
    };

    if handle.is_empty() || handle.starts_with('+') {
        return None;
    }
    Some(handle.to_string())
}

/// Classify the path shape of a `t.me` URL.
///
/// A numeric segment after the handle marks a message link; in the `/s/`
/// mirror form the handle sits one segment further right.
#[must_use]
pub fn classify_tme_url(raw: &str) -> UrlType {
    let Ok(url) = Url::parse(raw) else {
        return UrlType::Unknown;
    };

    let path = trimmed_path(&url);
    if path.is_empty() {
        return UrlType::Unknown;
    }

    let segments: Vec<&str> = path.split('/').collect();
    if is_invite_segment(segments[0]) {
        return UrlType::Invite;
    }

    let message_index = if segments[0] == "s" { 2 } else { 1 };
    if segments.get(message_index).is_some_and(|s| is_numeric(s)) {
        UrlType::Message
    } else {
        UrlType::ChannelOrUser
    }
}
