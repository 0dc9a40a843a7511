//! YouTube feed-source URL classification.

use url::Url;

use super::error::LinkError;
use super::segments::{first_query_value, raw_segments, segment_at};
use super::Provider;

/// A YouTube resource reference extracted from a feed-source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YoutubeTarget {
    Playlist(String),
    Channel(String),
    User(String),
    Handle(String),
}

/// A rule either declines (`None`) or claims the URL with a final outcome.
/// Once a rule claims a URL, a bad extraction is a failure, not a fall-through.
type Rule = fn(&Url, &[&str]) -> Option<Result<YoutubeTarget, LinkError>>;

/// Ordered classification rules; first match wins. The playlist query rule
/// outranks every path rule: a watch URL carrying `list=` is a playlist.
const RULES: &[Rule] = &[playlist_query, channel_path, user_path, handle_path];

/// Classify a YouTube URL into the resource it references.
///
/// Path-based classification needs an explicit marker (`channel/`, `user/`,
/// or a leading `@`); an unprefixed segment like `/username` is never guessed
/// to be a handle. Keyword matching is case-sensitive.
pub fn resolve_youtube_url(url: &Url) -> Result<YoutubeTarget, LinkError> {
    let segments = raw_segments(url);
    for rule in RULES {
        if let Some(outcome) = rule(url, &segments) {
            return outcome;
        }
    }
    Err(no_match(url))
}

fn no_match(url: &Url) -> LinkError {
    LinkError::UnrecognizedShape {
        provider: Provider::Youtube,
        url: url.to_string(),
    }
}

fn playlist_query(url: &Url, _segments: &[&str]) -> Option<Result<YoutubeTarget, LinkError>> {
    first_query_value(url, "list").map(|id| Ok(YoutubeTarget::Playlist(id)))
}

fn channel_path(url: &Url, segments: &[&str]) -> Option<Result<YoutubeTarget, LinkError>> {
    if segments.first() != Some(&"channel") {
        return None;
    }
    // Only the segment right after the keyword is the id; anything later
    // (`/videos`, ...) is ignored.
    Some(match segment_at(segments, 1) {
        Some(id) => Ok(YoutubeTarget::Channel(id.to_string())),
        None => Err(no_match(url)),
    })
}

fn user_path(url: &Url, segments: &[&str]) -> Option<Result<YoutubeTarget, LinkError>> {
    if segments.first() != Some(&"user") {
        return None;
    }
    Some(match segment_at(segments, 1) {
        Some(id) => Ok(YoutubeTarget::User(id.to_string())),
        None => Err(no_match(url)),
    })
}

fn handle_path(url: &Url, segments: &[&str]) -> Option<Result<YoutubeTarget, LinkError>> {
    let handle = segments.first()?.strip_prefix('@')?;
    Some(if handle.is_empty() {
        Err(no_match(url))
    } else {
        Ok(YoutubeTarget::Handle(handle.to_string()))
    })
}
