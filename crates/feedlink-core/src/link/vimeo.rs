//! Vimeo feed-source URL classification.

use url::Url;

use super::error::LinkError;
use super::segments::{raw_segments, segment_at};
use super::Provider;

/// A Vimeo resource reference extracted from a feed-source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VimeoTarget {
    Group(String),
    Channel(String),
    User(String),
}

type Rule = fn(&Url, &[&str]) -> Option<Result<VimeoTarget, LinkError>>;

/// Ordered classification rules; first match wins. The reserved `groups` and
/// `channels` prefixes are checked before the bare-username fallback, so a
/// URL like `/groups` alone fails rather than classifying as a user.
const RULES: &[Rule] = &[groups_path, channels_path, user_path];

/// Classify a Vimeo URL into the resource it references.
///
/// Unlike YouTube, a bare top-level path segment is a username; only `groups`
/// and `channels` are reserved. Keyword matching is case-sensitive.
pub fn resolve_vimeo_url(url: &Url) -> Result<VimeoTarget, LinkError> {
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
        provider: Provider::Vimeo,
        url: url.to_string(),
    }
}

fn groups_path(url: &Url, segments: &[&str]) -> Option<Result<VimeoTarget, LinkError>> {
    if segments.first() != Some(&"groups") {
        return None;
    }
    Some(match segment_at(segments, 1) {
        Some(id) => Ok(VimeoTarget::Group(id.to_string())),
        None => Err(no_match(url)),
    })
}

fn channels_path(url: &Url, segments: &[&str]) -> Option<Result<VimeoTarget, LinkError>> {
    if segments.first() != Some(&"channels") {
        return None;
    }
    Some(match segment_at(segments, 1) {
        Some(id) => Ok(VimeoTarget::Channel(id.to_string())),
        None => Err(no_match(url)),
    })
}

fn user_path(_url: &Url, segments: &[&str]) -> Option<Result<VimeoTarget, LinkError>> {
    let name = segment_at(segments, 0)?;
    Some(Ok(VimeoTarget::User(name.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(s: &str) -> Result<VimeoTarget, LinkError> {
        resolve_vimeo_url(&Url::parse(s).unwrap())
    }

    #[test]
    fn group_across_scheme_and_www_variants() {
        for url in [
            "https://vimeo.com/groups/109",
            "http://vimeo.com/groups/109",
            "http://www.vimeo.com/groups/109",
            "https://vimeo.com/groups/109/videos/",
        ] {
            assert_eq!(
                resolve(url).unwrap(),
                VimeoTarget::Group("109".to_string()),
                "{url}"
            );
        }
    }

    #[test]
    fn channel_ignores_trailing_segments() {
        assert_eq!(
            resolve("https://vimeo.com/channels/staffpicks").unwrap(),
            VimeoTarget::Channel("staffpicks".to_string())
        );
        assert_eq!(
            resolve("http://vimeo.com/channels/staffpicks/146224925").unwrap(),
            VimeoTarget::Channel("staffpicks".to_string())
        );
    }

    #[test]
    fn bare_segment_is_a_username() {
        assert_eq!(
            resolve("https://vimeo.com/awhitelabelproduct").unwrap(),
            VimeoTarget::User("awhitelabelproduct".to_string())
        );
    }

    #[test]
    fn root_path_fails() {
        for url in [
            "http://vimeo.com",
            "https://vimeo.com",
            "http://www.vimeo.com",
            "https://www.vimeo.com/",
        ] {
            assert!(resolve(url).is_err(), "{url} should not classify");
        }
    }

    #[test]
    fn reserved_prefix_without_id_fails() {
        assert!(resolve("https://vimeo.com/groups").is_err());
        assert!(resolve("https://vimeo.com/groups/").is_err());
        assert!(resolve("https://vimeo.com/channels//146224925").is_err());
    }
}
