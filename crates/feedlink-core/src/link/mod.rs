//! Feed-source URL classification.
//!
//! Maps a user-supplied YouTube or Vimeo page URL to the resource it
//! references (playlist, channel, user, handle, group) plus the opaque
//! identifier. Everything downstream (which remote API to call, what feed to
//! build) branches on this result, so classification either fully succeeds or
//! fails outright; there is no best-effort extraction.

mod error;
mod segments;
mod vimeo;
mod youtube;

pub use error::LinkError;
pub use vimeo::{resolve_vimeo_url, VimeoTarget};
pub use youtube::{resolve_youtube_url, YoutubeTarget};

use std::fmt;

use url::Url;

use crate::config::FeedlinkConfig;

/// Content provider a feed-source URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Youtube,
    Vimeo,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Youtube => write!(f, "youtube"),
            Provider::Vimeo => write!(f, "vimeo"),
        }
    }
}

/// A classified feed source: provider plus the referenced resource.
///
/// The provider-scoped target enums stay distinct so a YouTube channel and a
/// Vimeo channel cannot be conflated when matching downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedTarget {
    Youtube(YoutubeTarget),
    Vimeo(VimeoTarget),
}

impl FeedTarget {
    pub fn provider(&self) -> Provider {
        match self {
            FeedTarget::Youtube(_) => Provider::Youtube,
            FeedTarget::Vimeo(_) => Provider::Vimeo,
        }
    }

    /// Stable lowercase kind name for display and machine output.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedTarget::Youtube(t) => match t {
                YoutubeTarget::Playlist(_) => "playlist",
                YoutubeTarget::Channel(_) => "channel",
                YoutubeTarget::User(_) => "user",
                YoutubeTarget::Handle(_) => "handle",
            },
            FeedTarget::Vimeo(t) => match t {
                VimeoTarget::Group(_) => "group",
                VimeoTarget::Channel(_) => "channel",
                VimeoTarget::User(_) => "user",
            },
        }
    }

    /// The identifier exactly as it appeared in the URL. Never empty.
    pub fn id(&self) -> &str {
        match self {
            FeedTarget::Youtube(
                YoutubeTarget::Playlist(id)
                | YoutubeTarget::Channel(id)
                | YoutubeTarget::User(id)
                | YoutubeTarget::Handle(id),
            ) => id,
            FeedTarget::Vimeo(
                VimeoTarget::Group(id) | VimeoTarget::Channel(id) | VimeoTarget::User(id),
            ) => id,
        }
    }
}

/// Host-based dispatch over the provider resolvers.
///
/// The built-in host families cover the apex domains, their subdomains
/// (`www.`, the mobile `m.` host), and YouTube's `youtu.be` short host.
/// Config aliases extend a family without changing the classification rules.
#[derive(Debug, Clone, Default)]
pub struct LinkResolver {
    extra_youtube_hosts: Vec<String>,
    extra_vimeo_hosts: Vec<String>,
}

impl LinkResolver {
    /// Resolver with the built-in host families only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver whose host families are extended with config aliases.
    pub fn with_config(cfg: &FeedlinkConfig) -> Self {
        Self {
            extra_youtube_hosts: cfg.extra_youtube_hosts.clone(),
            extra_vimeo_hosts: cfg.extra_vimeo_hosts.clone(),
        }
    }

    /// Classify a feed-source URL into provider, kind, and identifier.
    ///
    /// Stateless: the same URL always yields the same result.
    pub fn resolve(&self, url: &Url) -> Result<FeedTarget, LinkError> {
        match self.provider_of(url) {
            Some(Provider::Youtube) => resolve_youtube_url(url).map(FeedTarget::Youtube),
            Some(Provider::Vimeo) => resolve_vimeo_url(url).map(FeedTarget::Vimeo),
            None => Err(LinkError::UnsupportedHost(url.to_string())),
        }
    }

    fn provider_of(&self, url: &Url) -> Option<Provider> {
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        let host = url.host_str()?;
        if in_family(host, "youtube.com")
            || host == "youtu.be"
            || self.extra_youtube_hosts.iter().any(|h| h == host)
        {
            return Some(Provider::Youtube);
        }
        if in_family(host, "vimeo.com") || self.extra_vimeo_hosts.iter().any(|h| h == host) {
            return Some(Provider::Vimeo);
        }
        None
    }
}

/// True for the apex domain itself and any subdomain of it.
fn in_family(host: &str, apex: &str) -> bool {
    host == apex
        || host
            .strip_suffix(apex)
            .map_or(false, |rest| rest.ends_with('.'))
}

/// Classify with the built-in host families only.
pub fn resolve_url(url: &Url) -> Result<FeedTarget, LinkError> {
    LinkResolver::new().resolve(url)
}
