//! Classification error for feed-source URLs.

use thiserror::Error;

use super::Provider;

/// Why a URL could not be classified as a feed source.
///
/// Classification never partially succeeds: either the full (provider, kind,
/// id) triple is extracted or one of these errors comes back. Recovery and
/// reporting policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Scheme is not http/https, or the host belongs to neither provider
    /// family.
    #[error("not a recognized feed source host: {0}")]
    UnsupportedHost(String),

    /// Host matched a provider but the path/query encodes no known resource.
    #[error("no {provider} resource reference in {url}")]
    UnrecognizedShape { provider: Provider, url: String },
}
