//! Path and query primitives shared by the provider resolvers.

use url::Url;

/// Splits a URL path into raw segments, leading slash stripped.
///
/// Empty segments from doubled or trailing slashes are preserved so callers
/// can tell "nothing after this keyword" apart from a real identifier:
/// `/channel//videos` has an empty segment where the id should be.
pub(crate) fn raw_segments(url: &Url) -> Vec<&str> {
    let path = url.path();
    let path = path.strip_prefix('/').unwrap_or(path);
    path.split('/').collect()
}

/// The segment at `idx`, treating empty segments as absent.
pub(crate) fn segment_at<'a>(segments: &[&'a str], idx: usize) -> Option<&'a str> {
    segments.get(idx).copied().filter(|s| !s.is_empty())
}

/// First value of the named query parameter, if present and non-empty.
/// Values come back percent-decoded by the URL parser.
pub(crate) fn first_query_value(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn raw_segments_preserves_empties() {
        let url = u("https://www.youtube.com/user///");
        assert_eq!(raw_segments(&url), vec!["user", "", "", ""]);

        let url = u("https://www.youtube.com/channel//videos");
        assert_eq!(raw_segments(&url), vec!["channel", "", "videos"]);
    }

    #[test]
    fn root_path_has_no_first_segment() {
        let url = u("https://vimeo.com/");
        let segments = raw_segments(&url);
        assert_eq!(segment_at(&segments, 0), None);
    }

    #[test]
    fn segment_at_filters_empty() {
        let url = u("https://www.youtube.com/channel/UC123/videos");
        let segments = raw_segments(&url);
        assert_eq!(segment_at(&segments, 0), Some("channel"));
        assert_eq!(segment_at(&segments, 1), Some("UC123"));
        assert_eq!(segment_at(&segments, 2), Some("videos"));
        assert_eq!(segment_at(&segments, 3), None);

        let url = u("https://www.youtube.com/channel//videos");
        let segments = raw_segments(&url);
        assert_eq!(segment_at(&segments, 1), None);
    }

    #[test]
    fn first_query_value_takes_first_non_empty() {
        let url = u("https://www.youtube.com/watch?v=abc&list=PL1");
        assert_eq!(first_query_value(&url, "list").as_deref(), Some("PL1"));
        assert_eq!(first_query_value(&url, "index"), None);
    }

    #[test]
    fn empty_query_value_counts_as_absent() {
        let url = u("https://www.youtube.com/watch?list=");
        assert_eq!(first_query_value(&url, "list"), None);
    }
}
