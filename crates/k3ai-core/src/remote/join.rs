//! URL joining that keeps query strings intact.

use url::Url;

use super::UrlJoiner;

/// Appends a path segment to a URL.
///
/// `https://api.github.com/repos/o/r/contents/plugins?ref=main` joined with
/// `argo` becomes `.../contents/plugins/argo?ref=main`. Bases that are not
/// absolute URLs are joined with a plain `/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UrlPathJoiner;

impl UrlJoiner for UrlPathJoiner {
    fn join(&self, base: &str, segment: &str) -> String {
        let segment = segment.trim_matches('/');
        match Url::parse(base) {
            Ok(mut url) if !url.cannot_be_a_base() => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push(segment);
                }
                url.to_string()
            }
            _ => format!("{}/{}", base.trim_end_matches('/'), segment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_segment() {
        assert_eq!(
            UrlPathJoiner.join("https://example.com/plugins", "argo"),
            "https://example.com/plugins/argo"
        );
    }

    #[test]
    fn handles_trailing_slash() {
        assert_eq!(
            UrlPathJoiner.join("https://example.com/plugins/", "argo"),
            "https://example.com/plugins/argo"
        );
    }

    #[test]
    fn keeps_query_string() {
        let dir = UrlPathJoiner.join(
            "https://api.github.com/repos/kf5i/k3ai-plugins/contents/v2/plugins?ref=main",
            "argo",
        );
        let file = UrlPathJoiner.join(&dir, "plugin.yaml");
        assert_eq!(
            file,
            "https://api.github.com/repos/kf5i/k3ai-plugins/contents/v2/plugins/argo/plugin.yaml?ref=main"
        );
    }

    #[test]
    fn falls_back_for_relative_bases() {
        assert_eq!(UrlPathJoiner.join("plugins/", "/argo"), "plugins/argo");
    }
}
