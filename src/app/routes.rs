//! Storefront routes, active-link matching, and search URLs.

/// Default route that receives search queries.
pub const DEFAULT_SEARCH_ROUTE: &str = "/auctions";

/// A navbar destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    /// Extra prefix under which the link also counts as active.
    pub nested_prefix: Option<&'static str>,
}

impl NavLink {
    /// Whether `current` should highlight this link.
    ///
    /// Exact path match, or any path under `nested_prefix`.
    #[must_use]
    pub fn is_active(&self, current: &str) -> bool {
        current == self.path
            || self
                .nested_prefix
                .is_some_and(|prefix| current.starts_with(prefix))
    }
}

/// Main navigation, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", path: "/", nested_prefix: None },
    NavLink { label: "Auctions", path: "/auctions", nested_prefix: None },
    NavLink { label: "Artists", path: "/artists", nested_prefix: Some("/artist/") },
    NavLink { label: "About", path: "/about", nested_prefix: None },
    NavLink { label: "FAQs", path: "/faqs", nested_prefix: None },
    NavLink { label: "Profile", path: "/profile", nested_prefix: None },
];

/// Trims a raw query; `None` when nothing is left.
#[must_use]
pub fn normalize_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Builds `<route>?search=<percent-encoded term>`.
///
/// # Examples
///
/// ```
/// use artauction::app::routes::search_path;
///
/// assert_eq!(search_path("/auctions", "van gogh"), "/auctions?search=van%20gogh");
/// ```
#[must_use]
pub fn search_path(route: &str, term: &str) -> String {
    format!("{route}?search={}", urlencoding::encode(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str) -> NavLink {
        *NAV_LINKS.iter().find(|l| l.label == label).unwrap()
    }

    #[test]
    fn artists_link_covers_artist_pages() {
        let artists = link("Artists");
        assert!(artists.is_active("/artists"));
        assert!(artists.is_active("/artist/frida-kahlo"));
        assert!(!artists.is_active("/auctions"));
    }

    #[test]
    fn home_is_exact_only() {
        let home = link("Home");
        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
    }

    #[test]
    fn whitespace_only_queries_normalize_to_none() {
        assert_eq!(normalize_query("  "), None);
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("  monet \t"), Some("monet"));
    }

    #[test]
    fn search_terms_are_percent_encoded() {
        assert_eq!(search_path("/auctions", "van gogh"), "/auctions?search=van%20gogh");
        assert_eq!(
            search_path("/auctions", "a&b=c/d"),
            "/auctions?search=a%26b%3Dc%2Fd"
        );
        assert_eq!(search_path("/auctions", "café"), "/auctions?search=caf%C3%A9");
    }
}
