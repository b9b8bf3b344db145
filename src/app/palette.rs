//! Command palette suggestion filtering.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Suggestions offered when none are configured.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Impressionism",
    "Abstract expressionism",
    "Contemporary photography",
    "Sculpture",
    "Watercolor landscapes",
    "Street art",
];

/// Filters `suggestions` by `query`, keeping their order.
///
/// The query is split on whitespace and lowercased; a suggestion is kept when
/// every token fuzzy-matches it. An empty query keeps everything.
///
/// # Examples
///
/// ```
/// use artauction::app::palette::filter_suggestions;
///
/// let all = vec!["Impressionism".to_string(), "Sculpture".to_string()];
/// assert_eq!(filter_suggestions(&all, "scul"), vec!["Sculpture".to_string()]);
/// assert_eq!(filter_suggestions(&all, "").len(), 2);
/// ```
#[must_use]
pub fn filter_suggestions(suggestions: &[String], query: &str) -> Vec<String> {
    let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

    if tokens.is_empty() {
        return suggestions.to_vec();
    }

    let matcher = SkimMatcherV2::default();
    let matches: Vec<String> = suggestions
        .iter()
        .filter(|suggestion| {
            let lower = suggestion.to_lowercase();
            tokens.iter().all(|token| matcher.fuzzy_match(&lower, token).is_some())
        })
        .cloned()
        .collect();

    tracing::trace!(query = %query, matches = matches.len(), "palette filtered");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        DEFAULT_SUGGESTIONS.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn every_token_must_match() {
        let matches = filter_suggestions(&defaults(), "street ART");
        assert_eq!(matches, vec!["Street art".to_string()]);
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        assert!(filter_suggestions(&defaults(), "zzzz").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let matches = filter_suggestions(&defaults(), "s");
        let positions: Vec<usize> = matches
            .iter()
            .map(|m| defaults().iter().position(|d| d == m).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
