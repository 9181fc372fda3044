//! Search index: fuzzy ranking over the text projection of the items.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Lowercased item texts, ready for matching.
#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    texts: Vec<String>,
}

impl SearchIndex {
    pub fn build<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            texts: items.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Indices of matching items, best first.
    ///
    /// Substring hits rank above scattered fuzzy hits; within a tier the skim
    /// score decides, then the original order.
    pub fn search(&self, query: &str) -> Vec<usize> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return (0..self.texts.len()).collect();
        }
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(bool, i64, usize)> = self
            .texts
            .iter()
            .enumerate()
            .filter_map(|(i, text)| {
                matcher
                    .fuzzy_match(text, &query)
                    .map(|score| (text.contains(&query), score, i))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)).then(a.2.cmp(&b.2)));
        scored.into_iter().map(|(_, _, i)| i).collect()
    }
}

/// Char positions in `text` matched by `query`, for highlighting.
pub fn match_positions(text: &str, query: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    SkimMatcherV2::default()
        .ignore_case()
        .fuzzy_indices(text, query)
        .map(|(_, indices)| indices)
        .unwrap_or_default()
}
