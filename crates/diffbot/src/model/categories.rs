// ABOUTME: Categories score object returned when `categories` is requested.
// ABOUTME: Maps category names to relevance scores, ordered by name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category name to score mapping for an extracted article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories {
    scores: BTreeMap<String, f64>,
}

impl Categories {
    /// Score of the named category, if it was returned.
    pub fn score(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    /// Iterate over `(name, score)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The highest-scoring category. Ties resolve to the first name in order.
    pub fn top(&self) -> Option<(&str, f64)> {
        self.iter().fold(None, |best, (name, score)| match best {
            Some((_, s)) if s >= score => best,
            _ => Some((name, score)),
        })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
