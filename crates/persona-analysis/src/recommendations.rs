use std::collections::HashSet;

/// Insertion-ordered set of recommendation strings.
///
/// Duplicates (by value) are ignored; the first insertion fixes the position.
#[derive(Clone, Debug, Default)]
pub struct RecommendationSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl RecommendationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a recommendation. Returns `false` if it was already present.
    pub fn insert(&mut self, recommendation: &str) -> bool {
        if self.seen.contains(recommendation) {
            return false;
        }
        self.seen.insert(recommendation.to_string());
        self.order.push(recommendation.to_string());
        true
    }

    pub fn extend<'a>(&mut self, recommendations: impl IntoIterator<Item = &'a str>) {
        for r in recommendations {
            self.insert(r);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, recommendation: &str) -> bool {
        self.seen.contains(recommendation)
    }

    /// Consume the set, keeping at most `cap` entries in insertion order.
    pub fn into_capped(mut self, cap: usize) -> Vec<String> {
        self.order.truncate(cap);
        self.order
    }
}
