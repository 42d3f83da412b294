//! Frontier and visited-set bookkeeping for the crawl loop
//!
//! The frontier is a plain LIFO stack, so the crawl goes depth-first through
//! the recommendation graph. It is not deduplicated: the same URL may be
//! pushed by several pages. Deduplication happens when a URL is taken off the
//! stack, against the visited set.

use std::collections::HashSet;

/// LIFO work list of URLs still to fetch
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    stack: Vec<String>,
}

impl Frontier {
    /// Creates a frontier holding a single seed URL
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            stack: vec![seed.into()],
        }
    }

    /// Pushes a URL; it will be the next one popped
    pub fn push(&mut self, url: impl Into<String>) {
        self.stack.push(url.into());
    }

    /// Returns the most recently pushed URL without removing it
    pub fn peek(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Removes and returns the most recently pushed URL
    pub fn pop(&mut self) -> Option<String> {
        self.stack.pop()
    }

    /// Number of pending entries, duplicates included
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Extend<String> for Frontier {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.stack.extend(iter);
    }
}

/// URLs already fetched (or attempted) during this run
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `url` was already marked
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Marks `url` as visited
    ///
    /// # Returns
    ///
    /// `true` the first time a URL is marked, `false` afterwards
    pub fn mark(&mut self, url: &str) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    /// Number of distinct URLs marked
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true if nothing has been marked
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
