//! Memo of parsed queries keyed by the literal query text.

use std::num::NonZeroUsize;

use kabar_query::{QueryNode, parse};
use lru::LruCache;
use tracing::trace;

/// Least-recently-used memo of parsed queries.
///
/// Parsing is pure, so a memoized tree is always equal to a fresh parse of the same text.
#[derive(Debug)]
pub struct QueryMemo {
    /// `None` when memoization is disabled.
    cache: Option<LruCache<String, QueryNode>>,
}

impl QueryMemo {
    /// Creates a memo holding up to `capacity` queries. A capacity of 0 disables it.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: NonZeroUsize::new(capacity).map(LruCache::new),
        }
    }

    /// Parses a query, reusing a memoized tree when the same text was seen recently.
    pub fn parse(&mut self, query: &str) -> QueryNode {
        let Some(cache) = self.cache.as_mut() else {
            return parse(query);
        };
        if let Some(node) = cache.get(query) {
            trace!(query, "query memo hit");
            return node.clone();
        }
        let node = parse(query);
        cache.put(query.to_string(), node.clone());
        node
    }

    /// Returns the number of memoized queries.
    pub fn len(&self) -> usize {
        self.cache.as_ref().map_or(0, LruCache::len)
    }

    /// Returns true if nothing is memoized.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of memoized queries.
    pub fn capacity(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.cap().get())
    }

    /// Drops every memoized query.
    pub fn clear(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }
}
