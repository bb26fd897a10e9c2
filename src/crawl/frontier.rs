// src/crawl/frontier.rs
// =============================================================================
// Bookkeeping for which URLs still need crawling and which are done.
//
// How it works:
// 1. The root URL starts out pending
// 2. pop_next() hands out the oldest pending URL (FIFO, so breadth-first)
// 3. mark_visited() records it as fetched - this is the gate that guarantees
//    every URL is fetched at most once
// 4. add_discovered() enqueues new links, ignoring anything already pending
//    or already visited
//
// Every URL moves Unseen -> Pending -> Visited and never back.
//
// Rust concepts:
// - VecDeque: Double-ended queue for breadth-first order
// - HashSet: O(1) membership checks for "already pending" / "already visited"
// =============================================================================

use std::collections::{HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct Frontier {
    // Pending URLs in discovery order
    queue: VecDeque<String>,
    // Same URLs as `queue`, for O(1) duplicate checks on insert
    pending: HashSet<String>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier with only the root URL pending
    pub fn new(root_url: impl Into<String>) -> Self {
        let mut frontier = Self::default();
        frontier.add_discovered([root_url.into()]);
        frontier
    }

    /// Removes and returns the oldest pending URL, or None when exhausted
    pub fn pop_next(&mut self) -> Option<String> {
        let url = self.queue.pop_front()?;
        self.pending.remove(&url);
        Some(url)
    }

    /// Marks a URL as visited
    ///
    /// Returns false if it was already visited, in which case the caller
    /// must not fetch it again.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Merges newly discovered URLs into the pending queue
    ///
    /// URLs that are already visited or already pending are skipped
    /// silently. Returns how many were actually enqueued.
    pub fn add_discovered<I>(&mut self, urls: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut added = 0;

        for url in urls {
            if self.visited.contains(&url) || self.pending.contains(&url) {
                continue;
            }
            self.pending.insert(url.clone());
            self.queue.push_back(url);
            added += 1;
        }

        added
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why both a VecDeque and a HashSet for pending URLs?
//    - The VecDeque keeps the order (first discovered, first crawled)
//    - The HashSet answers "is this already queued?" in O(1); scanning the
//      VecDeque would be O(n) for every discovered link
//
// 2. What does `impl Into<String>` in new() buy us?
//    - Callers can pass either &str or String
//
// 3. Why does mark_visited return bool?
//    - HashSet::insert already tells us whether the value was new
//    - That one call is both the check and the insert
// -----------------------------------------------------------------------------
