//! Disjoint-set (union-find) structure over interned course-number strings.

use std::collections::HashMap;

/// A disjoint-set forest keyed by string, with path compression.
///
/// Keys are interned to dense indices on first insertion; each new key
/// starts as a singleton set. Union keeps the first-seen side's root, so
/// roots are deterministic for a given insertion order.
#[derive(Debug, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    index: HashMap<String, usize>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of interned keys.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Intern a key, creating a singleton set on first sight, and return
    /// its index. Re-inserting an existing key returns its existing index.
    pub fn insert(&mut self, key: &str) -> usize {
        if let Some(&id) = self.index.get(key) {
            return id;
        }
        let id = self.parent.len();
        self.parent.push(id);
        self.index.insert(key.to_string(), id);
        id
    }

    /// Look up the index of an already-interned key.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Find the root of the set containing `id`, compressing the path.
    pub fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point everything on the walked path directly at the root.
        let mut current = id;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`. The root of `a`'s set wins,
    /// so the earlier-anchored set keeps its root. Merging a set with
    /// itself is a no-op.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}
