/// Disjoint set forest with path compression and union by rank.
///
/// Elements are the dense indices `0..n` handed to [`UnionFind::new`].
/// Passing an index outside that range is a programming error and panics via
/// the bounds check rather than producing a wrong partition.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Creates a forest of `n` singleton components, each element its own
    /// root with rank 0.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the canonical root of the component containing `v`.
    ///
    /// Every node visited on the way up is rewired to point directly at the
    /// root, so repeated finds approach O(1). The compression is done with an
    /// explicit second pass instead of recursion; stack depth stays constant
    /// no matter how degenerate the forest is.
    pub fn find(&mut self, v: usize) -> usize {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = v;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merges the components containing `a` and `b`.
    ///
    /// Returns `true` if two distinct components were merged, `false` if the
    /// elements already shared a root (in which case nothing changes). The
    /// lower-rank root is attached under the higher-rank one; on equal ranks
    /// the winner's rank grows by one, which bounds tree height.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return false;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
        true
    }

    /// Whether `a` and `b` are currently in the same component.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut uf = UnionFind::new(4);
        for v in 0..4 {
            assert_eq!(uf.find(v), v);
        }
    }

    #[test]
    fn union_joins_components() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert_eq!(uf.find(0), uf.find(1));
        assert_ne!(uf.find(0), uf.find(2));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        let root = uf.find(0);
        for v in 0..4 {
            assert_eq!(uf.find(v), root);
        }
    }

    #[test]
    fn find_is_idempotent() {
        let mut uf = UnionFind::new(8);
        for v in 1..8 {
            uf.union(0, v);
        }
        let root = uf.find(7);
        assert_eq!(uf.find(7), root);
        assert_eq!(uf.find(7), root);
    }

    #[test]
    fn redundant_union_is_a_noop() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        let roots: Vec<usize> = (0..3).map(|v| uf.find(v)).collect();
        assert!(!uf.union(0, 1));
        assert!(!uf.union(1, 0));
        let roots_after: Vec<usize> = (0..3).map(|v| uf.find(v)).collect();
        assert_eq!(roots, roots_after);
    }

    #[test]
    fn connected_matches_find() {
        let mut uf = UnionFind::new(5);
        uf.union(1, 2);
        uf.union(3, 4);
        assert!(uf.connected(1, 2));
        assert!(uf.connected(4, 3));
        assert!(!uf.connected(0, 1));
        assert!(!uf.connected(2, 3));
    }

    #[test]
    fn long_chain_compresses() {
        // Build a chain by always uniting a fresh singleton into the big
        // component, then check a deep find still answers correctly.
        let n = 1000;
        let mut uf = UnionFind::new(n);
        for v in 1..n {
            uf.union(v - 1, v);
        }
        let root = uf.find(0);
        assert_eq!(uf.find(n - 1), root);
        assert!(uf.connected(0, n - 1));
    }
}
