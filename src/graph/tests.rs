#[cfg(test)]
mod tests {
    use super::super::mst::{complete_edges, compute_mst, Edge};
    use super::super::union_find::UnionFind;
    use egui::Pos2;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn random_points(seed: u64, n: usize) -> Vec<Pos2> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..n)
            .map(|_| Pos2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
            .collect()
    }

    /// True when `edges` form a spanning tree over `n` vertices.
    fn spans(edges: &[Edge], n: usize) -> bool {
        if n == 0 {
            return edges.is_empty();
        }
        if edges.len() != n - 1 {
            return false;
        }
        let mut forest = UnionFind::new(n);
        for e in edges {
            // a rejected union means the edge closes a cycle
            if !forest.union(e.u, e.v) {
                return false;
            }
        }
        (1..n).all(|v| forest.connected(0, v))
    }

    #[test]
    fn test_empty_points() {
        let mst = compute_mst(&[]);
        assert!(mst.edges.is_empty());
        assert_eq!(mst.cost, 0.0);
    }

    #[test]
    fn test_single_point() {
        let mst = compute_mst(&[Pos2::new(0.3, -0.7)]);
        assert!(mst.edges.is_empty());
        assert_eq!(mst.cost, 0.0);
    }

    #[test]
    fn test_two_points() {
        let mst = compute_mst(&[Pos2::new(0.0, 0.0), Pos2::new(3.0, 4.0)]);
        assert_eq!(mst.edges.len(), 1);
        assert_eq!(mst.edges[0].u, 0);
        assert_eq!(mst.edges[0].v, 1);
        assert_eq!(mst.cost, 25.0);
    }

    #[test]
    fn test_right_triangle() {
        // Pairwise squared distances: (0,0)-(1,0)=1, (0,0)-(0,1)=1,
        // (1,0)-(0,1)=2. The weight-2 hypotenuse must be left out.
        let points = vec![
            Pos2::new(0.0, 0.0),
            Pos2::new(1.0, 0.0),
            Pos2::new(0.0, 1.0),
        ];
        let mst = compute_mst(&points);
        assert_eq!(mst.edges.len(), 2);
        assert_eq!(mst.cost, 2.0);
        assert!(mst.edges.iter().all(|e| e.weight == 1.0));
        assert!(!mst.edges.iter().any(|e| (e.u, e.v) == (1, 2)));
    }

    #[test]
    fn test_unit_square() {
        // Three sides of the square, never a diagonal.
        let points = vec![
            Pos2::new(0.0, 0.0),
            Pos2::new(1.0, 0.0),
            Pos2::new(1.0, 1.0),
            Pos2::new(0.0, 1.0),
        ];
        let mst = compute_mst(&points);
        assert_eq!(mst.edges.len(), 3);
        assert_eq!(mst.cost, 3.0);
        assert!(mst.edges.iter().all(|e| e.weight == 1.0));
        assert!(spans(&mst.edges, points.len()));
    }

    #[test]
    fn test_duplicate_points_give_zero_weight_edge() {
        let points = vec![
            Pos2::new(0.5, 0.5),
            Pos2::new(0.5, 0.5),
            Pos2::new(2.0, 0.5),
        ];
        let mst = compute_mst(&points);
        assert_eq!(mst.edges.len(), 2);
        assert!(mst.edges.iter().any(|e| e.weight == 0.0));
        assert_eq!(mst.cost, 2.25);
    }

    #[test]
    fn test_complete_edge_count() {
        for n in 0..12 {
            let points = random_points(9, n);
            let edges = complete_edges(&points);
            assert_eq!(edges.len(), n * n.saturating_sub(1) / 2);
            for e in &edges {
                assert!(e.u < e.v && e.v < n);
                assert!(e.weight >= 0.0);
            }
        }
    }

    #[test]
    fn test_result_is_spanning_tree() {
        for seed in 0..8 {
            let points = random_points(seed, 40);
            let mst = compute_mst(&points);
            assert_eq!(mst.edges.len(), 39);
            assert!(spans(&mst.edges, points.len()));
        }
    }

    #[test]
    fn test_cost_is_sum_of_edge_weights() {
        let points = random_points(21, 30);
        let mst = compute_mst(&points);
        let sum: f32 = mst.edges.iter().map(|e| e.weight).sum();
        assert_eq!(mst.cost, sum);
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let points = random_points(4, 25);
        let a = compute_mst(&points);
        let b = compute_mst(&points);
        assert_eq!(a.cost, b.cost);
        assert_eq!(a.edges, b.edges);
    }

    #[test]
    fn test_minimal_against_every_spanning_tree() {
        // Small enough to enumerate: C(10, 4) = 210 candidate edge subsets.
        let points = random_points(77, 5);
        let n = points.len();
        let edges = complete_edges(&points);
        let mst = compute_mst(&points);

        let mut chosen = vec![0usize; n - 1];
        let mut best = f32::INFINITY;
        enumerate_subsets(&edges, 0, 0, &mut chosen, &mut |subset| {
            let candidate: Vec<Edge> = subset.iter().map(|&i| edges[i]).collect();
            if spans(&candidate, n) {
                let cost: f32 = candidate.iter().map(|e| e.weight).sum();
                best = best.min(cost);
            }
        });

        assert!(best.is_finite());
        assert!(
            mst.cost <= best + 1e-5,
            "kruskal cost {} beats brute force {}",
            mst.cost,
            best
        );
    }

    fn enumerate_subsets(
        edges: &[Edge],
        start: usize,
        depth: usize,
        chosen: &mut Vec<usize>,
        visit: &mut impl FnMut(&[usize]),
    ) {
        if depth == chosen.len() {
            visit(chosen);
            return;
        }
        for i in start..edges.len() {
            chosen[depth] = i;
            enumerate_subsets(edges, i + 1, depth + 1, chosen, visit);
        }
    }
}
