use egui::Pos2;

use crate::graph::union_find::UnionFind;

/// An edge of the complete graph: an unordered pair of point indices with
/// `u < v`, weighted by the squared Euclidean distance between the points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f32,
}

/// A minimum spanning tree: the accepted edges in the order Kruskal accepted
/// them, plus their summed weight.
#[derive(Debug, Clone, Default)]
pub struct Mst {
    pub edges: Vec<Edge>,
    pub cost: f32,
}

/// Builds every unordered pair `{i, j}` over `points` with its squared
/// distance. For N points this is N·(N-1)/2 edges; fine for the tens to low
/// hundreds of points this app animates, and the renderer reuses the list to
/// draw the full graph behind the tree.
pub fn complete_edges(points: &[Pos2]) -> Vec<Edge> {
    let n = points.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(Edge {
                u: i,
                v: j,
                weight: points[i].distance_sq(points[j]),
            });
        }
    }
    edges
}

/// Computes the Euclidean minimum spanning tree of `points` with Kruskal's
/// algorithm.
///
/// Edges are sorted ascending by weight with `f32::total_cmp`; ties between
/// equal weights resolve in an unspecified order, so the returned tree is
/// only unique when weights are distinct (the cost always is). Zero or one
/// point yields an empty tree with cost 0. Duplicate positions are legal and
/// simply produce zero-weight edges.
pub fn compute_mst(points: &[Pos2]) -> Mst {
    let mut edges = complete_edges(points);
    edges.sort_unstable_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut forest = UnionFind::new(points.len());
    let mut mst = Mst {
        edges: Vec::with_capacity(points.len().saturating_sub(1)),
        cost: 0.0,
    };

    for edge in edges {
        if forest.union(edge.u, edge.v) {
            mst.cost += edge.weight;
            mst.edges.push(edge);
        }
    }

    mst
}
