//! Euclidean minimum spanning tree over a complete graph.
//!
//! This module is the algorithmic core of the app: given the current point
//! positions it builds the complete weighted graph and extracts the MST with
//! Kruskal's algorithm on a union-find forest.
//!
//! # Architecture overview
//!
//! ```text
//! point positions (&[Pos2])
//!        │
//!        ▼
//! ┌───────────────────┐
//! │ complete_edges()  │  ── all N·(N-1)/2 pairs, squared distance weights
//! └─────────┬─────────┘
//!           │ sort ascending (f32::total_cmp)
//!           ▼
//! ┌───────────────────┐
//! │   compute_mst()   │  ── Kruskal accumulation over a UnionFind
//! └─────────┬─────────┘
//!           │
//!           ▼
//!    Mst { edges, cost }
//! ```
//!
//! Everything here is frame-scoped: each call allocates its own edge list and
//! union-find forest and returns a fresh result. Nothing is cached or diffed
//! against the previous frame. Weights are *squared* distances; the MST over
//! squared distances equals the MST over distances (the ordering is the
//! same), so the square root is never taken.

mod mst;
mod union_find;

#[cfg(test)]
mod tests;

pub use mst::{complete_edges, compute_mst, Edge, Mst};
pub use union_find::UnionFind;
