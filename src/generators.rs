//! Edge lists for common sample topologies.
//!
//! Every generator returns edges over the vertices `1..=n`, ready to pass to
//! [`ConstraintGraph::new`](crate::graphs::constraint::ConstraintGraph::new).

use rand::Rng;

use crate::error::{Error, Result};
use crate::graphs::constraint::Vertex;

/// `1 - 2 - ... - n`.
pub fn path(n: usize) -> Vec<(Vertex, Vertex)> {
    (1..n).map(|v| (v, v + 1)).collect()
}

/// `1 - 2 - ... - n - 1`.
///
/// Below three vertices a cycle would need a loop or a doubled edge, so the
/// path is returned instead.
pub fn cycle(n: usize) -> Vec<(Vertex, Vertex)> {
    let mut edges = path(n);
    if n >= 3 {
        edges.push((n, 1));
    }
    edges
}

/// Complete binary tree in heap order: the parent of `v` is `v / 2`.
pub fn binary_tree(n: usize) -> Vec<(Vertex, Vertex)> {
    (2..=n).map(|v| (v / 2, v)).collect()
}

/// Random recursive tree: each vertex `v >= 2` attaches to a uniformly
/// chosen vertex among `1..v`.
pub fn random_tree<R: Rng>(n: usize, rng: &mut R) -> Vec<(Vertex, Vertex)> {
    (2..=n).map(|v| (rng.random_range(1..v), v)).collect()
}

/// Erdős–Rényi graph: each unordered pair of distinct vertices is an edge
/// independently with probability `p`.
pub fn random_graph<R: Rng>(
    n: usize,
    p: f64,
    rng: &mut R,
) -> Result<Vec<(Vertex, Vertex)>> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidProbability(p));
    }

    let mut edges = Vec::new();
    for u in 1..=n {
        for v in u + 1..=n {
            if rng.random_bool(p) {
                edges.push((u, v));
            }
        }
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::graphs::{constraint::ConstraintGraph, undirected::Undirected};

    #[test]
    fn path_edges() {
        assert!(path(0).is_empty());
        assert!(path(1).is_empty());
        assert_eq!(path(4), vec![(1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn cycle_closes_from_three_vertices() {
        assert_eq!(cycle(2), vec![(1, 2)]);
        assert_eq!(cycle(3), vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn binary_tree_parents() {
        assert_eq!(
            binary_tree(6),
            vec![(1, 2), (1, 3), (2, 4), (2, 5), (3, 6)]
        );
        assert!(binary_tree(1).is_empty());
    }

    #[test]
    fn random_graph_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(random_graph(6, 0.0, &mut rng).unwrap().is_empty());
        assert_eq!(random_graph(6, 1.0, &mut rng).unwrap().len(), 15);
    }

    #[test]
    fn random_graph_rejects_bad_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            random_graph(3, 1.5, &mut rng),
            Err(Error::InvalidProbability(1.5))
        );
        assert!(random_graph(3, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn random_stress_trees_are_connected_and_acyclic() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_5452_4545_5F47_454E);

        for n in 1..=40 {
            let edges = random_tree(n, &mut rng);
            assert_eq!(edges.len(), n - 1);

            let g = ConstraintGraph::new(n, edges, 1).unwrap();

            // Walk from vertex 1; a tree with n - 1 edges reaching all n
            // vertices has no cycle.
            let mut seen = vec![false; n + 1];
            let mut stack = vec![1];
            seen[1] = true;
            while let Some(u) = stack.pop() {
                for w in g.neighbors(u) {
                    if !seen[w] {
                        seen[w] = true;
                        stack.push(w);
                    }
                }
            }
            assert!(seen[1..].iter().all(|&s| s));
        }
    }
}
