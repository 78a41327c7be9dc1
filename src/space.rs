//! The solution space: colorings as vertices, legal recolor moves as edges.
//!
//! The solution space is never materialized as an explicit graph. Its edges
//! are generated on demand from each coloring by trying every permitted
//! recolor at every vertex, and a candidate counts only if it is itself one
//! of the supplied colorings. Components are extracted by breadth-first
//! search over a working set that shrinks as colorings are claimed.

use tracing::{debug, instrument};

use crate::color::Color;
use crate::coloring::{Coloring, ColoringSet};
use crate::config::{EdgeMode, SpaceConfig};
use crate::error::{Error, Result};
use crate::graphs::{
    constraint::{ConstraintGraph, Vertex},
    frontier::LayeredFrontier,
    vertices::Vertices,
};
use crate::recolor::Recolorability;
use crate::set::Set;

/// An edge of the solution space.
///
/// The two colorings differ at exactly one vertex. The pair is unordered and
/// stored with the smaller coloring first, so a move found from either end
/// hashes the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    low: Coloring,
    high: Coloring,
    vertex: Vertex,
}

impl Move {
    /// The move between `a` and `b`, or `None` unless they differ at exactly
    /// one vertex.
    pub fn new(a: &Coloring, b: &Coloring) -> Option<Self> {
        a.single_difference(b)
            .map(|vertex| Self::between(a.clone(), b.clone(), vertex))
    }

    fn between(a: Coloring, b: Coloring, vertex: Vertex) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self { low, high, vertex }
    }

    pub fn endpoints(&self) -> (&Coloring, &Coloring) {
        (&self.low, &self.high)
    }

    /// The vertex whose color changes.
    pub fn vertex(&self) -> Vertex {
        self.vertex
    }

    /// Colors of the changed vertex at each endpoint, in endpoint order.
    pub fn colors(&self) -> (Color, Color) {
        (self.low[self.vertex], self.high[self.vertex])
    }

    /// Returns true when `coloring` is one of the endpoints.
    pub fn touches(&self, coloring: &Coloring) -> bool {
        &self.low == coloring || &self.high == coloring
    }
}

/// A maximal set of colorings connected by moves, with the moves among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    colorings: ColoringSet,
    moves: Set<Move>,
    seed: Coloring,
    depth: usize,
}

impl Component {
    pub fn colorings(&self) -> &ColoringSet {
        &self.colorings
    }

    pub fn moves(&self) -> &Set<Move> {
        &self.moves
    }

    /// The coloring the traversal started from: the smallest member.
    pub fn seed(&self) -> &Coloring {
        &self.seed
    }

    /// Largest number of moves needed to reach a member from the seed.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.colorings.len()
    }

    /// Never true for a built component, which holds at least its seed.
    pub fn is_empty(&self) -> bool {
        self.colorings.is_empty()
    }

    /// A coloring no move leaves from.
    pub fn is_frozen(&self) -> bool {
        self.colorings.len() == 1
    }

    pub fn contains(&self, coloring: &Coloring) -> bool {
        self.colorings.contains(coloring)
    }

    pub fn into_parts(self) -> (ColoringSet, Set<Move>) {
        (self.colorings, self.moves)
    }
}

/// Partition of a coloring set into recoloring components.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolutionSpace {
    components: Vec<Component>,
}

impl SolutionSpace {
    /// Builds the solution space with the default [`SpaceConfig`].
    pub fn build(
        graph: &ConstraintGraph,
        colorings: &ColoringSet,
        relation: &Recolorability,
    ) -> Result<Self> {
        Self::build_with(graph, colorings, relation, SpaceConfig::default())
    }

    /// Partitions `colorings` into components of the move graph.
    ///
    /// `colorings` is normally the output of enumeration for `graph`; a move
    /// is only taken when it lands on a member of this set. Recolors are
    /// restricted to the target vertex's domain.
    ///
    /// Components are ordered by their smallest coloring.
    #[instrument(skip_all, fields(
        colorings = colorings.len(),
        colors = relation.color_count(),
        edges = ?config.edges
    ))]
    pub fn build_with(
        graph: &ConstraintGraph,
        colorings: &ColoringSet,
        relation: &Recolorability,
        config: SpaceConfig,
    ) -> Result<Self> {
        if relation.color_count() != graph.color_count() {
            return Err(Error::ColorCountMismatch {
                graph: graph.color_count(),
                relation: relation.color_count(),
            });
        }
        if let Some(coloring) = colorings
            .iter()
            .find(|coloring| coloring.vertex_count() != graph.vertex_count())
        {
            return Err(Error::ColoringLengthMismatch {
                expected: graph.vertex_count(),
                found: coloring.vertex_count(),
            });
        }

        let mut working = colorings.clone();
        let mut components = Vec::new();

        for seed in colorings.sorted() {
            if !working.remove(seed) {
                continue;
            }

            let component = explore(graph, relation, config.edges, &mut working, seed.clone());
            debug!(
                seed = ?component.seed,
                size = component.len(),
                moves = component.moves.len(),
                depth = component.depth,
                "component"
            );
            components.push(component);
        }

        debug_assert!(working.is_empty());
        debug!(components = components.len(), "solution space built");

        Ok(Self { components })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns true when every coloring reaches every other, which needs
    /// exactly one component.
    pub fn is_connected(&self) -> bool {
        self.components.len() == 1
    }

    /// The component holding `coloring`, if it was part of the input.
    pub fn component_of(&self, coloring: &Coloring) -> Option<&Component> {
        self.components
            .iter()
            .find(|component| component.contains(coloring))
    }

    /// Total number of colorings over all components.
    pub fn coloring_count(&self) -> usize {
        self.components.iter().map(Component::len).sum()
    }

    /// Total number of moves over all components.
    pub fn move_count(&self) -> usize {
        self.components
            .iter()
            .map(|component| component.moves.len())
            .sum()
    }
}

/// Claims the component of `seed` from `working`, layer by layer.
///
/// `seed` must already be removed from `working`.
fn explore(
    graph: &ConstraintGraph,
    relation: &Recolorability,
    mode: EdgeMode,
    working: &mut ColoringSet,
    seed: Coloring,
) -> Component {
    let mut members = ColoringSet::new();
    members.insert(seed.clone());
    let mut moves = Set::new();
    let mut frontier = LayeredFrontier::new([seed.clone()]);

    while frontier
        .step(|layer, next| {
            for current in layer {
                for (vertex, color) in current.iter() {
                    let (Some(reachable), Some(domain)) =
                        (relation.neighbors(color), graph.domain(vertex))
                    else {
                        continue;
                    };

                    for target in reachable.intersection(domain).iter() {
                        let candidate = current.recolored(vertex, target);

                        if working.remove(&candidate) {
                            let step = Move::between(current.clone(), candidate.clone(), vertex);
                            moves.insert(step);
                            members.insert(candidate.clone());
                            next.push(candidate);
                        } else if mode == EdgeMode::Complete && members.contains(&candidate) {
                            moves.insert(Move::between(current.clone(), candidate, vertex));
                        }
                    }
                }
            }
        })
        .is_some()
    {}

    Component {
        colorings: members,
        moves,
        seed,
        depth: frontier.depth(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    use crate::config::SearchConfig;
    use crate::enumerate::enumerate;
    use crate::generators;

    fn path3() -> ConstraintGraph {
        ConstraintGraph::new(3, [(1, 2), (2, 3)], 3).unwrap()
    }

    fn coloring(colors: &[Color]) -> Coloring {
        Coloring::from(colors.to_vec())
    }

    // Checks partition, edge validity and maximality against a pairwise scan.
    fn assert_well_formed(
        space: &SolutionSpace,
        colorings: &ColoringSet,
        relation: &Recolorability,
    ) {
        assert_eq!(space.coloring_count(), colorings.len());

        for (i, a) in space.components().iter().enumerate() {
            assert!(!a.is_empty());
            assert!(a.colorings().is_subset(colorings));
            assert!(a.contains(a.seed()));
            for b in &space.components()[i + 1..] {
                assert!(a.colorings().is_disjoint(b.colorings()));
            }

            for m in a.moves() {
                let (low, high) = m.endpoints();
                assert!(a.contains(low) && a.contains(high));
                assert_eq!(low.single_difference(high), Some(m.vertex()));
                let (from, to) = m.colors();
                assert!(relation.allows(from, to));
            }
        }

        // No legal move crosses a component boundary.
        let members: Vec<&Coloring> = colorings.iter().collect();
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                let Some(m) = Move::new(a, b) else { continue };
                let (from, to) = m.colors();
                if relation.allows(from, to) {
                    let home = space.component_of(a).unwrap();
                    assert!(home.contains(b), "move {:?} crosses components", m);
                }
            }
        }
    }

    #[test]
    fn color_cycle_connects_path_colorings() {
        let g = path3();
        let colorings = g.colorings();
        let relation = Recolorability::from_pairs(3, [(1, 2), (2, 3), (3, 1)]).unwrap();

        let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();

        assert!(space.is_connected());
        assert_eq!(space.components()[0].len(), 12);
        assert_eq!(space.components()[0].seed(), &coloring(&[1, 2, 1]));
        assert_well_formed(&space, &colorings, &relation);
    }

    #[test]
    fn empty_relation_freezes_everything() {
        let g = path3();
        let colorings = g.colorings();
        let relation = Recolorability::empty(3).unwrap();

        let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();

        assert_eq!(space.len(), 12);
        assert!(space.components().iter().all(Component::is_frozen));
        assert!(space.components().iter().all(|c| c.depth() == 0));
        assert_eq!(space.move_count(), 0);
        assert_well_formed(&space, &colorings, &relation);
    }

    #[test]
    fn single_edge_with_two_colors_is_frozen() {
        // Recoloring either endpoint of K2 collides with the other endpoint.
        let g = ConstraintGraph::new(2, [(1, 2)], 2).unwrap();
        let colorings = g.colorings();
        let relation = Recolorability::complete(2).unwrap();

        let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();
        assert_eq!(space.len(), 2);
        assert!(!space.is_connected());
        assert_eq!(space.move_count(), 0);
    }

    #[test]
    fn empty_input_has_no_components() {
        let g = ConstraintGraph::new(3, [(1, 2), (2, 3)], 1).unwrap();
        let colorings = g.colorings();
        assert!(colorings.is_empty());

        let relation = Recolorability::empty(1).unwrap();
        let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();
        assert!(space.is_empty());
        assert!(!space.is_connected());
        assert_eq!(space.coloring_count(), 0);
    }

    #[test]
    fn components_ordered_by_seed() {
        let g = ConstraintGraph::new(2, [(1, 2)], 2).unwrap();
        let colorings = g.colorings();
        let relation = Recolorability::empty(2).unwrap();

        let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();
        let seeds: Vec<&Coloring> = space.components().iter().map(Component::seed).collect();
        assert_eq!(seeds, vec![&coloring(&[1, 2]), &coloring(&[2, 1])]);
    }

    #[test]
    fn moves_respect_domains() {
        // Vertex 2 may not take color 3, so 1-2-1 never becomes 1-3-1.
        let g = ConstraintGraph::with_domains(3, [(1, 2), (2, 3)], 3, [(2, vec![1, 2])])
            .unwrap();
        let colorings = g.colorings();
        let relation = Recolorability::complete(3).unwrap();

        let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();
        let home = space.component_of(&coloring(&[1, 2, 1])).unwrap();
        assert!(home
            .moves()
            .iter()
            .all(|m| m.vertex() != 2 || m.colors() != (2, 3)));
        assert_well_formed(&space, &colorings, &relation);
    }

    #[test]
    fn complete_edges_on_path() {
        // Path 1-2, colors {1,2,3}, relation 1-2 only.
        // Colorings: 12 13 21 23 31 32. Moves: 13-23 (v1), 31-32 (v2).
        let g = ConstraintGraph::new(2, [(1, 2)], 3).unwrap();
        let colorings = g.colorings();
        let relation = Recolorability::from_pairs(3, [(1, 2)]).unwrap();

        let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();

        assert_eq!(space.len(), 4);
        assert_eq!(space.move_count(), 2);

        let pair = space.component_of(&coloring(&[1, 3])).unwrap();
        assert_eq!(pair.len(), 2);
        assert!(pair.contains(&coloring(&[2, 3])));
        assert_eq!(pair.depth(), 1);

        assert!(space.component_of(&coloring(&[1, 2])).unwrap().is_frozen());
        assert!(space.component_of(&coloring(&[3, 3])).is_none());
    }

    #[test]
    fn traversal_edges_form_spanning_trees() {
        let g = ConstraintGraph::new(4, generators::cycle(4), 3).unwrap();
        let colorings = g.colorings();
        let relation = Recolorability::complete(3).unwrap();

        let tree = SolutionSpace::build_with(
            &g,
            &colorings,
            &relation,
            SpaceConfig::with_edges(EdgeMode::Traversal),
        )
        .unwrap();
        let full = SolutionSpace::build(&g, &colorings, &relation).unwrap();

        assert_eq!(tree.len(), full.len());
        for (t, f) in tree.components().iter().zip(full.components()) {
            assert_eq!(t.colorings(), f.colorings());
            assert_eq!(t.moves().len(), t.len() - 1);
            assert!(t.moves().is_subset(f.moves()));
            assert_eq!(t.depth(), f.depth());
        }
    }

    #[test]
    fn depth_matches_reference_eccentricity() {
        let g = ConstraintGraph::new(3, [(1, 2), (2, 3)], 3).unwrap();
        let colorings = g.colorings();
        let relation = Recolorability::cycle(3).unwrap();
        let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();
        let component = &space.components()[0];

        // Reference BFS distances from the seed over the recorded moves.
        let mut dist: Vec<(Coloring, usize)> = vec![(component.seed().clone(), 0)];
        let mut queue = VecDeque::from([component.seed().clone()]);
        while let Some(current) = queue.pop_front() {
            let d = dist.iter().find(|(c, _)| *c == current).unwrap().1;
            for m in component.moves().iter().filter(|m| m.touches(&current)) {
                let (a, b) = m.endpoints();
                let other = if *a == current { b } else { a };
                if dist.iter().all(|(c, _)| c != other) {
                    dist.push((other.clone(), d + 1));
                    queue.push_back(other.clone());
                }
            }
        }

        assert_eq!(dist.len(), component.len());
        assert_eq!(dist.iter().map(|(_, d)| *d).max(), Some(component.depth()));
    }

    #[test]
    fn relation_palette_mismatch_rejected() {
        let g = path3();
        let relation = Recolorability::complete(4).unwrap();
        assert_eq!(
            SolutionSpace::build(&g, &g.colorings(), &relation),
            Err(Error::ColorCountMismatch {
                graph: 3,
                relation: 4
            })
        );
    }

    #[test]
    fn coloring_length_mismatch_rejected() {
        let g = path3();
        let relation = Recolorability::complete(3).unwrap();
        let colorings: ColoringSet = [coloring(&[1, 2])].into_iter().collect();
        assert_eq!(
            SolutionSpace::build(&g, &colorings, &relation),
            Err(Error::ColoringLengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn build_is_idempotent() {
        let g = ConstraintGraph::new(4, generators::path(4), 3).unwrap();
        let colorings = g.colorings();
        let relation = Recolorability::from_pairs(3, [(1, 2), (2, 3)]).unwrap();

        let first = SolutionSpace::build(&g, &colorings, &relation).unwrap();
        let second = SolutionSpace::build(&g, &colorings, &relation).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn move_new_normalizes_order() {
        let a = coloring(&[1, 2]);
        let b = coloring(&[3, 2]);
        let ab = Move::new(&a, &b).unwrap();
        let ba = Move::new(&b, &a).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.vertex(), 1);
        assert_eq!(ab.colors(), (1, 3));
        assert!(Move::new(&a, &a).is_none());
        assert!(Move::new(&a, &coloring(&[2, 1])).is_none());
    }

    prop_compose! {
        fn small_space()
            (n in 1usize..=4, k in 1usize..=3)
            (
                edges in prop::collection::vec((1..=n, 1..=n), 0..=6),
                pairs in prop::collection::vec((1..=k, 1..=k), 0..=4),
                n in Just(n),
                k in Just(k),
            )
            -> (ConstraintGraph, Recolorability)
        {
            (
                ConstraintGraph::new(n, edges, k).unwrap(),
                Recolorability::from_pairs(k, pairs).unwrap(),
            )
        }
    }

    proptest! {
        // Components partition the colorings, moves are legal, and no move
        // crosses components.
        #[test]
        fn prop_components_partition((g, relation) in small_space()) {
            let colorings = enumerate(&g, SearchConfig::default());
            let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();
            assert_well_formed(&space, &colorings, &relation);
        }

        // Complete edge mode records exactly the legal pairs inside the input.
        #[test]
        fn prop_complete_edges_match_pairwise_scan((g, relation) in small_space()) {
            let colorings = g.colorings();
            let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();

            let mut expected: Set<Move> = Set::new();
            let members: Vec<&Coloring> = colorings.iter().collect();
            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    if let Some(m) = Move::new(a, b) {
                        let (from, to) = m.colors();
                        if relation.allows(from, to) {
                            expected.insert(m);
                        }
                    }
                }
            }

            let mut recorded: Set<Move> = Set::new();
            for component in space.components() {
                recorded.extend(component.moves().iter().cloned());
            }
            prop_assert_eq!(recorded, expected);
        }
    }

    #[test]
    fn random_stress_partition() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_5350_4143_455F_5041);

        for _case in 0..60 {
            let n = rng.random_range(1..=5usize);
            let k = rng.random_range(2..=3usize);

            let edges = generators::random_tree(n, &mut rng);
            let g = ConstraintGraph::new(n, edges, k).unwrap();

            let pairs: Vec<(Color, Color)> = (0..rng.random_range(0..=3))
                .map(|_| (rng.random_range(1..=k), rng.random_range(1..=k)))
                .collect();
            let relation = Recolorability::from_pairs(k, pairs).unwrap();

            let colorings = g.colorings();
            let space = SolutionSpace::build(&g, &colorings, &relation).unwrap();
            assert_well_formed(&space, &colorings, &relation);
        }
    }
}
