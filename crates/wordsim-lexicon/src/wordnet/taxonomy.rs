//! Hypernym taxonomy on petgraph.
//!
//! Node `i` is sense `i`; edges run from a sense to each of its hypernyms
//! and instance hypernyms. Depths are precomputed once at load time.

use std::collections::VecDeque;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use wordsim_core::{FxHashMap, SenseId};

/// Hypernym distances from one sense, optionally with a simulated root
/// placed one step above the farthest ancestor.
#[derive(Debug, Clone, Default)]
pub struct HypernymDistances {
    pub real: FxHashMap<usize, usize>,
    pub root: Option<usize>,
}

impl HypernymDistances {
    /// Distances for the simulated root itself.
    pub fn of_root() -> Self {
        Self {
            real: FxHashMap::default(),
            root: Some(0),
        }
    }

    /// Shortest combined distance through any shared node.
    pub fn meet(&self, other: &HypernymDistances) -> Option<usize> {
        let (small, large) = if self.real.len() <= other.real.len() {
            (self, other)
        } else {
            (other, self)
        };
        let through_real = small
            .real
            .iter()
            .filter_map(|(node, d1)| large.real.get(node).map(|d2| d1 + d2))
            .min();
        let through_root = match (self.root, other.root) {
            (Some(a), Some(b)) => Some(a + b),
            _ => None,
        };
        match (through_real, through_root) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

pub struct Taxonomy {
    graph: DiGraph<SenseId, ()>,
    min_depth: Vec<usize>,
    max_depth: Vec<usize>,
}

const UNVISITED: u8 = 0;
const IN_PROGRESS: u8 = 1;
const DONE: u8 = 2;

impl Taxonomy {
    /// Build from `(hyponym, hypernym)` index pairs over `node_count` senses.
    pub fn new(node_count: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = DiGraph::with_capacity(node_count, node_count);
        for i in 0..node_count {
            graph.add_node(SenseId::new(i as u32));
        }
        for (child, parent) in edges {
            if child < node_count && parent < node_count {
                graph.add_edge(NodeIndex::new(child), NodeIndex::new(parent), ());
            }
        }
        let (min_depth, max_depth) = compute_depths(&graph);
        Self {
            graph,
            min_depth,
            max_depth,
        }
    }

    /// Direct hypernyms of a sense, in insertion order.
    pub fn hypernyms(&self, sense: usize) -> Vec<usize> {
        let mut parents: Vec<usize> = self
            .graph
            .neighbors_directed(NodeIndex::new(sense), Direction::Outgoing)
            .map(|n| n.index())
            .collect();
        // petgraph yields the most recently added edge first
        parents.reverse();
        parents
    }

    /// Shortest hops to a top-level sense.
    pub fn min_depth(&self, sense: usize) -> usize {
        self.min_depth[sense]
    }

    /// Longest hops to a top-level sense.
    pub fn max_depth(&self, sense: usize) -> usize {
        self.max_depth[sense]
    }

    /// BFS over hypernym edges. The sense itself is at distance 0.
    pub fn hypernym_distances(&self, sense: usize, simulate_root: bool) -> HypernymDistances {
        let mut real: FxHashMap<usize, usize> = FxHashMap::default();
        let mut queue = VecDeque::new();
        queue.push_back((sense, 0usize));

        while let Some((node, depth)) = queue.pop_front() {
            if real.contains_key(&node) {
                continue;
            }
            real.insert(node, depth);
            for parent in self.hypernyms(node) {
                queue.push_back((parent, depth + 1));
            }
        }

        let root = if simulate_root {
            real.values().max().map(|d| d + 1)
        } else {
            None
        };
        HypernymDistances { real, root }
    }
}

/// Min/max depth for every node. Back edges of a cycle are ignored.
fn compute_depths(graph: &DiGraph<SenseId, ()>) -> (Vec<usize>, Vec<usize>) {
    let n = graph.node_count();
    let mut min_depth = vec![0usize; n];
    let mut max_depth = vec![0usize; n];
    let mut state = vec![UNVISITED; n];
    let mut stack: Vec<(usize, bool)> = Vec::new();

    for start in 0..n {
        if state[start] != UNVISITED {
            continue;
        }
        stack.push((start, false));
        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                if state[node] != UNVISITED {
                    continue;
                }
                state[node] = IN_PROGRESS;
                stack.push((node, true));
                for parent in graph.neighbors_directed(NodeIndex::new(node), Direction::Outgoing) {
                    if state[parent.index()] == UNVISITED {
                        stack.push((parent.index(), false));
                    }
                }
                continue;
            }

            let mut lo: Option<usize> = None;
            let mut hi: Option<usize> = None;
            for parent in graph.neighbors_directed(NodeIndex::new(node), Direction::Outgoing) {
                let p = parent.index();
                if state[p] != DONE {
                    continue;
                }
                lo = Some(lo.map_or(min_depth[p] + 1, |v| v.min(min_depth[p] + 1)));
                hi = Some(hi.map_or(max_depth[p] + 1, |v| v.max(max_depth[p] + 1)));
            }
            min_depth[node] = lo.unwrap_or(0);
            max_depth[node] = hi.unwrap_or(0);
            state[node] = DONE;
        }
    }

    (min_depth, max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 entity <- 1 animal <- 2 dog
    //          <- 3 thing  <- 2 dog (second hypernym)
    fn diamond() -> Taxonomy {
        Taxonomy::new(4, [(1, 0), (3, 0), (2, 1), (2, 3)])
    }

    #[test]
    fn depths() {
        let t = diamond();
        assert_eq!(t.min_depth(0), 0);
        assert_eq!(t.max_depth(2), 2);
        assert_eq!(t.min_depth(2), 2);
    }

    #[test]
    fn uneven_paths_have_distinct_min_and_max() {
        // 0 <- 1 <- 2 <- 3 and 3 -> 0 directly
        let t = Taxonomy::new(4, [(1, 0), (2, 1), (3, 2), (3, 0)]);
        assert_eq!(t.min_depth(3), 1);
        assert_eq!(t.max_depth(3), 3);
    }

    #[test]
    fn bfs_distances() {
        let t = diamond();
        let d = t.hypernym_distances(2, false);
        assert_eq!(d.real.get(&2), Some(&0));
        assert_eq!(d.real.get(&1), Some(&1));
        assert_eq!(d.real.get(&0), Some(&2));
        assert_eq!(d.root, None);

        let with_root = t.hypernym_distances(2, true);
        assert_eq!(with_root.root, Some(3));
    }

    #[test]
    fn meet_prefers_shortest_route() {
        let t = diamond();
        let a = t.hypernym_distances(1, false);
        let b = t.hypernym_distances(3, false);
        assert_eq!(a.meet(&b), Some(2));
        let disjoint = Taxonomy::new(2, []);
        let x = disjoint.hypernym_distances(0, false);
        let y = disjoint.hypernym_distances(1, false);
        assert_eq!(x.meet(&y), None);
        let xr = disjoint.hypernym_distances(0, true);
        let yr = disjoint.hypernym_distances(1, true);
        assert_eq!(xr.meet(&yr), Some(2));
    }

    #[test]
    fn cycles_do_not_hang() {
        let t = Taxonomy::new(2, [(0, 1), (1, 0)]);
        assert!(t.max_depth(0) <= 1);
        let d = t.hypernym_distances(0, false);
        assert_eq!(d.real.len(), 2);
    }
}
