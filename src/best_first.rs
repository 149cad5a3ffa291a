//! This module implements the best-first search shared by both solvers, modelled on
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//! Unlike that function it records the order in which nodes are expanded and keeps every
//! generated node in an arena, so superseded frontier entries never need a decrease-key.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::{IndexMap, IndexSet};
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Parent index of the start node.
const NO_PARENT: usize = usize::MAX;

struct SearchNode<N> {
    position: N,
    parent: usize,
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, equal estimates in insertion order
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Outcome of a single search. `path` is empty and `cost` is zero if the goal was not reached.
pub(crate) struct Exploration<N, C> {
    pub path: Vec<N>,
    pub cost: C,
    pub visited: Vec<N>,
}

fn reverse_path<N: Clone>(nodes: &[SearchNode<N>], goal: usize) -> Vec<N> {
    let mut path: Vec<N> =
        std::iter::successors(nodes.get(goal), |node| nodes.get(node.parent))
            .map(|node| node.position.clone())
            .collect();
    path.reverse();
    path
}

/// Expands nodes in order of `cost + heuristic` until `success` holds for a popped node or the
/// frontier runs dry. Every improvement of a node's cost pushes a fresh entry; entries for nodes
/// that were closed in the meantime, or whose cost has since been improved, are dropped on pop.
pub(crate) fn best_first<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Exploration<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut nodes: Vec<SearchNode<N>> = vec![SearchNode {
        position: start.clone(),
        parent: NO_PARENT,
    }];
    let mut costs: FxIndexMap<N, C> = FxIndexMap::default();
    costs.insert(start.clone(), Zero::zero());
    // Insertion order of the closed set is the expansion order.
    let mut closed: FxIndexSet<N> = FxIndexSet::default();
    let mut to_see = BinaryHeap::new();
    let mut sequence = 0;
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        sequence,
        index: 0,
    });
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let node = nodes[index].position.clone();
        if closed.contains(&node) {
            continue;
        }
        if costs.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        closed.insert(node.clone());
        if success(&node) {
            let path = reverse_path(&nodes, index);
            let cost = costs.get(&node).copied().unwrap_or(cost);
            return Exploration {
                path,
                cost,
                visited: closed.into_iter().collect(),
            };
        }
        for (successor, move_cost) in successors(&node) {
            if closed.contains(&successor) {
                continue;
            }
            let new_cost = cost + move_cost;
            match costs.entry(successor.clone()) {
                Vacant(e) => {
                    e.insert(new_cost);
                }
                Occupied(mut e) => {
                    if *e.get() > new_cost {
                        e.insert(new_cost);
                    } else {
                        continue;
                    }
                }
            }
            let estimated_cost = new_cost + heuristic(&successor);
            nodes.push(SearchNode {
                position: successor,
                parent: index,
            });
            sequence += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost,
                cost: new_cost,
                sequence,
                index: nodes.len() - 1,
            });
        }
    }
    Exploration {
        path: Vec::new(),
        cost: Zero::zero(),
        visited: closed.into_iter().collect(),
    }
}
