use std::collections::VecDeque;

use bit_set::BitSet;

use crate::automaton::StateIndex;

use super::Successors;

/// Allows iterating over the states that are reachable from a given origin in some graph
/// implementing [`Successors`]. States are produced in breadth-first order, each one exactly
/// once, starting with the origin itself.
#[derive(Debug, Clone)]
pub struct ReachableStates<'a, G: Successors> {
    graph: &'a G,
    seen: BitSet,
    queue: VecDeque<StateIndex>,
}

impl<'a, G: Successors> ReachableStates<'a, G> {
    /// Starts a traversal of `graph` in `origin`.
    pub fn new(graph: &'a G, origin: StateIndex) -> Self {
        let mut seen = BitSet::with_capacity(graph.size());
        seen.insert(origin);
        let queue = [origin].into_iter().collect();
        Self { graph, seen, queue }
    }
}

impl<'a, G: Successors> Iterator for ReachableStates<'a, G> {
    type Item = StateIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let q = self.queue.pop_front()?;
        for p in self.graph.successors(q) {
            if self.seen.insert(p) {
                self.queue.push_back(p);
            }
        }
        Some(q)
    }
}
