use crate::{
    automaton::{Automaton, StateIndex},
    math::Set,
};

use super::Successors;

/// Symmetric adjacency between the states of an automaton: two states are adjacent if
/// there is a transition from one to the other, on any symbol and in either direction.
/// It is used for deciding weak connectivity only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    neighbors: Vec<Set<StateIndex>>,
}

impl UndirectedGraph {
    /// Builds the adjacency of `automaton`.
    pub fn from_automaton(automaton: &Automaton) -> Self {
        let mut neighbors = vec![Set::default(); automaton.size()];
        for t in automaton.transitions() {
            neighbors[t.source()].insert(t.target());
            neighbors[t.target()].insert(t.source());
        }
        Self { neighbors }
    }

    /// The states adjacent to `state`.
    pub fn neighbors(&self, state: StateIndex) -> &Set<StateIndex> {
        &self.neighbors[state]
    }
}

impl Successors for UndirectedGraph {
    type SuccessorsIter<'a> = std::iter::Copied<std::collections::hash_set::Iter<'a, StateIndex>>;

    fn size(&self) -> usize {
        self.neighbors.len()
    }

    fn successors(&self, state: StateIndex) -> Self::SuccessorsIter<'_> {
        self.neighbors[state].iter().copied()
    }
}
